use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info};

use shared_models::auth::{Role, Session};
use shared_utils::jwt::{decode_claims, is_expired};

use crate::models::AuthError;
use crate::services::credentials::CredentialStore;

/// Process-wide session state. The session itself is never cached: every
/// check re-derives it from the persisted credential, because the credential
/// may expire between checks. Login and logout broadcast the freshly derived
/// session over a watch channel so mounted observers resync immediately.
pub struct SessionStore {
    credentials: CredentialStore,
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Initializes from whatever credential is already persisted, so a valid
    /// session survives a restart.
    pub fn new(credentials: CredentialStore) -> Self {
        let (tx, _rx) = watch::channel(Session::anonymous());
        let store = Self { credentials, tx };
        store.tx.send_replace(store.derive());
        store
    }

    /// Derives the session from the credential slot. Side effect: an
    /// expired or undecodable credential is purged during the read (lazy
    /// expiry), leaving the slot as if nothing had been stored.
    fn derive(&self) -> Session {
        let Some(token) = self.credentials.load() else {
            return Session::anonymous();
        };

        let claims = match decode_claims(&token) {
            Ok(claims) => claims,
            Err(reason) => {
                debug!("Purging undecodable credential: {}", reason);
                self.credentials.clear();
                return Session::anonymous();
            }
        };

        if is_expired(&claims, Utc::now().timestamp()) {
            debug!("Purging expired credential");
            self.credentials.clear();
            return Session::anonymous();
        }

        Session {
            authenticated: true,
            role: claims.role.as_deref().and_then(Role::from_claim),
        }
    }

    /// Fresh read; may clear the credential slot as documented on `derive`.
    pub fn current(&self) -> Session {
        self.derive()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().authenticated
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current().role
    }

    pub fn is_admin(&self) -> bool {
        self.current().is_admin()
    }

    /// The raw bearer token for outgoing requests, if a credential is
    /// currently stored.
    pub fn token(&self) -> Option<String> {
        self.credentials.load()
    }

    /// Persists the credential and notifies observers. A previous credential
    /// is overwritten wholesale.
    pub fn login(&self, token: &str) -> Result<(), AuthError> {
        self.credentials.save(token)?;
        info!("Credential stored; session opened");
        self.broadcast();
        Ok(())
    }

    pub fn logout(&self) {
        self.credentials.clear();
        info!("Session closed");
        self.broadcast();
    }

    /// Observers receive every session transition; re-deriving on receipt is
    /// idempotent and cheap.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    fn broadcast(&self) {
        self.tx.send_replace(self.derive());
    }
}
