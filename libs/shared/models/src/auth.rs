use std::fmt;

use serde::{Deserialize, Serialize};

/// Claims carried by the credential issued at login. Only the payload segment
/// is ever inspected client-side; the signature belongs to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Maps the token's role claim. Unknown role strings carry no privileges.
    pub fn from_claim(claim: &str) -> Option<Role> {
        match claim {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_claim(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_claim())
    }
}

/// Authentication state derived from the persisted credential at read time.
/// Never stored; recomputed on every check because the credential may expire
/// between checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.role == Some(Role::Admin)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
