use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

/// The single persisted credential slot. One file, one token, overwritten
/// wholesale on re-login. Reads and writes are single synchronous calls, so
/// there is no interleaved partial state to guard against.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read credential slot {:?}: {}", self.path, e);
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Clearing an already-empty slot is not an error.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Credential slot cleared"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to clear credential slot {:?}: {}", self.path, e),
        }
    }
}
