//! Persistent session store
//!
//! The signed-in state is a token plus the cached user profile, persisted
//! as one JSON document on disk. Keeping both halves in a single file makes
//! the all-or-nothing rule structural: there is no way to persist a token
//! without its user or vice versa, and `clear` removes both in one unlink.
//!
//! Storage trouble is never fatal. A failed write, an unreadable file or a
//! corrupt document all degrade to "not signed in" with a logged warning,
//! so a broken disk can cost a session but never an operation.

use paws_types::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What `load` hands back: the persisted pair, always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the token and profile together. Write failures are logged
    /// and swallowed; the caller's operation has already succeeded
    /// remotely and must not fail over local storage.
    pub fn save(&self, token: &str, user: &User) {
        let session = Session {
            token: token.to_string(),
            user: user.clone(),
        };
        let json = match serde_json::to_string_pretty(&session) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode session; continuing signed out");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(error = %e, path = %parent.display(), "failed to create session directory");
                return;
            }
        }

        // Write to a sibling temp file, then rename. A crash mid-write
        // leaves the previous session intact rather than a half-document.
        let tmp = self.tmp_path();
        if let Err(e) = fs::write(&tmp, json) {
            warn!(error = %e, path = %tmp.display(), "failed to write session file");
            return;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            warn!(error = %e, path = %self.path.display(), "failed to move session file into place");
            let _ = fs::remove_file(&tmp);
        }
    }

    /// The persisted session, or `None` when the file is missing,
    /// unreadable or does not hold a complete token + user pair.
    pub fn load(&self) -> Option<Session> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "failed to read session file");
                return None;
            }
        };
        match serde_json::from_slice::<Session>(&bytes) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "session file is corrupt; treating as signed out");
                None
            }
        }
    }

    /// Remove the persisted session. A missing file already satisfies the
    /// contract, so it is not an error.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "session cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "failed to remove session file");
            }
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
