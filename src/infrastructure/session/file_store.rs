use crate::error::AppError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Cookies of an authenticated session, tied to the API that issued them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub api_base_url: String,
    /// `name=value` pairs as sent in the `Cookie` header.
    pub cookies: Vec<String>,
    /// Username at login time, shown by `auth whoami` without a round trip.
    #[serde(default)]
    pub username: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(api_base_url: impl Into<String>, cookies: Vec<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            cookies,
            username: None,
            saved_at: Utc::now(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

/// Stores the [`Session`] as JSON on disk.
///
/// A missing or unreadable file means "logged out"; it is never an error
/// to load.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved session.
    ///
    /// A corrupt file is logged and treated as absent.
    pub fn load(&self) -> Result<Option<Session>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::session(format!(
                    "cannot read {}: {e}",
                    self.path.display()
                )));
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                debug!(path = %self.path.display(), "Loaded session");
                Ok(Some(session))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt session file");
                Ok(None)
            }
        }
    }

    /// Writes the session, creating parent directories as needed.
    ///
    /// On Unix the file is created with mode `0600`.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::session(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::session(format!("cannot encode session: {e}")))?;
        let write_error =
            |e: std::io::Error| AppError::session(format!("cannot write {}: {e}", self.path.display()));

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(write_error)?;

        // `mode` only applies on creation; tighten files left by older runs.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600)).map_err(|e| {
                AppError::session(format!("cannot restrict {}: {e}", self.path.display()))
            })?;
        }
        file.write_all(json.as_bytes()).map_err(write_error)?;

        debug!(path = %self.path.display(), "Saved session");
        Ok(())
    }

    /// Removes the session file. Succeeds if it is already gone.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared session");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::session(format!(
                "cannot remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
