//! Per-invocation state shared by the command handlers.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::http::HttpGateway;
use crate::infrastructure::session::{Session, SessionStore};
use crate::ui::Locale;

pub struct Context {
    pub config: Config,
    pub gateway: Arc<HttpGateway>,
    pub sessions: SessionStore,
}

impl Context {
    /// Builds the gateway and restores the saved session, if any.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let gateway = HttpGateway::with_timeouts(
            &config.api_base_url,
            config.request_timeout(),
            config.connect_timeout(),
        )?;
        let sessions = SessionStore::new(config.session_file.clone());

        if let Some(session) = sessions.load()? {
            gateway.restore_session(&session);
        }

        Ok(Self {
            config,
            gateway: Arc::new(gateway),
            sessions,
        })
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Saves the cookies the gateway currently holds.
    ///
    /// The file plays the browser's cookie jar, so it is written whether or
    /// not `remember_me` was asked for; the API decides how long the
    /// session lives.
    pub fn persist_session(&self, username: &str) -> Result<(), AppError> {
        match self.gateway.session() {
            Some(session) => self.sessions.save(&session.with_username(username)),
            None => {
                warn!("Login succeeded but no session cookie was received");
                Ok(())
            }
        }
    }

    pub fn saved_session(&self) -> Result<Option<Session>, AppError> {
        self.sessions.load()
    }

    /// Forgets the saved session; failures are only logged.
    pub fn forget_session(&self) {
        match self.sessions.clear() {
            Ok(()) => debug!("Saved session removed"),
            Err(e) => warn!(error = %e, "Failed to remove saved session"),
        }
    }
}
