//! Profile page service: dashboard loading and account changes.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::forms::{EmailChangeForm, PasswordChangeForm, UsernameForm};
use crate::application::services::session_required;
use crate::domain::ShortenerGateway;
use crate::domain::entities::{Link, UserProfile};
use crate::error::AppError;

/// Everything the profile page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub links: Vec<Link>,
}

/// Service behind the protected profile page.
///
/// Every call requires a session; a 401 from the API is reported as
/// [`AppError::Unauthenticated`].
pub struct ProfileService<G: ShortenerGateway> {
    gateway: Arc<G>,
}

impl<G: ShortenerGateway> ProfileService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetches profile and links concurrently.
    ///
    /// Both requests must succeed; the first failure is returned.
    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        debug!("Loading dashboard");
        let (profile, links) =
            tokio::try_join!(self.gateway.current_user(), self.gateway.user_links())
                .map_err(session_required)?;
        debug!(links = links.len(), "Dashboard loaded");
        Ok(Dashboard { profile, links })
    }

    pub async fn profile(&self) -> Result<UserProfile, AppError> {
        self.gateway.current_user().await.map_err(session_required)
    }

    /// Changes the username and returns the re-fetched profile.
    pub async fn change_username(&self, form: UsernameForm) -> Result<UserProfile, AppError> {
        form.check()?;
        let username = form.username.trim();

        self.gateway
            .update_username(username)
            .await
            .map_err(session_required)?;
        info!(username, "Username changed");
        self.profile().await
    }

    /// Changes the e-mail and returns the re-fetched profile.
    pub async fn change_email(&self, form: EmailChangeForm) -> Result<UserProfile, AppError> {
        form.check()?;

        self.gateway
            .update_email(form.into_change())
            .await
            .map_err(session_required)?;
        info!("E-mail changed");
        self.profile().await
    }

    /// Changes the password and returns the re-fetched profile.
    pub async fn change_password(
        &self,
        form: PasswordChangeForm,
    ) -> Result<UserProfile, AppError> {
        form.check()?;

        self.gateway
            .update_password(form.into_change())
            .await
            .map_err(session_required)?;
        info!("Password changed");
        self.profile().await
    }
}
