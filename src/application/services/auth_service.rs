//! Account registration and cookie session service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::forms::{LoginForm, RegisterForm};
use crate::domain::ShortenerGateway;
use crate::domain::entities::{Credentials, UserProfile};
use crate::error::AppError;

/// Service behind the login/register page.
///
/// The session itself lives in the gateway (a cookie jar); persisting it
/// between runs is up to the caller.
pub struct AuthService<G: ShortenerGateway> {
    gateway: Arc<G>,
}

impl<G: ShortenerGateway> AuthService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Creates an account and signs in with the same credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every invalid field before
    /// any request. `Username already registered` and friends come back as
    /// [`AppError::Api`].
    pub async fn register(&self, form: RegisterForm) -> Result<UserProfile, AppError> {
        form.check()?;

        let registration = form.into_registration();
        let credentials = Credentials {
            email: registration.email.clone(),
            password: registration.password.clone(),
            remember_me: false,
        };

        self.gateway.register(registration).await?;
        info!(email = %credentials.email, "Account registered");

        self.sign_in(credentials).await
    }

    /// Signs in and returns the profile.
    ///
    /// Only the e-mail is checked locally.
    pub async fn login(&self, form: LoginForm) -> Result<UserProfile, AppError> {
        form.check()?;
        self.sign_in(form.into_credentials()).await
    }

    /// Ends the session. An already expired session is not an error.
    pub async fn logout(&self) -> Result<(), AppError> {
        match self.gateway.logout().await {
            Ok(()) => {
                info!("Logged out");
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Session already ended on the server");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile, AppError> {
        let email = credentials.email.clone();
        self.gateway.login(credentials).await?;
        let profile = self.gateway.current_user().await?;
        info!(%email, username = %profile.username, "Logged in");
        Ok(profile)
    }
}
