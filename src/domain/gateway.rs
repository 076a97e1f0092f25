//! Gateway trait for the shortener API.

use crate::domain::entities::{
    CreatedLink, Credentials, EmailChange, Link, LinkId, LinkStats, NewLink, PasswordChange,
    Registration, ResolvedLink, UserProfile,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Every remote operation the client performs.
///
/// Services depend on this trait rather than on HTTP, so they can be tested
/// against mocks.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpGateway`] - `reqwest` implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Non-success responses surface as [`AppError::Api`] carrying the status and
/// the `detail` string; transport failures as [`AppError::Network`];
/// malformed bodies as [`AppError::Decode`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerGateway: Send + Sync {
    /// `POST /short`.
    async fn create_link(&self, new_link: NewLink) -> Result<CreatedLink, AppError>;

    /// `GET /short/{slug}`, sending the `password` header when given.
    async fn resolve_link(
        &self,
        slug: &str,
        password: Option<String>,
    ) -> Result<ResolvedLink, AppError>;

    /// `POST /click/{slug}`.
    async fn register_click(&self, slug: &str) -> Result<(), AppError>;

    /// `PATCH /short/{id}`.
    async fn rename_link(&self, id: LinkId, new_slug: &str) -> Result<(), AppError>;

    /// `PATCH /short/{id}/password`; `None` removes the password.
    async fn set_link_password(&self, id: LinkId, password: Option<String>)
    -> Result<(), AppError>;

    /// `PATCH /short/{id}/expiration`; `None` clears the expiry.
    async fn set_link_expiration(
        &self,
        id: LinkId,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError>;

    /// `DELETE /short/{id}`.
    async fn delete_link(&self, id: LinkId) -> Result<(), AppError>;

    /// `GET /stats/{slug}`.
    async fn link_stats(&self, slug: &str) -> Result<LinkStats, AppError>;

    /// `POST /auth/register`.
    async fn register(&self, registration: Registration) -> Result<(), AppError>;

    /// `POST /auth/login`; the session cookie is kept by the implementation.
    async fn login(&self, credentials: Credentials) -> Result<(), AppError>;

    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), AppError>;

    /// `GET /auth/me`.
    async fn current_user(&self) -> Result<UserProfile, AppError>;

    /// `PATCH /auth/me/username`.
    async fn update_username(&self, username: &str) -> Result<(), AppError>;

    /// `PATCH /auth/me/email`.
    async fn update_email(&self, change: EmailChange) -> Result<(), AppError>;

    /// `PATCH /auth/me/password`.
    async fn update_password(&self, change: PasswordChange) -> Result<(), AppError>;

    /// `GET /user/links`.
    async fn user_links(&self) -> Result<Vec<Link>, AppError>;
}
