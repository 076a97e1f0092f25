//! Link creation and management service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::application::forms::ShortenForm;
use crate::application::services::session_required;
use crate::domain::ShortenerGateway;
use crate::domain::entities::{CreatedLink, Link, LinkId};
use crate::error::AppError;
use crate::utils::validators::{validate_expiration, validate_required, validate_slug};

/// Service behind the home page form and the "my links" table.
///
/// Every mutation is followed by a fresh `GET /user/links`, and that list is
/// what the caller gets back.
pub struct LinkService<G: ShortenerGateway> {
    gateway: Arc<G>,
}

impl<G: ShortenerGateway> LinkService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Shortens a URL.
    ///
    /// Works with or without a session; the API attaches the link to the
    /// signed-in user when there is one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] without calling the API if the URL,
    /// custom slug, password or expiry is invalid. API rejections such as
    /// `Short URL already exists` come back as [`AppError::Api`].
    pub async fn shorten(&self, form: ShortenForm) -> Result<CreatedLink, AppError> {
        form.check(Utc::now())?;

        let new_link = form.into_new_link();
        debug!(
            custom_slug = new_link.custom_slug.is_some(),
            protected = new_link.password.is_some(),
            expires = new_link.expires_at.is_some(),
            "Shortening URL"
        );

        let created = self.gateway.create_link(new_link).await?;
        info!(slug = %created.slug, id = created.id, "Short link created");
        Ok(created)
    }

    /// Lists the signed-in user's links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] without a valid session.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.gateway.user_links().await.map_err(session_required)
    }

    /// Changes the slug of a link.
    pub async fn rename(&self, id: LinkId, new_slug: &str) -> Result<Vec<Link>, AppError> {
        let new_slug = new_slug.trim();
        validate_slug(new_slug).map_err(|e| AppError::field("slug", e))?;

        self.gateway
            .rename_link(id, new_slug)
            .await
            .map_err(session_required)?;
        info!(id, slug = new_slug, "Link renamed");
        self.list().await
    }

    /// Sets a new link password, or removes it with `None`.
    pub async fn set_password(
        &self,
        id: LinkId,
        password: Option<String>,
    ) -> Result<Vec<Link>, AppError> {
        if let Some(password) = &password {
            validate_required(password).map_err(|e| AppError::field("password", e))?;
        }

        let removing = password.is_none();
        self.gateway
            .set_link_password(id, password)
            .await
            .map_err(session_required)?;
        info!(id, removed = removing, "Link password updated");
        self.list().await
    }

    /// Sets the expiry of a link, or clears it with `None`.
    pub async fn set_expiration(
        &self,
        id: LinkId,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Link>, AppError> {
        if let Some(expires_at) = expires_at {
            validate_expiration(expires_at, Utc::now())
                .map_err(|e| AppError::field("expires_at", e))?;
        }

        self.gateway
            .set_link_expiration(id, expires_at)
            .await
            .map_err(session_required)?;
        info!(id, cleared = expires_at.is_none(), "Link expiration updated");
        self.list().await
    }

    pub async fn delete(&self, id: LinkId) -> Result<Vec<Link>, AppError> {
        self.gateway
            .delete_link(id)
            .await
            .map_err(session_required)?;
        info!(id, "Link deleted");
        self.list().await
    }
}
