//! Short link confirmation and redirect service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ShortenerGateway;
use crate::domain::entities::ResolvedLink;
use crate::error::{AppError, KnownDetail};
use crate::utils::slug::extract_slug;
use crate::utils::validators::FieldError;

/// Outcome of resolving a short link.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Destination known; ask the user to confirm.
    Ready(ResolvedLink),
    /// The link is protected and no (or no valid) password was sent yet.
    PasswordRequired { slug: String },
}

/// Service behind the confirmation page.
pub struct RedirectService<G: ShortenerGateway> {
    gateway: Arc<G>,
}

impl<G: ShortenerGateway> RedirectService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Looks up where a short link points.
    ///
    /// `input` may be a bare slug or a full short URL. A protected link
    /// asked for without a password yields [`Resolution::PasswordRequired`];
    /// a wrong password is an error (`Invalid password`).
    pub async fn resolve(
        &self,
        input: &str,
        password: Option<String>,
    ) -> Result<Resolution, AppError> {
        let slug = extract_slug(input).ok_or(AppError::field("slug", FieldError::Required))?;
        let had_password = password.is_some();

        match self.gateway.resolve_link(&slug, password).await {
            Ok(link) => Ok(Resolution::Ready(link)),
            Err(e) if !had_password && e.known_detail() == Some(KnownDetail::PasswordProtected) => {
                debug!(%slug, "Link requires a password");
                Ok(Resolution::PasswordRequired { slug })
            }
            Err(e) => Err(e),
        }
    }

    /// Registers the click and returns the destination URL.
    ///
    /// A failed click registration is logged and does not block the redirect.
    pub async fn follow(&self, link: &ResolvedLink) -> String {
        if let Err(e) = self.gateway.register_click(&link.slug).await {
            warn!(slug = %link.slug, error = %e, "Failed to register click");
        }
        link.original_url.clone()
    }
}
