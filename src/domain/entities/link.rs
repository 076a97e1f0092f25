//! Link entities as seen by the client.

use chrono::{DateTime, Utc};

/// Identifier the API assigns to a link.
pub type LinkId = i64;

/// A short link owned by the signed-in user.
///
/// Mirrors one row of `GET /user/links`. The client never edits these in
/// place: after any mutation the list is fetched again.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub original_url: String,
    pub slug: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub password_protected: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has passed its expiry time at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input for `POST /short`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLink {
    pub original_url: String,
    /// Custom slug; the API generates one when absent.
    pub custom_slug: Option<String>,
    pub password: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// What the API returns after creating a link.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedLink {
    pub id: LinkId,
    pub original_url: String,
    pub slug: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Public statistics for any slug.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub original_url: String,
    pub slug: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

/// Destination of a short link, shown on the confirmation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLink {
    pub slug: String,
    pub original_url: String,
    pub created_at: Option<DateTime<Utc>>,
}
