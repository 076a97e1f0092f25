//! DTOs for the link endpoints (`/short`, `/stats`, `/user/links`).

use crate::domain::entities::{CreatedLink, Link, LinkId, LinkStats, NewLink, ResolvedLink};
use crate::utils::datetime::{
    deserialize_api_timestamp, deserialize_optional_api_timestamp, serialize_optional_api_timestamp,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Body of `POST /short`.
///
/// Optional fields are omitted when unset so the API applies its defaults
/// (a generated slug, no password, no expiry).
#[derive(Debug, Serialize)]
pub struct CreateLinkRequest {
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_api_timestamp"
    )]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<NewLink> for CreateLinkRequest {
    fn from(new_link: NewLink) -> Self {
        Self {
            original_url: new_link.original_url,
            short_url: new_link.custom_slug,
            password: new_link.password,
            expires_at: new_link.expires_at,
        }
    }
}

/// Response of `POST /short`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CreateLinkResponse {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: LinkId,
    pub original_url: String,
    pub short_url: String,
    #[serde(default, deserialize_with = "deserialize_optional_api_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateLinkResponse> for CreatedLink {
    fn from(dto: CreateLinkResponse) -> Self {
        Self {
            id: dto.id,
            original_url: dto.original_url,
            slug: dto.short_url,
            created_at: dto.created_at,
        }
    }
}

/// One row of `GET /user/links`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct LinkResponse {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: LinkId,
    pub original_url: String,
    pub short_url: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "password_protected")]
    pub has_password: bool,
    #[serde(default, deserialize_with = "deserialize_optional_api_timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<LinkResponse> for Link {
    fn from(dto: LinkResponse) -> Self {
        Self {
            id: dto.id,
            original_url: dto.original_url,
            slug: dto.short_url,
            clicks: dto.clicks,
            created_at: dto.created_at,
            password_protected: dto.has_password,
            expires_at: dto.expires_at,
        }
    }
}

/// Response of `GET /stats/{slug}`.
#[derive(Debug, Deserialize)]
pub struct LinkStatsResponse {
    pub original_url: String,
    pub short_url: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<LinkStatsResponse> for LinkStats {
    fn from(dto: LinkStatsResponse) -> Self {
        Self {
            original_url: dto.original_url,
            slug: dto.short_url,
            clicks: dto.clicks,
            created_at: dto.created_at,
        }
    }
}

/// Response of `GET /short/{slug}`.
///
/// The API only guarantees `original_url`.
#[derive(Debug, Deserialize)]
pub struct ResolveLinkResponse {
    pub original_url: String,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_api_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ResolveLinkResponse {
    pub fn into_entity(self, requested_slug: &str) -> ResolvedLink {
        ResolvedLink {
            slug: self.short_url.unwrap_or_else(|| requested_slug.to_string()),
            original_url: self.original_url,
            created_at: self.created_at,
        }
    }
}

/// Body of `PATCH /short/{id}`.
#[derive(Debug, Serialize)]
pub struct RenameLinkRequest<'a> {
    pub short_url: &'a str,
}

/// Body of `PATCH /short/{id}/password`. `null` removes the password.
#[derive(Debug, Serialize)]
pub struct LinkPasswordRequest {
    pub password: Option<String>,
}

/// Body of `PATCH /short/{id}/expiration`. `null` clears the expiry.
#[derive(Debug, Serialize)]
pub struct LinkExpirationRequest {
    #[serde(serialize_with = "serialize_optional_api_timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
}
