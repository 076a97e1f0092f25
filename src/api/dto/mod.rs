//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Response DTOs convert into the
//! entities in [`crate::domain::entities`]; request DTOs are built from them.

pub mod auth;
pub mod error;
pub mod shorten;

pub use auth::{
    LoginRequest, RegisterRequest, UpdateEmailRequest, UpdatePasswordRequest,
    UpdateUsernameRequest, UserResponse,
};
pub use error::ErrorBody;
pub use shorten::{
    CreateLinkRequest, CreateLinkResponse, LinkExpirationRequest, LinkPasswordRequest,
    LinkResponse, LinkStatsResponse, RenameLinkRequest, ResolveLinkResponse,
};
