//! Page services for the application layer.

pub mod auth_service;
pub mod link_service;
pub mod profile_service;
pub mod redirect_service;
pub mod stats_service;

pub use auth_service::AuthService;
pub use link_service::LinkService;
pub use profile_service::{Dashboard, ProfileService};
pub use redirect_service::{RedirectService, Resolution};
pub use stats_service::StatsService;

use crate::error::AppError;

/// Maps a 401 from a protected endpoint to [`AppError::Unauthenticated`].
pub(crate) fn session_required(err: AppError) -> AppError {
    if err.is_unauthorized() {
        AppError::Unauthenticated
    } else {
        err
    }
}
