//! Application layer services implementing client behaviour.
//!
//! Each service backs one page of the client: it validates form input,
//! calls the [`crate::domain::ShortenerGateway`], and re-fetches server
//! state after every mutation instead of patching it locally.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and link management
//! - [`services::auth_service::AuthService`] - Registration, login and logout
//! - [`services::profile_service::ProfileService`] - Dashboard and account changes
//! - [`services::redirect_service::RedirectService`] - Short link confirmation
//! - [`services::stats_service::StatsService`] - Public link statistics

pub mod forms;
pub mod services;
