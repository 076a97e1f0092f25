//! # Shortener client
//!
//! Terminal client for a URL shortener REST API: shorten links, follow them
//! through a confirmation step, read public statistics, and manage an account
//! and its links over a cookie session.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::ShortenerGateway`] trait
//! - **Application Layer** ([`application`]) - Form validation and page services
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP gateway and session storage
//! - **API Layer** ([`api`]) - Wire DTOs and endpoint paths
//! - **UI Layer** ([`ui`]) - Localized copy, popups and text rendering
//! - **CLI Layer** ([`cli`]) - Arguments, prompts and command handlers
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="http://localhost:8000"
//! export BASE_URL="https://encurtar.link"
//!
//! shortener shorten https://example.com/some/long/path
//! shortener auth login
//! shortener profile show
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;
pub mod utils;

pub mod config;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::forms::{LoginForm, RegisterForm, ShortenForm};
    pub use crate::application::services::{
        AuthService, LinkService, ProfileService, RedirectService, Resolution, StatsService,
    };
    pub use crate::domain::ShortenerGateway;
    pub use crate::domain::entities::{CreatedLink, Link, NewLink, UserProfile};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpGateway;
    pub use crate::infrastructure::session::{Session, SessionStore};
}
