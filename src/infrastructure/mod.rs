//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the HTTP gateway to the API and local session storage.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` gateway with a cookie jar
//! - [`session`] - JSON file holding the session cookies

pub mod http;
pub mod session;
