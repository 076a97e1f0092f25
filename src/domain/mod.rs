//! Domain layer: client-side entities and the gateway contract.
//!
//! # Architecture
//!
//! - [`entities`] - View-model data mirrored from API responses
//! - [`gateway`] - The [`ShortenerGateway`] trait every remote call goes through
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on HTTP or presentation
//! - The gateway trait is implemented in [`crate::infrastructure::http`]
//! - Page logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod gateway;

pub use gateway::ShortenerGateway;

#[cfg(test)]
pub use gateway::MockShortenerGateway;
