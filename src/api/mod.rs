//! Wire layer for the URL shortener REST API.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies and their conversion to entities
//! - [`routes`] - Endpoint paths
pub mod dto;
pub mod routes;
