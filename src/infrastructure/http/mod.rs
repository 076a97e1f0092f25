//! HTTP access to the shortener API.

pub mod gateway;

pub use gateway::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpGateway};
