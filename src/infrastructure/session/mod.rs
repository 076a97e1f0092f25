//! Persistence of the login cookie between CLI runs.

pub mod file_store;

pub use file_store::{Session, SessionStore};
