//! Utility functions for validation, date handling and slug processing.
//!
//! This module provides helpers used across the application:
//!
//! - [`validators`] - Client-side form field validation
//! - [`datetime`] - Local/UTC conversion for expiration fields and API timestamps
//! - [`slug`] - Slug extraction from pasted links and short link formatting

pub mod datetime;
pub mod slug;
pub mod validators;
