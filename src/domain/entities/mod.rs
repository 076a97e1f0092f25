//! Client-side entities mirrored from API responses.
//!
//! Nothing here is owned or persisted by the client; the API is the source of
//! truth and these are refreshed by re-fetching.
//!
//! # Entity Types
//!
//! - [`Link`] - A short link in the user's dashboard
//! - [`LinkStats`] - Public statistics for a slug
//! - [`ResolvedLink`] - Destination shown before redirecting
//! - [`UserProfile`] - The signed-in account
//!
//! Input shapes (`NewLink`, `Credentials`, `Registration`, `EmailChange`,
//! `PasswordChange`) are passed to the gateway after validation.

pub mod link;
pub mod user;

pub use link::{CreatedLink, Link, LinkId, LinkStats, NewLink, ResolvedLink};
pub use user::{Credentials, EmailChange, PasswordChange, Registration, UserProfile};
