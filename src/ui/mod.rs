//! Terminal presentation: popups, localized copy, page rendering.

pub mod messages;
pub mod popup;
pub mod render;

pub use messages::{Locale, Text};
pub use popup::{Operation, Popup};
