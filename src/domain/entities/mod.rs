//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A short code mapping with aggregated click counters
//! - [`ClickEvent`] - A single recorded redirect
//!
//! Creation inputs live next to their entity (`NewUrlRecord`, `NewClickEvent`).

pub mod click_event;
pub mod url_record;

pub use click_event::{ClickEvent, NewClickEvent};
pub use url_record::{CategoryCounts, NewUrlRecord, UrlRecord};
