//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_context`] - Request metadata captured on redirect
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler builds a [`click_context::ClickContext`] from headers
//! 2. [`crate::application::services::TrackingService`] classifies the user agent
//! 3. The record counters and a new click event are written together
//! 4. The handler answers with `302 Found`

pub mod click_context;
pub mod entities;
pub mod repositories;
