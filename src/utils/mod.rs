//! Helpers shared across layers.

pub mod code_generator;
pub mod location;
pub mod request_meta;
pub mod user_agent;
