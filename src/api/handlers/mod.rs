//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod ip;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod urls;

pub use ip::ip_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use urls::{list_urls_handler, update_url_handler};
