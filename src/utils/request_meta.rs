//! Extraction of click metadata from HTTP request headers.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

use crate::domain::click_context::ClickContext;

/// Country header set by Cloudflare.
pub const COUNTRY_HEADER: &str = "cf-ipcountry";
/// City header set by Cloudflare (requires the "visitor location" transform).
pub const CITY_HEADER: &str = "cf-ipcity";

/// Returns a header value as a string, ignoring empty or non-UTF-8 values.
pub fn header_str<'a>(headers: &'a HeaderMap, name: impl header::AsHeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Resolves the client IP address.
///
/// When `behind_proxy` is set, the first entry of `X-Forwarded-For` (then
/// `X-Real-IP`) is preferred over the socket peer address. Enable only when a
/// trusted reverse proxy sets these headers.
///
/// # Examples
///
/// ```ignore
/// let ip = client_ip(&headers, "10.0.0.1:5555".parse().unwrap(), true);
/// ```
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = header_str(headers, "x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded.or_else(|| header_str(headers, "x-real-ip")) {
            return ip.to_string();
        }
    }

    peer.ip().to_string()
}

/// Builds the click context for a redirect request.
pub fn click_context(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> ClickContext {
    ClickContext::new(
        Some(client_ip(headers, peer, behind_proxy)),
        header_str(headers, header::USER_AGENT),
        header_str(headers, header::REFERER),
        header_str(headers, COUNTRY_HEADER),
        header_str(headers, CITY_HEADER),
    )
}
