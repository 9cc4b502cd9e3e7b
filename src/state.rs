//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, TrackingService, UrlService};
use crate::infrastructure::ip_lookup::IpLookup;

/// Cloneable handle to the application services.
///
/// Each service is reference-counted; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub tracking_service: Arc<TrackingService>,
    pub auth_service: Arc<AuthService>,
    pub ip_lookup: Arc<dyn IpLookup>,
    /// Read client IPs from forwarding headers instead of the socket peer.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService>,
        tracking_service: Arc<TrackingService>,
        auth_service: Arc<AuthService>,
        ip_lookup: Arc<dyn IpLookup>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            url_service,
            tracking_service,
            auth_service,
            ip_lookup,
            behind_proxy,
        }
    }
}
