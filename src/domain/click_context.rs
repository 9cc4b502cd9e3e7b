//! Request metadata captured for a single redirect.

/// Referrer recorded when the request carries no `Referer` header.
pub const DIRECT_REFERRER: &str = "Direct";
/// Country/city recorded when the geolocation headers are absent.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Client metadata attached to a redirect.
///
/// Built by the redirect handler from request headers and handed to
/// [`crate::application::services::TrackingService`], which classifies the
/// user agent and turns it into a [`crate::domain::entities::NewClickEvent`].
///
/// Defaults are applied here so the rest of the pipeline never sees a missing
/// referrer or location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickContext {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: String,
    pub country: String,
    pub city: String,
}

impl ClickContext {
    /// Creates a click context, filling in defaults for absent values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let ctx = ClickContext::new(
    ///     Some("192.168.1.1".to_string()),
    ///     Some("Mozilla/5.0"),
    ///     None,
    ///     Some("DE"),
    ///     None,
    /// );
    /// assert_eq!(ctx.referrer, "Direct");
    /// ```
    pub fn new(
        ip: Option<String>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
    ) -> Self {
        Self {
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referrer: referrer.unwrap_or(DIRECT_REFERRER).to_string(),
            country: country.unwrap_or(UNKNOWN_LOCATION).to_string(),
            city: city.unwrap_or(UNKNOWN_LOCATION).to_string(),
        }
    }
}

impl Default for ClickContext {
    fn default() -> Self {
        Self::new(None, None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_context_full() {
        let ctx = ClickContext::new(
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0"),
            Some("https://google.com"),
            Some("FR"),
            Some("Paris"),
        );

        assert_eq!(ctx.ip, Some("192.168.1.1".to_string()));
        assert_eq!(ctx.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(ctx.referrer, "https://google.com");
        assert_eq!(ctx.country, "FR");
        assert_eq!(ctx.city, "Paris");
    }

    #[test]
    fn test_click_context_defaults() {
        let ctx = ClickContext::default();

        assert!(ctx.ip.is_none());
        assert!(ctx.user_agent.is_none());
        assert_eq!(ctx.referrer, DIRECT_REFERRER);
        assert_eq!(ctx.country, UNKNOWN_LOCATION);
        assert_eq!(ctx.city, UNKNOWN_LOCATION);
    }
}
