//! Environment-driven proxy configuration.

use std::env;

/// Upstream Graph API base used when FACEBOOK_GRAPH_URL is not set.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com/v23.0";

/// Proxy configuration.
///
/// The two Graph secrets are required by the events route but checked per
/// request, so a misconfigured server still boots, serves `/api/` and
/// returns structured configuration errors instead of refusing to start.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub access_token: Option<String>,
    pub page_id: Option<String>,
    pub graph_url: String,
}

impl ProxyConfig {
    /// Read configuration from the environment. Empty values count as
    /// unset.
    pub fn from_env() -> Self {
        ProxyConfig {
            access_token: env::var("FACEBOOK_APP_ACCESS_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            page_id: env::var("FACEBOOK_PAGE_ID").ok().filter(|v| !v.is_empty()),
            graph_url: env::var("FACEBOOK_GRAPH_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_GRAPH_URL.to_string()),
        }
    }

    /// Both secrets, or None when the events route must fail with a
    /// configuration error before any outbound call.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.access_token.as_deref()?, self.page_id.as_deref()?))
    }
}
