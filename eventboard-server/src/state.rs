use crate::config::ProxyConfig;

/// Shared application state: the configuration and a reused outbound HTTP
/// client. No other cross-request state exists; each request allocates its
/// own request/response values.
#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        AppState {
            config,
            http: reqwest::Client::new(),
        }
    }
}
