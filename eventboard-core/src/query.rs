//! Query contract for the events endpoint.

use serde::{Deserialize, Serialize};

/// Filters accepted by `GET /api/events`. All fields are optional; the
/// proxy forwards them to the upstream API without validating their
/// contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsQuery {
    /// Start of the date window (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// End of the date window (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    /// Page size; the proxy applies its own default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl EventsQuery {
    /// Query-string pairs for an HTTP request, skipping absent fields.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(since) = &self.since {
            params.push(("since", since.clone()));
        }
        if let Some(until) = &self.until {
            params.push(("until", until.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }

    /// Stable identity of this query, used as the cache key.
    pub fn cache_key(&self) -> String {
        format!(
            "since={}&until={}&limit={}",
            self.since.as_deref().unwrap_or(""),
            self.until.as_deref().unwrap_or(""),
            self.limit.map(|l| l.to_string()).unwrap_or_default(),
        )
    }
}
