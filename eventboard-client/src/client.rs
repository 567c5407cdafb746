//! HTTP client for the eventboard proxy.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use eventboard_core::{EventsQuery, EventsResponse};

use crate::cache::QueryCache;
use crate::error::ClientError;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u64 = 250;

/// Error envelope returned by the proxy on failure. Anything unparsable
/// decodes as an empty body and falls back to a generic message.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Typed client for the proxy's events endpoint.
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        EventsClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /api/events with the query's filters.
    ///
    /// Failed attempts are retried up to three attempts total, except for
    /// 4xx responses, which mean the request itself is wrong and will not
    /// get better.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_events(&self, query: &EventsQuery) -> Result<EventsResponse, ClientError> {
        let mut attempt = 1;

        loop {
            match self.fetch_once(query).await {
                Ok(response) => {
                    debug!(events = response.data.len(), "fetched events");
                    return Ok(response);
                }
                Err(err) if attempt < MAX_ATTEMPTS && err.is_retryable() => {
                    warn!(%err, attempt, "events fetch failed, retrying");
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once(&self, query: &EventsQuery) -> Result<EventsResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .query(&query.to_params())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body
                    .message
                    .unwrap_or_else(|| format!("HTTP error! status: {status}")),
            });
        }

        Ok(response.json().await?)
    }
}

/// Get-or-fetch composition of [`EventsClient`] and [`QueryCache`].
///
/// Errors are returned as values and never cached; only successful
/// responses populate the cache.
pub struct CachedEventsClient {
    client: EventsClient,
    cache: QueryCache,
}

impl CachedEventsClient {
    pub fn new(client: EventsClient, cache: QueryCache) -> Self {
        CachedEventsClient { client, cache }
    }

    /// Events for this query, served from cache while fresh.
    pub async fn events(&self, query: &EventsQuery) -> Result<EventsResponse, ClientError> {
        if let Some(cached) = self.cache.get(query) {
            debug!("serving events from cache");
            return Ok(cached);
        }

        let response = self.client.fetch_events(query).await?;
        self.cache.put(query, response.clone());
        Ok(response)
    }
}
