//! Events proxy endpoints.
//!
//! One request in, one upstream request out: the route injects the
//! server-held credentials, forwards the caller's filters untouched and
//! relays whatever JSON the upstream returns. Retry and caching belong to
//! the caller's data-fetch layer, not here.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::{error, warn};

use eventboard_core::EventsQuery;

use crate::routes::ProxyError;
use crate::state::AppState;

/// Page size forwarded upstream when the caller does not set one.
const DEFAULT_LIMIT: u32 = 50;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/", get(identity))
        .route("/api/events", get(list_events))
}

/// GET /api/ - liveness and identity check.
async fn identity() -> Json<Value> {
    Json(json!({ "name": "eventboard" }))
}

/// GET /api/events - forward to the upstream Graph API and relay the
/// response verbatim.
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Value>, ProxyError> {
    let Some((access_token, page_id)) = state.config.credentials() else {
        return Err(ProxyError::Config {
            message: "FACEBOOK_APP_ACCESS_TOKEN and FACEBOOK_PAGE_ID must be set".to_string(),
        });
    };

    let url = format!("{}/{}/events", state.config.graph_url, page_id);

    let mut params: Vec<(&str, String)> = vec![
        ("access_token", access_token.to_string()),
        ("limit", query.limit.unwrap_or(DEFAULT_LIMIT).to_string()),
    ];
    if let Some(since) = &query.since {
        params.push(("since", since.clone()));
    }
    if let Some(until) = &query.until {
        params.push(("until", until.clone()));
    }

    let response = state
        .http
        .get(&url)
        .query(&params)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(internal)?;

    let status = response.status();
    if !status.is_success() {
        // Best effort: an unparsable error body becomes an empty object
        let body: Value = response.json().await.unwrap_or_else(|_| json!({}));
        let message = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("Failed to fetch events")
            .to_string();
        warn!(%status, upstream_message = %message, "upstream rejected events request");

        return Err(ProxyError::Upstream { status, message });
    }

    // Decoding to a Value keeps unknown upstream fields intact in the relay
    let body: Value = response.json().await.map_err(internal)?;
    Ok(Json(body))
}

/// Reduce a transport/decode failure to a safe internal error. The URL is
/// stripped first: its query string carries the access token.
fn internal(err: reqwest::Error) -> ProxyError {
    let err = err.without_url();
    error!(%err, "events proxy request failed");
    ProxyError::Internal {
        details: err.to_string(),
    }
}
