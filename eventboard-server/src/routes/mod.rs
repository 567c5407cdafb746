pub mod events;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Standard API error response. `status` is set for relayed upstream
/// failures, `details` for unexpected internal ones.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Failure modes of the proxy, each with its own error envelope.
#[derive(Debug)]
pub enum ProxyError {
    /// Required server-side secrets are absent. Terminal per request;
    /// nothing was sent upstream.
    Config { message: String },
    /// The upstream API rejected the call; its status code is relayed.
    Upstream { status: StatusCode, message: String },
    /// Transport or decode failure on our side, reduced to a safe message.
    Internal { details: String },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ProxyError::Config { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Missing required environment variables",
                    message,
                    status: None,
                    details: None,
                },
            ),
            ProxyError::Upstream { status, message } => (
                status,
                ErrorResponse {
                    error: "Facebook API Error",
                    message,
                    status: Some(status.as_u16()),
                    details: None,
                },
            ),
            ProxyError::Internal { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Internal Server Error",
                    message: "Failed to fetch events".to_string(),
                    status: None,
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
