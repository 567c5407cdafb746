//! Error types for the data-fetch layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The proxy answered with a non-success status and (best-effort) a
    /// message from its error envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether another attempt could succeed. Client errors (4xx) are the
    /// caller's fault and are never retried; everything else is transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Api { status, .. } => !(400..500).contains(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_not_retryable() {
        let not_found = ClientError::Api {
            status: 404,
            message: "missing".to_string(),
        };
        let server_error = ClientError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };

        assert!(!not_found.is_retryable());
        assert!(server_error.is_retryable());
    }
}
