//! Store API client errors and response classification.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`StoreClient`](super::StoreClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The addressed object does not exist on the store.
    #[error("not found ({status}): {body}")]
    NotFound { status: StatusCode, body: String },

    /// Any other non-200 response. The body is kept verbatim.
    #[error("got a non 200 status code: {status} - {body}")]
    Status { status: StatusCode, body: String },

    /// Connection, request building or body read failure.
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response whose body does not have the expected shape.
    #[error("decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The id cannot name an object, so no request was sent.
    #[error("invalid object id {id:?}")]
    InvalidId { id: String },

    /// Base address or request path does not form a valid URL.
    #[error("invalid url {url}: {reason}")]
    Url { url: String, reason: String },
}

impl ClientError {
    /// Whether the error means the remote object is absent. An id that
    /// cannot address any object counts as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::NotFound { .. } | ClientError::InvalidId { .. }
        )
    }

    /// HTTP status of a status-class error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::NotFound { status, .. } | ClientError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Classify a non-200 response into a not-found or a generic status error.
pub fn classify(status: StatusCode, body: String) -> ClientError {
    if status == StatusCode::NOT_FOUND {
        ClientError::NotFound { status, body }
    } else {
        ClientError::Status { status, body }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
