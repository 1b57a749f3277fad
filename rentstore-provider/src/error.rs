//! Provider error types.

use thiserror::Error;

use crate::client::ClientError;
use crate::resource::{Operation, ResourceKind};

/// Errors surfaced to the host by resource controllers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A remote call failed for a reason other than drift.
    #[error("error during {op} of {kind} with id {}: {source}", .id.as_deref().unwrap_or("<unbound>"))]
    Remote {
        kind: ResourceKind,
        op: Operation,
        id: Option<String>,
        #[source]
        source: ClientError,
    },

    /// A reference block is missing or malformed. Raised before any remote call.
    #[error("{field} reference is invalid: {reason}")]
    MissingReference { field: &'static str, reason: String },

    /// A scalar attribute failed its input guard.
    #[error("invalid {field}: {reason}")]
    InvalidAttribute { field: &'static str, reason: String },

    /// The requested change touches attributes that are frozen after creation.
    #[error("{kind} attributes {fields:?} cannot change in place; destroy and recreate")]
    RequiresReplacement {
        kind: ResourceKind,
        fields: Vec<&'static str>,
    },

    /// The operation needs a bound id but the instance is absent.
    #[error("cannot {op} {kind}: no remote object bound")]
    NotBound { kind: ResourceKind, op: Operation },

    /// Create was called for an instance that already has a remote object.
    #[error("{kind} is already bound to id {id}")]
    AlreadyBound { kind: ResourceKind, id: String },

    /// The store accepted a create but returned no id.
    #[error("store returned an empty id for new {kind}")]
    EmptyId { kind: ResourceKind },

    /// Client construction failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ProviderError {
    /// Whether the underlying remote failure means the object is absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            ProviderError::Remote { source, .. } | ProviderError::Client(source) => {
                source.is_not_found()
            }
            _ => false,
        }
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_remote_error_names_kind_and_id() {
        let err = ProviderError::Remote {
            kind: ResourceKind::Customer,
            op: Operation::Read,
            id: Some("c1".to_string()),
            source: ClientError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("read of customer with id c1"), "{}", msg);
        assert!(msg.contains("boom"), "{}", msg);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_unbound_id_placeholder() {
        let err = ProviderError::Remote {
            kind: ResourceKind::Genre,
            op: Operation::Create,
            id: None,
            source: ClientError::Status {
                status: StatusCode::BAD_REQUEST,
                body: "\"name\" is required".to_string(),
            },
        };
        assert!(err.to_string().contains("<unbound>"));
    }
}
