//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request could not complete (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// In-process transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Resource not found (404), with the response body
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status, with the response body
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Success status but the body is not what was expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Map a non-success status and its body text to an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(body),
            _ => Self::Status { status, body },
        }
    }

    /// The request never produced a usable answer from the server.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Transport(_) | Self::InvalidResponse(_) | Self::Serialization(_)
        )
    }

    /// Response body text carried by a status error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::NotFound(body) | Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "Miembro no encontrado.".into());
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(err.body(), Some("Miembro no encontrado."));
        assert!(!err.is_transport());

        let err = ClientError::from_status(StatusCode::BAD_REQUEST, "bad".into());
        assert!(matches!(
            err,
            ClientError::Status { status: StatusCode::BAD_REQUEST, .. }
        ));
        assert_eq!(err.body(), Some("bad"));
    }

    #[test]
    fn test_transport_classification() {
        assert!(ClientError::Transport("closed".into()).is_transport());
        assert!(ClientError::InvalidResponse("not json".into()).is_transport());
        assert!(!ClientError::Config("x".into()).is_transport());
    }
}
