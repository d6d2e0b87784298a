//! Client error taxonomy
//!
//! Every API operation resolves exactly once: `Ok` with the decoded payload
//! or one `ApiError`. Transport failures (no response at all) are kept
//! distinct from server rejections so callers can tell "the backend said no"
//! from "the backend never answered". Field-level validation failures never
//! appear here; they stay inside the form controllers that produced them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// tripped deadline).
    #[error("network error: {0}")]
    Network(String),

    /// 401: missing, expired or wrong credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// 403: signed in, but the role does not permit the operation.
    #[error("not allowed: {0}")]
    Authorization(String),

    /// 404: the addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// 409: the request collides with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx status, message taken from the response body
    /// when one could be decoded.
    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Rejected client-side before any request was built.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Classify a non-2xx response by status code, carrying the
    /// server-supplied message verbatim.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Authentication(message),
            403 => Self::Authorization(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::Request { status, message },
        }
    }

    /// The human-readable message without the taxonomy prefix. This is
    /// what form controllers surface inline next to the submit button.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(m)
            | Self::Authentication(m)
            | Self::Authorization(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Decode(m)
            | Self::InvalidInput(m) => m,
            Self::Request { message, .. } => message,
        }
    }

    /// The HTTP status this error was derived from, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::Authorization(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Request { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::InvalidInput(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
