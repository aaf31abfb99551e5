//! Error types for the Redash client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Redash client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by Redash.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Base URI or request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client constructed without an API key.
    #[error("API key is required")]
    MissingApiKey,

    /// Client constructed with a zero or out-of-range request timeout.
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    /// Response body did not match the expected shape.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request payload could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Destination options rejected by the destination-type schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An embedded resource was not present in its parent.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Check if this error came from the transport layer.
    ///
    /// Covers network failures, malformed URLs and non-2xx responses.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ApiError { .. } | Self::InvalidUrl(_)
        )
    }

    /// HTTP status code for [`ClientError::ApiError`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Validation failure details, if this is a validation error.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Which destination-option rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A field listed as required by the schema is absent.
    MissingRequired,
    /// A field not declared by the schema was supplied in strict mode.
    UnknownField,
    /// A value's runtime kind does not match the schema's declared type.
    TypeMismatch,
}

/// A destination option that failed schema validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field} (destination type: {destination_type})")]
    MissingRequired {
        field: String,
        destination_type: String,
    },

    #[error("Invalid field ({field}) for type: {destination_type}")]
    UnknownField {
        field: String,
        destination_type: String,
    },

    #[error("Invalid value type for {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: &'static str,
    },
}

impl ValidationError {
    /// The violated rule.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingRequired { .. } => ValidationErrorKind::MissingRequired,
            Self::UnknownField { .. } => ValidationErrorKind::UnknownField,
            Self::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
        }
    }

    /// The offending option name.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequired { field, .. }
            | Self::UnknownField { field, .. }
            | Self::TypeMismatch { field, .. } => field,
        }
    }
}
