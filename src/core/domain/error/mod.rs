use crate::core::domain::model::api_response::RawResponse;
use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error produced by an [`HttpTransport`](crate::HttpTransport).
///
/// The library never inspects it; it is handed back to the caller as-is.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for Proxmox API operations.
///
/// Every failure is surfaced to the immediate caller. Nothing is retried
/// and HTTP status codes are never turned into errors on their own.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// The client or a request could not be built from the supplied values.
    ///
    /// Raised before any network activity takes place.
    #[error("Configuration error: {source}")]
    Configuration { source: ValidationError },

    /// The transport failed to complete the exchange (DNS, connect, TLS,
    /// timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// A response was received but its body could not be decoded.
    ///
    /// # Fields
    /// * `source` - The JSON error, including ambiguous scalar failures
    /// * `response` - The raw response, kept for diagnostics
    #[error("Decode error (HTTP {}): {source}", .response.status())]
    Decode {
        source: serde_json::Error,
        response: Box<RawResponse>,
    },
}

impl ProxmoxError {
    /// Returns the raw response attached to the error, if one was received.
    #[must_use]
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            ProxmoxError::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns the HTTP status of the response attached to the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(RawResponse::status)
    }

    pub(crate) fn decode(source: serde_json::Error, response: RawResponse) -> Self {
        ProxmoxError::Decode {
            source,
            response: Box::new(response),
        }
    }
}

impl From<ValidationError> for ProxmoxError {
    fn from(error: ValidationError) -> Self {
        ProxmoxError::Configuration { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    pub(crate) fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
