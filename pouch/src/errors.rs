//! Error types for pouch transports.
//!
//! Errors produced by a delegate (the network transport or a stub
//! generator) are handed back to the caller exactly as they were returned.
//! The interceptor itself only ever produces [`TransportError::Configuration`].

use thiserror::Error;

/// The main error type for a round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The forwarding branch was reached but no transport was configured.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The network transport failed.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A custom transport failed to reach its target.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The stub generator could not produce a response.
    #[error("Stub generation failed: {0}")]
    Stub(String),

    /// A request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value was rejected.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A response body could not be decoded.
    #[error("Invalid body: {0}")]
    Body(String),

    /// A JSON body failed to serialize or deserialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransportError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a stub generation error.
    #[must_use]
    pub fn stub(message: impl Into<String>) -> Self {
        Self::Stub(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Returns true for configuration errors.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns true if the error came from the stub generator.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        matches!(self, Self::Stub(_))
    }
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = TransportError::configuration("no transport configured");
        assert_eq!(err.to_string(), "Configuration error: no transport configured");
        assert!(err.is_configuration());
        assert!(!err.is_stub());
    }

    #[test]
    fn test_stub_error_display() {
        let err = TransportError::stub("template missing");
        assert_eq!(err.to_string(), "Stub generation failed: template missing");
        assert!(err.is_stub());
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TransportError = parse_err.into();
        assert!(matches!(err, TransportError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
