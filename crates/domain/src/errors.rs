//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the tradeline SDK
///
/// Messages are carried verbatim so that callers see exactly what the
/// remote platform (or the failing operation) reported.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TradelineError {
    /// The transport failed before a response was received.
    #[error("{0}")]
    Client(String),

    /// The remote call completed with status >= 400 or a non-empty error
    /// collection.
    #[error("{0}")]
    Response(String),

    /// A business rule was violated by an otherwise successful response.
    #[error("{0}")]
    Logic(String),

    /// Malformed input detected locally.
    #[error("{0}")]
    InvalidArgument(String),

    /// The SDK was called in an unsupported way. Programming error; do not
    /// retry.
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`TradelineError`] for logging and caller policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradelineErrorKind {
    Client,
    Response,
    Logic,
    InvalidArgument,
    Usage,
    Config,
}

impl TradelineError {
    /// Get the kind of this error
    pub fn kind(&self) -> TradelineErrorKind {
        match self {
            Self::Client(_) => TradelineErrorKind::Client,
            Self::Response(_) => TradelineErrorKind::Response,
            Self::Logic(_) => TradelineErrorKind::Logic,
            Self::InvalidArgument(_) => TradelineErrorKind::InvalidArgument,
            Self::Usage(_) => TradelineErrorKind::Usage,
            Self::Config(_) => TradelineErrorKind::Config,
        }
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self.kind() {
            TradelineErrorKind::Client => "client",
            TradelineErrorKind::Response => "response",
            TradelineErrorKind::Logic => "logic",
            TradelineErrorKind::InvalidArgument => "invalid_argument",
            TradelineErrorKind::Usage => "usage",
            TradelineErrorKind::Config => "config",
        }
    }

    /// Message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Client(message)
            | Self::Response(message)
            | Self::Logic(message)
            | Self::InvalidArgument(message)
            | Self::Usage(message)
            | Self::Config(message) => message,
        }
    }
}

/// Result type alias for tradeline operations
pub type Result<T> = std::result::Result<T, TradelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_messages_are_displayed_verbatim() {
        let err = TradelineError::Response("The client credentials are invalid.".into());
        assert_eq!(err.to_string(), "The client credentials are invalid.");

        let err = TradelineError::Logic("User was not imported correct.".into());
        assert_eq!(err.to_string(), "User was not imported correct.");
    }

    #[test]
    fn usage_and_config_errors_are_prefixed() {
        let err = TradelineError::Usage("bad arity".into());
        assert_eq!(err.to_string(), "Usage error: bad arity");
        assert_eq!(err.message(), "bad arity");

        let err = TradelineError::Config("missing id".into());
        assert_eq!(err.to_string(), "Configuration error: missing id");
    }

    #[test]
    fn kinds_and_labels() {
        assert_eq!(TradelineError::Client("x".into()).kind(), TradelineErrorKind::Client);
        assert_eq!(
            TradelineError::InvalidArgument("x".into()).kind(),
            TradelineErrorKind::InvalidArgument
        );
        assert_eq!(TradelineError::Logic("x".into()).label(), "logic");
        assert_eq!(TradelineError::Response("x".into()).label(), "response");
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = TradelineError::Client("boom".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Client", "message": "boom" }));
    }
}
