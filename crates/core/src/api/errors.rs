//! Transport-level error types
//!
//! An [`ApiError`] means no usable response was obtained from the remote
//! platform. Responses that arrive but report failure are not errors at this
//! layer; they are returned as an [`super::ApiResponse`] and classified by the
//! mediator.

use std::time::Duration;

use thiserror::Error;

/// Categories of transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Network/connection errors and timeouts
    Network,
    /// Request could not be encoded or response could not be decoded
    Protocol,
    /// Configuration errors (bad base URL, client build failure)
    Config,
}

/// Transport errors raised by a [`crate::ports::TradelineApi`] implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Encode(_) | Self::Decode(_) => ApiErrorCategory::Protocol,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }
}

/// Result type for port calls
pub type ApiResult<T> = Result<T, ApiError>;
