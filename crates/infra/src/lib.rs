//! # Tradeline Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP transport built on reqwest
//! - The LevelCredit API adapter implementing `TradelineApi`
//! - Configuration loading from the environment and files
//!
//! ## Architecture
//! - Implements traits defined in `tradeline-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{LevelCreditApiClient, LevelCreditApiConfig};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
