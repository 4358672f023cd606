//! # Tradeline Domain
//!
//! Business domain types and models for the LevelCredit tradeline SDK.
//!
//! This crate contains:
//! - Domain value types (authentication results, orders, payment accounts)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (product codes, prices, defaults)
//!
//! ## Architecture
//! - No dependencies on other tradeline crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
