//! # Tradeline Core
//!
//! Request orchestration for the LevelCredit tradeline SDK - no I/O.
//!
//! This crate contains:
//! - The wire contract of the LevelCredit API ([`api`])
//! - The [`TradelineApi`] port implemented by infrastructure adapters
//! - Mappers between wire resources and domain types
//! - [`RequestMediator`], one method per remote operation
//! - [`TradelineClient`], the public facade
//!
//! ## Architecture Principles
//! - Only depends on `tradeline-domain`
//! - No HTTP code; all remote calls go through the port
//! - Operations are strictly sequential awaits

pub mod api;
pub mod client;
pub mod mapping;
pub mod mediator;
pub mod ports;
pub mod sync_data;

pub use client::TradelineClient;
pub use mediator::RequestMediator;
pub use ports::TradelineApi;
