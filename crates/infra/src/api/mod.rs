//! LevelCredit API adapter
//!
//! HTTP implementation of the `TradelineApi` port defined in
//! `tradeline-core`.
//!
//! # Endpoints
//!
//! - `POST  /api/oauth/v2/token` (password and refresh token grants)
//! - `POST  /api/v1/tradeline-syncs`
//! - `POST  /api/v1/tradeline-syncs/{id}/data`
//! - `PATCH /api/v1/tradeline-syncs/{id}`
//! - `GET   /api/v1/partner/users`
//! - `POST  /api/v1/products/{code}/pay`

pub mod client;

pub use client::{LevelCreditApiClient, LevelCreditApiConfig};
