//! # Tradeline
//!
//! Client SDK for the LevelCredit tradeline platform.
//!
//! This crate contains:
//! - [`TradelineClientBuilder`], wiring the HTTP adapter into the facade
//! - Logging setup ([`logging`])
//! - Re-exports of the public types of the domain, core and infra crates
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Holds no business logic of its own
//!
//! ```no_run
//! use tradeline::{
//!     AuthenticateRequest, BankAccount, PaymentAccountAddress, PaymentSourceDataRequest,
//!     TradelineClientBuilder,
//! };
//!
//! # async fn run() -> tradeline::Result<()> {
//! let client = TradelineClientBuilder::from_env()?.build()?;
//! let tokens = client.authenticate(AuthenticateRequest::password("user", "pass")).await?;
//!
//! let payment = PaymentSourceDataRequest::new(
//!     BankAccount::new("Jane Roe", "0001-2345-678", "044000037", "checking"),
//!     PaymentAccountAddress::new("123 Street", "Test City", "TS", 99999),
//! );
//! let order = client
//!     .purchase_backreporting(tokens.access_token(), r#"{"email":"jane@example.com"}"#, &payment)
//!     .await?;
//! println!("order {} is {}", order.id(), order.status());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod logging;

pub use builder::TradelineClientBuilder;
pub use tradeline_core::api::{ApiError, ApiErrorCategory};
pub use tradeline_core::{RequestMediator, TradelineApi, TradelineClient};
pub use tradeline_domain::{
    constants, ApiConfig, AuthenticateRequest, AuthenticateResponse, BankAccount, BankAccountType,
    CardAccount, ClientCredentials, LoggingConfig, OrderResponse, OrderStatus, PaymentAccount,
    PaymentAccountAddress, PaymentAccountType, PaymentSourceDataRequest, Result, TradelineConfig,
    TradelineError, TradelineErrorKind,
};
pub use tradeline_infra::{config, LevelCreditApiClient, LevelCreditApiConfig};
