//! Wire-level contract of the LevelCredit API
//!
//! Request payloads, response resources and the response envelope exchanged
//! with the remote platform through the [`crate::ports::TradelineApi`] port.
//! These types never leak into the public domain model; the mappers in
//! [`crate::mapping`] translate between the two.

pub mod errors;
pub mod requests;
pub mod resources;
pub mod response;

pub use errors::{ApiError, ApiErrorCategory, ApiResult};
pub use requests::{
    ApiBankAccount, ApiBankAccountType, ApiCardAccount, ApiPaymentAccountAddress,
    ApiPaymentAccountType, CreateTradelineSyncRequest, GetPartnerUsersFilter,
    PatchTradelineSyncRequest, PayProductRequest, PaymentSource, TradelineSyncStatus,
    TradelineSyncType, UserEmbeddedEntity,
};
pub use resources::{AccessToken, Order, Subscription, TradelineSync, User};
pub use response::{ApiResponse, ErrorCollection, ErrorEntry};
