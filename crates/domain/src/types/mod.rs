//! Domain types and models

pub mod auth;
pub mod order;
pub mod payment;

pub use auth::{AuthenticateRequest, AuthenticateResponse, ClientCredentials};
pub use order::{OrderResponse, OrderStatus};
pub use payment::{
    BankAccount, BankAccountType, CardAccount, PaymentAccount, PaymentAccountAddress,
    PaymentAccountType, PaymentSourceDataRequest,
};
