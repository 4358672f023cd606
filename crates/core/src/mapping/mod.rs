//! Translation between wire resources and the public domain model

pub mod authenticate;
pub mod order;
pub mod payment_source;

pub use authenticate::map_authenticate_response;
pub use order::map_order_response;
pub use payment_source::{map_bank_account_type, map_payment_account_type, map_payment_source};
