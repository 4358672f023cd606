//! SDK constants
//!
//! Centralized location for all domain-level constants used throughout the
//! SDK.

use rust_decimal::Decimal;

// Remote platform
pub const DEFAULT_BASE_URL: &str = "https://api.levelcredit.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Responses with a status code at or above this value are failures.
pub const FAILED_STATUS_ENTRY_POINT: u16 = 400;

// Backreporting product
pub const BACKREPORTING_PRODUCT_CODE: &str = "LC-BACKREPORT";
pub const BACKREPORTING_PRICE_CENTS: i64 = 4995;

// Error messages surfaced to callers
pub const USER_NOT_IMPORTED_MESSAGE: &str = "User was not imported correct.";
pub const SUBSCRIPTION_NOT_CREATED_MESSAGE: &str = "Subscription was not created.";
pub const EMAIL_MISSING_MESSAGE: &str = "Email should be present in sync data.";

/// List price of the backreporting product.
pub fn backreporting_price() -> Decimal {
    Decimal::new(BACKREPORTING_PRICE_CENTS, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backreporting_price_is_list_price() {
        assert_eq!(backreporting_price().to_string(), "49.95");
    }
}
