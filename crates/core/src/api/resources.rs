//! Resources returned by the LevelCredit API

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradeline_domain::OrderStatus;

/// OAuth token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Tradeline sync job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradelineSync {
    pub id: i64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Subscription embedded in a partner user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub id: Option<i64>,
    pub url: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Partner user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    /// Filled only when subscriptions were requested as embedded entities
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

/// Order created by a product payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub reference_id: String,
    pub status: OrderStatus,
    /// Accepts both `"49.95"` and `49.95` on the wire
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_total_accepts_string_and_number() {
        let from_string: Order = serde_json::from_str(
            r#"{"id":1,"reference_id":"tx","status":"complete","total":"49.95","created_at":"2021-06-01T10:00:00Z"}"#,
        )
        .unwrap();
        let from_number: Order = serde_json::from_str(
            r#"{"id":1,"reference_id":"tx","status":"complete","total":49.95,"created_at":"2021-06-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(from_string.total, Decimal::new(4995, 2));
        assert_eq!(from_string, from_number);
    }

    #[test]
    fn user_without_embedded_subscriptions() {
        let user: User = serde_json::from_str(r#"{"id":7,"email":"a@b.com"}"#).unwrap();
        assert!(user.subscriptions.is_empty());
    }
}
