//! Order types returned by product purchases

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Order status as reported by the platform.
///
/// Grouping into successful / failed / cancellation classes is informational
/// only; the SDK never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Complete,
    New,
    Error,
    Cancelled,
    Refunded,
    Returned,
}

impl_domain_status_conversions!(OrderStatus {
    Pending => "pending",
    Complete => "complete",
    New => "new",
    Error => "error",
    Cancelled => "cancelled",
    Refunded => "refunded",
    Returned => "returned",
});

impl OrderStatus {
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Pending | Self::Complete)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::New | Self::Error)
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Refunded | Self::Returned)
    }
}

/// Result of a successful product payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Encoded order id
    id: i64,
    /// Payment processor transaction id
    reference_id: String,
    status: OrderStatus,
    /// Money string with two decimals, e.g. `"49.95"`
    amount: String,
    created_at: DateTime<Utc>,
}

impl OrderResponse {
    pub fn new(
        id: i64,
        reference_id: impl Into<String>,
        status: OrderStatus,
        amount: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reference_id: reference_id.into(),
            status,
            amount: amount.into(),
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
