use rust_decimal::{Decimal, RoundingStrategy};
use tradeline_domain::OrderResponse;

use crate::api::Order;

pub fn map_order_response(order: Order) -> OrderResponse {
    OrderResponse::new(
        order.id,
        order.reference_id,
        order.status,
        format_amount(order.total),
        order.created_at,
    )
}

/// Two decimal places, half away from zero.
fn format_amount(total: Decimal) -> String {
    format!("{:.2}", total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tradeline_domain::OrderStatus;

    use super::*;

    fn order(total: Decimal) -> Order {
        Order {
            id: 1,
            reference_id: "transaction_id".to_string(),
            status: OrderStatus::Complete,
            total,
            created_at: Utc.with_ymd_and_hms(2021, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn projects_order_fields() {
        let response = map_order_response(order(Decimal::new(4995, 2)));

        assert_eq!(response.id(), 1);
        assert_eq!(response.reference_id(), "transaction_id");
        assert_eq!(response.status(), OrderStatus::Complete);
        assert_eq!(response.amount(), "49.95");
        assert_eq!(response.created_at(), Utc.with_ymd_and_hms(2021, 6, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn amount_always_has_two_decimals() {
        assert_eq!(format_amount(Decimal::new(50, 0)), "50.00");
        assert_eq!(format_amount(Decimal::new(495, 1)), "49.50");
        assert_eq!(format_amount(Decimal::new(49_955, 3)), "49.96");
        assert_eq!(format_amount(Decimal::new(49_945, 3)), "49.95");
        assert_eq!(format_amount(Decimal::new(120_000, 2)), "1200.00");
    }
}
