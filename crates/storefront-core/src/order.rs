//! # Orders
//!
//! Order identifiers and the confirmation handed to the success page.
//!
//! ## Order Ids
//! Ids are `ORD-` followed by the placement time in Unix milliseconds. They
//! are a reference for the shopper and the email, not an authoritative key:
//! two orders placed in the same millisecond share an id.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::CheckoutForm;
use crate::pricing::OrderBreakdown;
use crate::types::{LineItem, PaymentMethod};

/// Prefix of every client-issued order id.
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// A client-issued order reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OrderId(String);

impl OrderId {
    /// Issues the id for an order placed at `placed_at`.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use storefront_core::order::OrderId;
    ///
    /// let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
    /// assert_eq!(OrderId::issue(at).as_str(), "ORD-1718000000123");
    /// ```
    pub fn issue(placed_at: DateTime<Utc>) -> Self {
        OrderId(format!("{}{}", ORDER_ID_PREFIX, placed_at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the success page needs about a just-placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub customer: CheckoutForm,
    pub items: Vec<LineItem>,
    pub breakdown: OrderBreakdown,

    /// Gateway transaction id for online payments.
    pub payment_id: Option<String>,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn payment_method(&self) -> PaymentMethod {
        self.customer.chosen_payment_method()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_id_format() {
        let at = Utc.with_ymd_and_hms(2024, 6, 10, 6, 13, 20).unwrap();
        let id = OrderId::issue(at);
        assert_eq!(id.to_string(), format!("ORD-{}", at.timestamp_millis()));
        assert!(id.as_str().starts_with(ORDER_ID_PREFIX));
    }

    #[test]
    fn test_order_id_serializes_as_string() {
        let at = Utc.timestamp_millis_opt(42).unwrap();
        assert_eq!(serde_json::to_string(&OrderId::issue(at)).unwrap(), "\"ORD-42\"");
    }
}
