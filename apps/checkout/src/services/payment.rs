//! # Payment Gateway Seam
//!
//! Online payments are captured by a third-party gateway widget. The checkout
//! only hands over the amount and the customer, and gets back exactly one
//! outcome.
//!
//! ```text
//! ┌──────────────────┐   PaymentRequest    ┌──────────────────┐
//! │   place_order    │ ──────────────────► │  PaymentGateway  │
//! │                  │ ◄────────────────── │  (widget / fake) │
//! └──────────────────┘   PaymentOutcome    └──────────────────┘
//!                        Success { transaction_id }
//!                        Failure { reason }
//! ```

use serde::Serialize;
use storefront_core::{CheckoutForm, Money};

/// What the gateway is asked to charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Final order total.
    pub amount: Money,
    pub currency: &'static str,
    pub description: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl PaymentRequest {
    pub fn new(store_name: &str, amount: Money, customer: &CheckoutForm) -> Self {
        PaymentRequest {
            amount,
            currency: "INR",
            description: format!("{} order", store_name),
            customer_name: customer.full_name.trim().to_string(),
            customer_email: customer.email.trim().to_string(),
            customer_phone: customer.phone_number.trim().to_string(),
        }
    }
}

/// Result reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum PaymentOutcome {
    Success { transaction_id: String },
    Failure { reason: String },
}

/// A payment gateway that can be asked to collect one payment.
pub trait PaymentGateway {
    async fn collect(&self, request: &PaymentRequest) -> PaymentOutcome;
}

/// Gateway used when no online provider is wired in. Every attempt fails,
/// which leaves the cart intact so the shopper can switch to cash on delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGateway;

impl PaymentGateway for UnavailableGateway {
    async fn collect(&self, _request: &PaymentRequest) -> PaymentOutcome {
        PaymentOutcome::Failure {
            reason: "No online payment provider configured".to_string(),
        }
    }
}
