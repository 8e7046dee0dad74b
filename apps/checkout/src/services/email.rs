//! # Confirmation Email
//!
//! Posts the order to the backend's email endpoint.
//!
//! ```text
//! place_order ──► OrderEmail::from_confirmation ──► POST {backend}/api/send-email
//!                                                          │
//!                                          2xx ◄───────────┴──────────► anything else
//!                                           │                                 │
//!                                      Ok(())                       Err(NotifyError)
//! ```
//!
//! Sending is a single best-effort attempt. The caller decides what a
//! failure means (a notice, never a failed order).

use reqwest::Client;
use serde::Serialize;
use storefront_core::{LineItem, Money, OrderBreakdown, OrderConfirmation, PaymentMethod};
use thiserror::Error;
use tracing::debug;

/// The `orderDetails` object of the email payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub items: Vec<LineItem>,
    pub breakdown: OrderBreakdown,
    pub total: Money,
}

/// JSON body accepted by `POST /api/send-email`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEmail {
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone_number: String,
    pub payment_method: PaymentMethod,
    pub order_details: OrderDetails,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl OrderEmail {
    pub fn from_confirmation(order: &OrderConfirmation) -> Self {
        let customer = &order.customer;
        OrderEmail {
            email: customer.email.trim().to_string(),
            full_name: customer.full_name.trim().to_string(),
            address: customer.address.trim().to_string(),
            city: customer.city.trim().to_string(),
            state: customer.state.trim().to_string(),
            postal_code: customer.postal_code.trim().to_string(),
            phone_number: customer.phone_number.trim().to_string(),
            payment_method: order.payment_method(),
            order_details: OrderDetails {
                items: order.items.clone(),
                breakdown: order.breakdown,
                total: order.breakdown.total,
            },
            payment_id: order.payment_id.clone(),
            order_id: Some(order.order_id.to_string()),
        }
    }
}

/// Something that can tell the customer their order was placed.
pub trait OrderNotifier {
    async fn send_confirmation(&self, email: &OrderEmail) -> Result<(), NotifyError>;
}

/// HTTP client for the email backend.
#[derive(Debug, Clone)]
pub struct EmailClient {
    endpoint: String,
    http: Client,
}

impl EmailClient {
    /// `endpoint` is the full URL, e.g. `CheckoutConfig::email_endpoint()`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        EmailClient {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OrderNotifier for EmailClient {
    async fn send_confirmation(&self, email: &OrderEmail) -> Result<(), NotifyError> {
        debug!(endpoint = %self.endpoint, order_id = ?email.order_id, "Sending confirmation email");

        let response = self.http.post(&self.endpoint).json(email).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status, body });
        }

        Ok(())
    }
}

/// Errors from the email backend.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Could not reach the backend or read its response.
    #[error("Email request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Email backend returned {status}: {body}")]
    Rejected { status: u16, body: String },
}
