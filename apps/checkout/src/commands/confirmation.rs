//! # Confirmation Commands
//!
//! Builds the WhatsApp handoff for a placed order and schedules the
//! automatic redirect.
//!
//! ## Success Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order placed!                                 ORD-1718000000000        │
//! │                                                                         │
//! │  Redirecting to WhatsApp in 5 seconds...   ◄── detailed link (auto)     │
//! │                                                                         │
//! │  [ Send Details via WhatsApp ]             ◄── short link (manual)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::Url;
use serde::Serialize;
use storefront_core::{handoff, OrderConfirmation};
use tracing::debug;

use crate::error::ApiError;
use crate::services::HandoffRedirect;
use crate::state::CheckoutConfig;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Deep links shown on the success page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffLinks {
    /// Full order details, opened by the automatic redirect.
    pub detailed: String,

    /// Name and total only, behind the manual button.
    pub short: String,
}

/// `https://wa.me/{number}?text={message}` with the message percent-encoded.
///
/// Spaces are encoded as `%20`, not `+`, so the text survives apps that do
/// not treat `+` as a space.
pub fn whatsapp_link(number: &str, message: &str) -> Result<String, ApiError> {
    let mut url = Url::parse_with_params(&format!("{}/{}", WHATSAPP_BASE, number), [("text", message)])
        .map_err(|e| ApiError::internal(format!("Invalid WhatsApp link: {}", e)))?;

    let query = url.query().map(|q| q.replace('+', "%20"));
    url.set_query(query.as_deref());

    Ok(url.into())
}

/// Builds both handoff links for a placed order.
pub fn handoff_links(
    config: &CheckoutConfig,
    order: &OrderConfirmation,
) -> Result<HandoffLinks, ApiError> {
    debug!(order_id = %order.order_id, "handoff_links command");

    Ok(HandoffLinks {
        detailed: whatsapp_link(
            &config.whatsapp_number,
            &handoff::detailed_message(&config.store_name, order),
        )?,
        short: whatsapp_link(
            &config.whatsapp_number,
            &handoff::short_message(&config.store_name, order),
        )?,
    })
}

/// Schedules the automatic redirect to the detailed link.
///
/// The returned handle must be kept alive by the success view; dropping it
/// cancels the redirect.
pub fn schedule_handoff<F>(config: &CheckoutConfig, links: &HandoffLinks, open: F) -> HandoffRedirect
where
    F: FnOnce(String) + Send + 'static,
{
    HandoffRedirect::schedule(config.redirect_delay, links.detailed.clone(), open)
}
