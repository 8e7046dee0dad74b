//! # Storefront Checkout CLI
//!
//! Places a cash-on-delivery order from a JSON file, the same way the
//! storefront does: cart, coupon, form validation, confirmation email and
//! the WhatsApp handoff.
//!
//! ```text
//! storefront-checkout order.json
//!
//! order.json
//! {
//!   "customer": { "fullName": "...", "email": "...", ... },
//!   "items": [ { "product": { ... }, "weight": "500", "quantity": 2 } ],
//!   "coupon": "ADH10"
//! }
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `STOREFRONT_*` variables
//! 3. Build the session from the order file
//! 4. Place the order and print the confirmation and handoff links
//! 5. Wait for the automatic redirect

use anyhow::Context;
use serde::Deserialize;
use storefront_core::{Cart, CheckoutForm, LineItem, PaymentMethod};
use tracing::info;

use storefront_checkout::commands::{checkout, confirmation, coupon};
use storefront_checkout::services::{EmailClient, UnavailableGateway};
use storefront_checkout::{init_tracing, CheckoutConfig, CheckoutSession};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderFile {
    customer: CheckoutForm,
    items: Vec<LineItem>,
    #[serde(default)]
    coupon: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CheckoutConfig::load()?;
    info!(
        backend = %config.backend_url,
        store = %config.store_name,
        "Configuration loaded"
    );

    let path = std::env::args()
        .nth(1)
        .context("usage: storefront-checkout <order.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let order: OrderFile = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;

    let mut session = CheckoutSession::with_cart(Cart::from_items(order.items)?);
    if let Some(code) = order.coupon.as_deref() {
        coupon::apply_coupon(&mut session, &config, code)?;
    }

    let mut form = order.customer;
    form.payment_method = Some(PaymentMethod::CashOnDelivery);

    let placed = checkout::place_order(
        &mut session,
        &config,
        form,
        &UnavailableGateway,
        &EmailClient::new(config.email_endpoint()),
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&placed.confirmation.breakdown)?);
    for notice in &placed.notices {
        println!("[{:?}] {}", notice.level, notice.message);
    }

    let links = confirmation::handoff_links(&config, &placed.confirmation)?;
    println!("Order {} placed", placed.confirmation.order_id);
    println!("WhatsApp (short): {}", links.short);

    let redirect = confirmation::schedule_handoff(&config, &links, |link| {
        println!("WhatsApp: {}", link);
    });
    redirect.join().await;

    Ok(())
}
