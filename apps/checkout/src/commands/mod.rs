//! # Checkout Commands Module
//!
//! All commands exposed to the storefront frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports, Notice)
//! ├── cart.rs          ◄─── Cart manipulation
//! ├── coupon.rs        ◄─── Apply / remove coupon
//! ├── checkout.rs      ◄─── Form pre-fill and place_order
//! ├── confirmation.rs  ◄─── WhatsApp links and the timed redirect
//! ├── config.rs        ◄─── Public storefront settings
//! └── policy.rs        ◄─── Refund & returns policy
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Command Flow                                │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const cart = await checkout.addToCart({ product, weight: '500' });     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn add_to_cart(                                                        │
//! │      session: &mut CheckoutSession,  ◄── the shopper's session          │
//! │      config: &CheckoutConfig,        ◄── read-only settings             │
//! │      product: &Product,                                                 │
//! │      weight: &str,                                                      │
//! │      quantity: Option<u32>,                                             │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { items, breakdown, coupon, couponInput }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

pub mod cart;
pub mod checkout;
pub mod config;
pub mod confirmation;
pub mod coupon;
pub mod policy;

/// How a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// A toast-style message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}
