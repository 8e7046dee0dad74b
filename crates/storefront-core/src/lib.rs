//! # storefront-core: Pure Checkout Logic
//!
//! This crate is the **heart** of the storefront checkout. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Checkout Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    Frontend (web storefront)                    │    │
//! │  │    Cart ──► Checkout Form ──► Payment ──► Success / WhatsApp    │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                    apps/checkout                                │    │
//! │  │    session state, email client, payment seam, redirect          │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │    │
//! │  │                                                                 │    │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │    │
//! │  │   │  money  │ │  cart   │ │ pricing │ │ coupon  │ │   form   │  │    │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │    │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐              │    │
//! │  │   │  types  │ │  order  │ │ handoff │ │  policy  │              │    │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘              │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS               │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, line item, payment method, customer profile
//! - [`money`] - Money type with integer paise (no floating point!)
//! - [`cart`] - Cart keyed by (product id, weight variant)
//! - [`coupon`] - Static coupon book and code lookup
//! - [`pricing`] - Order total calculator and shipping tiers
//! - [`form`] - Checkout form rules and saved-address pre-fill
//! - [`order`] - Order ids and confirmations
//! - [`handoff`] - WhatsApp message text
//! - [`policy`] - Refund & returns policy document
//! - [`validation`] - Field-level rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::coupon::CouponBook;
//! use storefront_core::money::Money;
//! use storefront_core::pricing::{OrderBreakdown, PricingConfig};
//! use storefront_core::types::{LineItem, Product};
//!
//! let product = Product {
//!     id: "mango".into(),
//!     name: "Mango Avakaya".into(),
//!     image: String::new(),
//!     price_per_weight: [("1000".to_string(), Money::from_rupees(500))].into(),
//! };
//! let items = vec![LineItem::new(product, "1000", 2)];
//!
//! let coupons = CouponBook::default();
//! let breakdown = OrderBreakdown::compute(&items, coupons.find("adh10"), &PricingConfig::default());
//!
//! assert_eq!(breakdown.discount, Money::from_rupees(100));
//! assert_eq!(breakdown.discounted_subtotal, Money::from_rupees(900));
//! assert_eq!(breakdown.shipping, Money::from_rupees(70)); // ₹1000 is not above ₹1000
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod error;
pub mod form;
pub mod handoff;
pub mod money;
pub mod order;
pub mod policy;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use coupon::{Coupon, CouponBook};
pub use error::{CoreError, CoreResult, FormErrors, ValidationError};
pub use form::CheckoutForm;
pub use money::Money;
pub use order::{OrderConfirmation, OrderId};
pub use pricing::{OrderBreakdown, PricingConfig, ShippingPolicy, ShippingTier};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Matches the quantity box on the order summary (1-99 jars).
pub const MAX_ITEM_QUANTITY: u32 = 99;
