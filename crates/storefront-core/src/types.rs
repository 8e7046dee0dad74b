//! # Domain Types
//!
//! Core domain types used throughout the storefront checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      Product         │   │    LineItem     │   │ PaymentMethod   │   │
//! │  │  ──────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id                  │◄──│  product        │   │  OnlineGateway  │   │
//! │  │  name, image         │   │  weight         │   │  CashOnDelivery │   │
//! │  │  price_per_weight    │   │  quantity 1..99 │   └─────────────────┘   │
//! │  └──────────────────────┘   └─────────────────┘                         │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐     │
//! │  │   Percentage    │   │  CustomerProfile ──► Vec<SavedAddress>   │     │
//! │  │  bps (u32)      │   │  (pre-fills the checkout form)           │     │
//! │  │  1000 = 10%     │   └──────────────────────────────────────────┘     │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Weight Variants
//! Pickles are sold by jar weight. A weight variant is the gram count as a
//! string key ("250", "500", "1000") into the product's price map, exactly
//! as the catalog publishes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percentage
// =============================================================================

/// A rate represented in basis points (bps).
///
/// Used for both the tax rate and coupon discounts.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the ADH10 coupon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Creates a rate from a percentage (for configuration input).
    ///
    /// ```rust
    /// use storefront_core::types::Percentage;
    ///
    /// assert_eq!(Percentage::from_percentage(8.25).bps(), 825);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        Percentage((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Percentage(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product as the storefront sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: String,

    /// Display name shown in the order summary and messages.
    pub name: String,

    /// Image URL for the order summary thumbnail.
    pub image: String,

    /// Unit price per weight variant (grams → price).
    pub price_per_weight: BTreeMap<String, Money>,
}

impl Product {
    /// Looks up the unit price for a weight variant.
    #[inline]
    pub fn unit_price(&self, weight: &str) -> Option<Money> {
        self.price_per_weight.get(weight).copied()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A product in a chosen weight variant, with a quantity.
///
/// ## Identity
/// Two line items are "the same line" when product id AND weight match.
/// The same pickle in 250g and 500g jars is two lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub product: Product,

    /// Weight variant key into `product.price_per_weight`.
    pub weight: String,

    /// Quantity, 1..=99.
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: Product, weight: impl Into<String>, quantity: u32) -> Self {
        LineItem {
            product,
            weight: weight.into(),
            quantity,
        }
    }

    /// Whether this line is the (product id, weight) pair given.
    #[inline]
    pub fn is_line(&self, product_id: &str, weight: &str) -> bool {
        self.product.id == product_id && self.weight == weight
    }

    /// Whether the product publishes a price for this weight variant.
    #[inline]
    pub fn is_priced(&self) -> bool {
        self.product.unit_price(&self.weight).is_some()
    }

    /// Unit price for the chosen weight variant.
    ///
    /// A weight variant missing from the price map is priced at zero.
    /// Callers that care can check [`LineItem::is_priced`].
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.unit_price(&self.weight).unwrap_or_default()
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays for the order.
///
/// Wire names (`razorpay`, `cod`) match what the storefront form submits and
/// what the email backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Online payment through the hosted gateway.
    #[serde(rename = "razorpay")]
    OnlineGateway,

    /// Cash on delivery (the form's default).
    #[default]
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Parses the form value. Anything else is not a payment method.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "razorpay" => Some(PaymentMethod::OnlineGateway),
            "cod" => Some(PaymentMethod::CashOnDelivery),
            _ => None,
        }
    }

    /// Human label used in confirmations and handoff messages.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::OnlineGateway => "Online Payment (Razorpay)",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

// =============================================================================
// Customer Profile
// =============================================================================

/// An address the signed-in customer saved on an earlier order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SavedAddress {
    pub id: String,
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone_number: String,
}

/// What the identity provider tells us about the signed-in customer.
///
/// Only used to pre-fill the checkout form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CustomerProfile {
    pub full_name: String,
    pub email: String,
    pub saved_addresses: Vec<SavedAddress>,
}

impl CustomerProfile {
    pub fn saved_address(&self, id: &str) -> Option<&SavedAddress> {
        self.saved_addresses.iter().find(|a| a.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
