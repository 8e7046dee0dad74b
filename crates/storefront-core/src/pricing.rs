//! # Pricing Module
//!
//! Turns a cart, an optional coupon and the storefront's pricing constants
//! into an [`OrderBreakdown`].
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal            = Σ unit_price(weight) × qty   (missing → ₹0)   │
//! │  2. discount            = subtotal × coupon %          (no coupon → ₹0) │
//! │  3. discounted_subtotal = subtotal − discount                           │
//! │  4. shipping            = tier(subtotal)   ◄── ORIGINAL subtotal        │
//! │  5. tax                 = discounted_subtotal × tax rate                │
//! │  6. total               = discounted_subtotal + tax + shipping + fees   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shipping Tiers (default policy)
//! ```text
//!   subtotal > ₹1000          → free      (strict >, ₹1000 itself pays)
//!   subtotal < ₹250           → ₹55
//!   subtotal < ₹500           → ₹65
//!   otherwise [₹500, ₹1000]   → ₹70
//! ```
//!
//! The breakdown is recomputed from scratch on every call; nothing here
//! holds state, reads a clock or fails.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coupon::Coupon;
use crate::money::Money;
use crate::types::{LineItem, Percentage};

// =============================================================================
// Shipping Policy
// =============================================================================

/// One paid shipping tier: orders whose subtotal is strictly below
/// `below` pay `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingTier {
    pub below: Money,
    pub cost: Money,
}

/// Tiered shipping on the pre-discount subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingPolicy {
    /// Orders with a subtotal strictly above this ship free.
    pub free_above: Money,

    /// Paid tiers, checked in ascending `below` order.
    pub tiers: Vec<ShippingTier>,

    /// Cost when no tier matches and the order does not ship free.
    pub fallback: Money,
}

impl ShippingPolicy {
    /// Shipping cost for an order with this subtotal.
    pub fn cost_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_above {
            return Money::zero();
        }

        self.tiers
            .iter()
            .find(|tier| subtotal < tier.below)
            .map(|tier| tier.cost)
            .unwrap_or(self.fallback)
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy {
            free_above: Money::from_rupees(1000),
            tiers: vec![
                ShippingTier {
                    below: Money::from_rupees(250),
                    cost: Money::from_rupees(55),
                },
                ShippingTier {
                    below: Money::from_rupees(500),
                    cost: Money::from_rupees(65),
                },
            ],
            fallback: Money::from_rupees(70),
        }
    }
}

// =============================================================================
// Pricing Config
// =============================================================================

/// The storefront's pricing constants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingConfig {
    /// Applied to the discounted subtotal. Zero unless configured.
    pub tax_rate: Percentage,

    pub shipping: ShippingPolicy,

    /// Flat fee added to every order. Zero unless configured.
    pub additional_fees: Money,
}

// =============================================================================
// Order Breakdown
// =============================================================================

/// Every figure shown in the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderBreakdown {
    pub subtotal: Money,
    pub discount: Money,
    pub discounted_subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub additional_fees: Money,
    pub total: Money,
}

impl OrderBreakdown {
    /// Computes the breakdown for `items` with an optional coupon.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::pricing::{OrderBreakdown, PricingConfig};
    ///
    /// let breakdown = OrderBreakdown::compute(&[], None, &PricingConfig::default());
    /// assert_eq!(breakdown.total, Money::from_rupees(55)); // empty order, lowest tier
    /// ```
    pub fn compute(items: &[LineItem], coupon: Option<&Coupon>, config: &PricingConfig) -> Self {
        let subtotal: Money = items.iter().map(LineItem::line_total).sum();

        let discount = coupon
            .map(|c| subtotal.portion(c.discount))
            .unwrap_or_default();
        let discounted_subtotal = subtotal - discount;

        let shipping = config.shipping.cost_for(subtotal);
        let tax = discounted_subtotal.portion(config.tax_rate);
        let total = discounted_subtotal + tax + shipping + config.additional_fees;

        OrderBreakdown {
            subtotal,
            discount,
            discounted_subtotal,
            shipping,
            tax,
            additional_fees: config.additional_fees,
            total,
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
