//! # Coupon Module
//!
//! The storefront's static coupon book and code lookup.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper types: "  adh10 "                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize: trim + uppercase ──► "ADH10"                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CouponBook::find ──► Some(ADH10, 10%)  or  None                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Coupons never expire and carry no usage count: the same code can be
//! applied to every order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Percentage;

/// A discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coupon {
    /// Canonical (uppercase) code.
    pub code: String,

    /// Fraction of the subtotal taken off, in basis points.
    pub discount: Percentage,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount: Percentage) -> Self {
        Coupon {
            code: normalize_code(&code.into()),
            discount,
        }
    }
}

/// Trims surrounding whitespace and uppercases a shopper-entered code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// The set of coupons the storefront accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        CouponBook { coupons }
    }

    /// Finds a coupon by shopper-entered code (trimmed, case-insensitive).
    pub fn find(&self, entered: &str) -> Option<&Coupon> {
        let code = normalize_code(entered);
        if code.is_empty() {
            return None;
        }
        self.coupons.iter().find(|c| c.code == code)
    }

    /// Like [`CouponBook::find`] but reports an unknown code as an error.
    pub fn lookup(&self, entered: &str) -> CoreResult<&Coupon> {
        self.find(entered).ok_or_else(|| CoreError::UnknownCoupon {
            code: entered.trim().to_string(),
        })
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }
}

impl Default for CouponBook {
    /// The storefront's published codes.
    fn default() -> Self {
        CouponBook::new(vec![Coupon::new("ADH10", Percentage::from_bps(1000))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_trimmed_and_case_insensitive() {
        let book = CouponBook::default();
        let coupon = book.find("  adh10 ").unwrap();
        assert_eq!(coupon.code, "ADH10");
        assert_eq!(coupon.discount.bps(), 1000);
    }

    #[test]
    fn test_unknown_and_blank_codes() {
        let book = CouponBook::default();
        assert!(book.find("SAVE50").is_none());
        assert!(book.find("   ").is_none());

        let err = book.lookup(" save50 ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid coupon code: save50");
    }

    #[test]
    fn test_custom_book() {
        let book = CouponBook::new(vec![
            Coupon::new("diwali", Percentage::from_bps(1500)),
            Coupon::new("ADH10", Percentage::from_bps(1000)),
        ]);
        assert_eq!(book.coupons().len(), 2);
        assert_eq!(book.find("Diwali").map(|c| c.discount.bps()), Some(1500));
    }
}
