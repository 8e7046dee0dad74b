//! # Cart Commands
//!
//! Commands for cart manipulation. Every command answers with the whole cart
//! and a freshly computed breakdown, so the order summary never shows stale
//! totals.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │        │
//! │  │  Cart    │     │          │     │   Form   │     │  Order   │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                 │                │             │
//! │                   add_to_cart       place_order           │             │
//! │                   update_item       (checkout.rs)         │             │
//! │                   remove_item                             │             │
//! │                        │                                  │             │
//! │                        ▼                                  ▼             │
//! │                   clear_cart ─────────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{Coupon, LineItem, OrderBreakdown, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CheckoutConfig, CheckoutSession};

/// Cart response including items, totals and coupon state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub breakdown: OrderBreakdown,
    pub coupon: Option<Coupon>,
    pub coupon_input: String,
}

impl CartResponse {
    pub fn from_session(session: &CheckoutSession, config: &CheckoutConfig) -> Self {
        CartResponse {
            items: session.cart.items().to_vec(),
            breakdown: session.breakdown(&config.pricing),
            coupon: session.active_coupon.clone(),
            coupon_input: session.coupon_input.clone(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Order Summary
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  Mango Avakaya (500g)      x2                      ₹680.00     │
/// │  Gongura (250g)            x1                      ₹180.00     │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Subtotal                                          ₹860.00     │
/// │  Discount (ADH10)                                 -₹86.00      │
/// │  Shipping                                           ₹70.00     │
/// │  ──────────────────────────────────────────────────────────    │
/// │  TOTAL                                             ₹844.00     │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(session: &CheckoutSession, config: &CheckoutConfig) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from_session(session, config)
}

/// Adds a weight variant of a product to the cart.
///
/// ## Behavior
/// - Same product and weight already in cart: quantities merge
/// - Otherwise: added as a new line
/// - Merged quantity above the per-line maximum: rejected, cart unchanged
pub fn add_to_cart(
    session: &mut CheckoutSession,
    config: &CheckoutConfig,
    product: &Product,
    weight: &str,
    quantity: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product.id, weight = %weight, quantity = %quantity, "add_to_cart command");

    session.cart.add_item(product, weight, quantity)?;
    Ok(CartResponse::from_session(session, config))
}

/// Sets the quantity of one cart line.
///
/// Only 1-99 is accepted; anything else leaves the line as it was.
pub fn update_cart_item(
    session: &mut CheckoutSession,
    config: &CheckoutConfig,
    product_id: &str,
    weight: &str,
    quantity: u32,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, weight = %weight, quantity = %quantity, "update_cart_item command");

    session.cart.update_quantity(product_id, weight, quantity)?;
    Ok(CartResponse::from_session(session, config))
}

/// Removes one cart line.
pub fn remove_from_cart(
    session: &mut CheckoutSession,
    config: &CheckoutConfig,
    product_id: &str,
    weight: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, weight = %weight, "remove_from_cart command");

    session.cart.remove_item(product_id, weight)?;
    Ok(CartResponse::from_session(session, config))
}

/// Clears all items from the cart. The applied coupon stays.
pub fn clear_cart(session: &mut CheckoutSession, config: &CheckoutConfig) -> CartResponse {
    debug!("clear_cart command");

    session.cart.clear();
    CartResponse::from_session(session, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::BTreeMap;
    use storefront_core::Money;

    fn mango() -> Product {
        Product {
            id: "mango".to_string(),
            name: "Mango Avakaya".to_string(),
            image: "/images/mango.jpg".to_string(),
            price_per_weight: BTreeMap::from([
                ("250".to_string(), Money::from_rupees(180)),
                ("500".to_string(), Money::from_rupees(340)),
            ]),
        }
    }

    #[test]
    fn test_add_merges_same_variant() {
        let config = CheckoutConfig::default();
        let mut session = CheckoutSession::new();

        add_to_cart(&mut session, &config, &mango(), "500", None).unwrap();
        let cart = add_to_cart(&mut session, &config, &mango(), "500", Some(2)).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.breakdown.subtotal, Money::from_rupees(1020));
        assert!(cart.breakdown.is_free_shipping());
    }

    #[test]
    fn test_weights_are_separate_lines() {
        let config = CheckoutConfig::default();
        let mut session = CheckoutSession::new();

        add_to_cart(&mut session, &config, &mango(), "500", None).unwrap();
        let cart = add_to_cart(&mut session, &config, &mango(), "250", None).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.breakdown.subtotal, Money::from_rupees(520));
        assert_eq!(cart.breakdown.shipping, Money::from_rupees(70));
    }

    #[test]
    fn test_update_out_of_range_keeps_line() {
        let config = CheckoutConfig::default();
        let mut session = CheckoutSession::new();
        add_to_cart(&mut session, &config, &mango(), "250", Some(2)).unwrap();

        let err = update_cart_item(&mut session, &config, "mango", "250", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = update_cart_item(&mut session, &config, "mango", "250", 100).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(get_cart(&session, &config).items[0].quantity, 2);
    }

    #[test]
    fn test_remove_unknown_line_is_not_found() {
        let config = CheckoutConfig::default();
        let mut session = CheckoutSession::new();

        let err = remove_from_cart(&mut session, &config, "lemon", "500").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_cart() {
        let config = CheckoutConfig::default();
        let mut session = CheckoutSession::new();
        add_to_cart(&mut session, &config, &mango(), "250", Some(4)).unwrap();

        let cart = clear_cart(&mut session, &config);

        assert!(cart.items.is_empty());
        assert!(cart.breakdown.subtotal.is_zero());
    }
}
