//! # Coupon Commands

use tracing::{debug, info};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CheckoutConfig, CheckoutSession};

/// Applies the code typed into the coupon box.
///
/// ## Behavior
/// - Known code (any case, surrounding spaces ignored): replaces the applied coupon
/// - Unknown code: `INVALID_COUPON`, previously applied coupon stays
pub fn apply_coupon(
    session: &mut CheckoutSession,
    config: &CheckoutConfig,
    code: &str,
) -> Result<CartResponse, ApiError> {
    debug!(code = %code, "apply_coupon command");

    let coupon = session.apply_coupon(code, &config.coupons)?;
    info!(code = %coupon.code, discount_bps = coupon.discount.bps(), "Coupon applied");

    Ok(CartResponse::from_session(session, config))
}

/// Removes the applied coupon and empties the coupon box.
pub fn remove_coupon(session: &mut CheckoutSession, config: &CheckoutConfig) -> CartResponse {
    debug!("remove_coupon command");

    session.remove_coupon();
    CartResponse::from_session(session, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use std::collections::BTreeMap;
    use storefront_core::{Money, Product};

    fn session_with(config: &CheckoutConfig, rupees: i64) -> CheckoutSession {
        let product = Product {
            id: "tomato".to_string(),
            name: "Tomato Pickle".to_string(),
            image: String::new(),
            price_per_weight: BTreeMap::from([("1000".to_string(), Money::from_rupees(rupees))]),
        };
        let mut session = CheckoutSession::new();
        add_to_cart(&mut session, config, &product, "1000", None).unwrap();
        session
    }

    #[test]
    fn test_apply_and_remove() {
        let config = CheckoutConfig::default();
        let mut session = session_with(&config, 1000);

        let cart = apply_coupon(&mut session, &config, "adh10 ").unwrap();
        assert_eq!(cart.coupon.as_ref().map(|c| c.code.as_str()), Some("ADH10"));
        assert_eq!(cart.breakdown.discount, Money::from_rupees(100));
        assert_eq!(cart.breakdown.total, Money::from_rupees(970));

        let cart = remove_coupon(&mut session, &config);
        assert!(cart.coupon.is_none());
        assert!(cart.coupon_input.is_empty());
        assert!(cart.breakdown.discount.is_zero());
    }

    #[test]
    fn test_unknown_code_keeps_applied_coupon() {
        let config = CheckoutConfig::default();
        let mut session = session_with(&config, 1000);
        apply_coupon(&mut session, &config, "ADH10").unwrap();

        let err = apply_coupon(&mut session, &config, "FREESHIP").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCoupon);

        let cart = crate::commands::cart::get_cart(&session, &config);
        assert_eq!(cart.breakdown.discount, Money::from_rupees(100));
    }
}
