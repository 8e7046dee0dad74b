//! # Config Commands
//!
//! Commands for retrieving the public storefront settings.

use serde::Serialize;
use storefront_core::PricingConfig;
use tracing::debug;

use crate::state::CheckoutConfig;

/// Settings the frontend may see. The coupon book and backend URL stay
/// server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSettings {
    pub store_name: String,
    pub whatsapp_number: String,
    pub pricing: PricingConfig,
    pub redirect_delay_secs: u64,
}

/// Gets the current storefront settings.
///
/// ## When Used
/// - Checkout page load (shipping tiers and tax rate for the summary)
/// - Success page (redirect countdown)
pub fn get_config(config: &CheckoutConfig) -> StorefrontSettings {
    debug!("get_config command");
    StorefrontSettings {
        store_name: config.store_name.clone(),
        whatsapp_number: config.whatsapp_number.clone(),
        pricing: config.pricing.clone(),
        redirect_delay_secs: config.redirect_delay.as_secs(),
    }
}
