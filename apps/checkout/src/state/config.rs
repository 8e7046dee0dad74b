//! # Configuration State
//!
//! Checkout configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `STOREFRONT_BACKEND_URL` - Email backend base URL (default: `http://localhost:5000`)
//! - `STOREFRONT_WHATSAPP_NUMBER` - Handoff recipient (default: `917995059659`)
//! - `STOREFRONT_STORE_NAME` - Name used in handoff messages (default: `ADHYAA PICKLES`)
//! - `STOREFRONT_TAX_RATE` - Tax percent, e.g. `10` or `8.25` (default: `0`)
//! - `STOREFRONT_ADDITIONAL_FEES` - Flat fee in paise (default: `0`)
//! - `STOREFRONT_REDIRECT_DELAY_SECS` - WhatsApp redirect delay (default: `5`)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::Serialize;
use storefront_core::{CouponBook, Money, Percentage, PricingConfig};

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_WHATSAPP_NUMBER: &str = "917995059659";
const DEFAULT_STORE_NAME: &str = "ADHYAA PICKLES";
const DEFAULT_REDIRECT_DELAY_SECS: u64 = 5;

/// Checkout configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Base URL of the backend that sends confirmation emails.
    pub backend_url: String,

    /// WhatsApp number (country code, no `+`) orders are handed off to.
    pub whatsapp_number: String,

    /// Store name used in handoff messages.
    pub store_name: String,

    /// Tax rate, shipping tiers and flat fees.
    pub pricing: PricingConfig,

    /// Accepted coupon codes.
    pub coupons: CouponBook,

    /// Delay before the automatic WhatsApp redirect fires.
    pub redirect_delay: Duration,
}

impl Default for CheckoutConfig {
    /// Development defaults: local backend, no tax, no fees.
    fn default() -> Self {
        CheckoutConfig {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            pricing: PricingConfig::default(),
            coupons: CouponBook::default(),
            redirect_delay: Duration::from_secs(DEFAULT_REDIRECT_DELAY_SECS),
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CheckoutConfig::default();

        if let Some(url) = lookup("STOREFRONT_BACKEND_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(ConfigError::InvalidValue("STOREFRONT_BACKEND_URL".to_string()));
            }
            config.backend_url = url;
        }

        if let Some(number) = lookup("STOREFRONT_WHATSAPP_NUMBER") {
            let number = number.trim().trim_start_matches('+').to_string();
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::InvalidValue(
                    "STOREFRONT_WHATSAPP_NUMBER".to_string(),
                ));
            }
            config.whatsapp_number = number;
        }

        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(rate) = lookup("STOREFRONT_TAX_RATE") {
            let pct: f64 = rate
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_TAX_RATE".to_string()))?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(ConfigError::InvalidValue("STOREFRONT_TAX_RATE".to_string()));
            }
            config.pricing.tax_rate = Percentage::from_percentage(pct);
        }

        if let Some(fees) = lookup("STOREFRONT_ADDITIONAL_FEES") {
            let paise: i64 = fees
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_ADDITIONAL_FEES".to_string()))?;
            config.pricing.additional_fees = Money::from_paise(paise);
        }

        if let Some(secs) = lookup("STOREFRONT_REDIRECT_DELAY_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("STOREFRONT_REDIRECT_DELAY_SECS".to_string())
            })?;
            config.redirect_delay = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Full URL of the confirmation-email endpoint.
    pub fn email_endpoint(&self) -> String {
        format!("{}/api/send-email", self.backend_url)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CheckoutConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CheckoutConfig::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.email_endpoint(), "http://localhost:5000/api/send-email");
        assert_eq!(config.whatsapp_number, "917995059659");
        assert!(config.pricing.tax_rate.is_zero());
        assert_eq!(config.redirect_delay, Duration::from_secs(5));
        assert!(config.coupons.find("ADH10").is_some());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_BACKEND_URL", "https://api.adhyaa.in/"),
            ("STOREFRONT_WHATSAPP_NUMBER", "+911234567890"),
            ("STOREFRONT_TAX_RATE", "8.25"),
            ("STOREFRONT_ADDITIONAL_FEES", "1500"),
            ("STOREFRONT_REDIRECT_DELAY_SECS", "0"),
        ])
        .unwrap();

        assert_eq!(config.email_endpoint(), "https://api.adhyaa.in/api/send-email");
        assert_eq!(config.whatsapp_number, "911234567890");
        assert_eq!(config.pricing.tax_rate.bps(), 825);
        assert_eq!(config.pricing.additional_fees, Money::from_rupees(15));
        assert_eq!(config.redirect_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_values_name_the_key() {
        let err = load(&[("STOREFRONT_TAX_RATE", "ten")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_TAX_RATE");

        let err = load(&[("STOREFRONT_TAX_RATE", "150")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_TAX_RATE");

        let err = load(&[("STOREFRONT_WHATSAPP_NUMBER", "call me")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_WHATSAPP_NUMBER");

        assert!(load(&[("STOREFRONT_BACKEND_URL", "  ")]).is_err());
        assert!(load(&[("STOREFRONT_REDIRECT_DELAY_SECS", "-1")]).is_err());
    }
}
