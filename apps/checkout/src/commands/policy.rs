//! # Policy Commands

use storefront_core::policy::{PolicyPage, REFUND_POLICY};
use tracing::debug;

use crate::state::CheckoutConfig;

/// Gets the refund & returns policy as structured sections.
pub fn get_refund_policy(config: &CheckoutConfig) -> PolicyPage {
    debug!("get_refund_policy command");
    REFUND_POLICY.for_store(&config.store_name)
}

/// Gets the refund & returns policy rendered as plain text.
pub fn get_refund_policy_text(config: &CheckoutConfig) -> String {
    debug!("get_refund_policy_text command");
    REFUND_POLICY.for_store(&config.store_name).to_plain_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_json_has_sections() {
        let json = serde_json::to_value(get_refund_policy(&CheckoutConfig::default())).unwrap();
        assert_eq!(json["title"], "Refund & Returns Policy");
        assert_eq!(json["sections"].as_array().map(Vec::len), Some(REFUND_POLICY.sections.len()));
    }

    #[test]
    fn test_policy_uses_configured_store_name() {
        let config = CheckoutConfig::load_from(|key| {
            (key == "STOREFRONT_STORE_NAME").then(|| "Konaseema Kitchen".to_string())
        })
        .unwrap();

        let text = get_refund_policy_text(&config);
        assert!(text.starts_with("Refund & Returns Policy\n"));
        assert!(text.contains("Thank you for shopping at Konaseema Kitchen."));
        assert!(!text.contains("ADHYAA PICKLES"));
    }
}
