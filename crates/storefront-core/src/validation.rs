//! # Validation Module
//!
//! Field rules for the checkout form and cart quantities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Same rules, immediate inline feedback                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout command (Rust)                                       │
//! │  └── THIS MODULE: every rule re-checked before an order is placed       │
//! │                                                                         │
//! │  Each rule returns the exact message shown under the field.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in characters after trimming surrounding whitespace.

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Requires at least `min` characters.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_min_len;
///
/// assert!(validate_min_len("city", "Pune", 2, "City is required").is_ok());
/// assert!(validate_min_len("city", " P ", 2, "City is required").is_err());
/// ```
pub fn validate_min_len(field: &str, value: &str, min: usize, message: &str) -> ValidationResult<()> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Requires at most `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize, message: &str) -> ValidationResult<()> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`, with a non-empty local part
/// - Domain has at least two dot-separated labels, none empty
/// - Top-level label is at least two letters
/// - No whitespace anywhere
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_email;
///
/// assert!(validate_email("asha@example.in").is_ok());
/// assert!(validate_email("asha@localhost").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        message: "Invalid email address".to_string(),
    };

    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }

    let tld = labels.last().copied().unwrap_or_default();
    if tld.chars().count() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates an Indian PIN code field: 5 to 6 characters.
pub fn validate_postal_code(postal_code: &str) -> ValidationResult<()> {
    validate_min_len("postalCode", postal_code, 5, "Postal Code is required")?;
    validate_max_len(
        "postalCode",
        postal_code,
        6,
        "Postal Code should not exceed 6 digits",
    )
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed MAX_ITEM_QUANTITY (99)
///
/// ## User Workflow
/// ```text
/// Shopper edits quantity box: 120
///      │
///      ▼
/// validate_quantity(120) ← THIS FUNCTION
///      │
///      ├── qty == 0?  → Error, line untouched
///      ├── qty > 99?  → Error, line untouched
///      └── OK → update_quantity proceeds
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 || qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_min_len() {
        assert!(validate_min_len("fullName", "Asha", 3, "Full Name is required").is_ok());
        assert!(validate_min_len("fullName", "Al", 3, "Full Name is required").is_err());
        assert!(validate_min_len("fullName", "   ", 3, "Full Name is required").is_err());
        // Characters, not bytes
        assert!(validate_min_len("city", "पुणे", 2, "City is required").is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("asha@example.in").is_ok());
        assert!(validate_email("first.last+tag@mail.example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("asha").is_err());
        assert!(validate_email("@example.in").is_err());
        assert!(validate_email("asha@example").is_err());
        assert!(validate_email("asha@@example.in").is_err());
        assert!(validate_email("asha@example..in").is_err());
        assert!(validate_email("asha @example.in").is_err());
        assert!(validate_email("asha@example.i").is_err());
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("500001").is_ok());
        assert!(validate_postal_code("50001").is_ok());

        let short = validate_postal_code("5000").unwrap_err();
        assert_eq!(short.to_string(), "Postal Code is required");

        let long = validate_postal_code("5000011").unwrap_err();
        assert_eq!(long.to_string(), "Postal Code should not exceed 6 digits");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(100).is_err());
    }
}
