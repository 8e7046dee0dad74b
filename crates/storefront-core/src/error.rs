//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Cart and coupon rule violations                 │
//! │  ├── ValidationError  - One field failed one rule                       │
//! │  └── FormErrors       - Every failing field of a checkout form          │
//! │                                                                         │
//! │  checkout app errors (separate crate)                                   │
//! │  ├── NotifyError      - Email backend call failed                       │
//! │  ├── ConfigError      - Bad environment value                           │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → FormErrors / CoreError → ApiError → Frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are the exact text the shopper sees next to the field
//! 3. Errors are enum variants, never String

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and coupon rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No cart line for this (product, weight) pair.
    #[error("{product_id} ({weight}g) is not in the cart")]
    LineNotFound { product_id: String, weight: String },

    /// Merged quantity for a line would exceed the per-line cap.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Entered coupon code matches nothing in the coupon book.
    #[error("Invalid coupon code: {code}")]
    UnknownCoupon { code: String },

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// One field failed one rule.
///
/// `message` is shown inline under the field, so it is phrased for the
/// shopper rather than the developer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase", tag = "rule")]
pub enum ValidationError {
    /// A required field is missing or shorter than its minimum.
    #[error("{message}")]
    TooShort {
        field: String,
        min: usize,
        message: String,
    },

    /// Field value is too long.
    #[error("{message}")]
    TooLong {
        field: String,
        max: usize,
        message: String,
    },

    /// Invalid format (e.g. email address).
    #[error("{message}")]
    InvalidFormat { field: String, message: String },

    /// Value is not in the allowed set.
    #[error("{message}")]
    NotAllowed { field: String, message: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// Name of the field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// Every failing field of a submitted form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error, Serialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FormErrors {
    pub errors: Vec<ValidationError>,
}

impl FormErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
