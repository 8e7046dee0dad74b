//! # API Error Type
//!
//! Unified error type for checkout commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Checkout                           │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  placeOrder(form)                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  Command Function                                                │   │
//! │  │  Result<T, ApiError>                                             │   │
//! │  │         │                                                        │   │
//! │  │         ▼                                                        │   │
//! │  │  Form invalid? ───── FormErrors ─────────────────┐               │   │
//! │  │         │                                        │               │   │
//! │  │         ▼                                        ▼               │   │
//! │  │  Cart / coupon? ──── CoreError ──────────────► ApiError ───────► │   │
//! │  │         │                                        ▲               │   │
//! │  │         ▼                                        │               │   │
//! │  │  Payment failed? ─── ApiError::payment_failed ───┘               │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │    // e.fields = [{ rule: "tooShort", field: "city", ... }]             │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Email failures never reach this type. They are downgraded to a notice on
//! the placed order.

use serde::Serialize;
use storefront_core::{CoreError, FormErrors, ValidationError};

use crate::state::ConfigError;

/// API error returned from checkout commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_COUPON",
///   "message": "Invalid coupon code: SAVE50"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field failures when the checkout form is rejected
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ValidationError>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Checkout attempted with nothing in the cart
    EmptyCart,

    /// Coupon code not in the coupon book
    InvalidCoupon,

    /// A previous place-order call has not finished
    CheckoutInProgress,

    /// Gateway declined or could not take the payment
    PaymentFailed,

    /// Environment configuration is unusable
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn payment_failed() -> Self {
        ApiError::new(ErrorCode::PaymentFailed, "Payment failed. Please try again.")
    }

    pub fn checkout_in_progress() -> Self {
        ApiError::new(
            ErrorCode::CheckoutInProgress,
            "An order is already being placed",
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            e @ CoreError::LineNotFound { .. } => ApiError::new(ErrorCode::NotFound, e.to_string()),
            e @ CoreError::QuantityTooLarge { .. } => {
                ApiError::new(ErrorCode::CartError, e.to_string())
            }
            e @ CoreError::UnknownCoupon { .. } => {
                ApiError::new(ErrorCode::InvalidCoupon, e.to_string())
            }
            e @ CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, e.to_string()),
            CoreError::Validation(e) => ApiError {
                code: ErrorCode::ValidationError,
                message: e.to_string(),
                fields: vec![e],
            },
        }
    }
}

/// Converts a rejected checkout form, keeping every field failure.
impl From<FormErrors> for ApiError {
    fn from(err: FormErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: "Please correct the highlighted fields".to_string(),
            fields: err.errors,
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
