//! # State Module
//!
//! State the checkout app holds between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────────┐       │
//! │  │   CheckoutSession    │            │     CheckoutConfig       │       │
//! │  │                      │            │                          │       │
//! │  │  cart                │            │  backend_url             │       │
//! │  │  coupon_input        │            │  whatsapp_number         │       │
//! │  │  active_coupon       │            │  pricing, coupons        │       │
//! │  │  submission          │            │  redirect_delay          │       │
//! │  └──────────────────────┘            └──────────────────────────┘       │
//! │                                                                         │
//! │  • CheckoutSession: one per shopper, passed as &mut                     │
//! │  • CheckoutConfig: read-only after startup, passed as &                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{CheckoutConfig, ConfigError};
pub use session::{CheckoutSession, Submission, SubmissionState};
