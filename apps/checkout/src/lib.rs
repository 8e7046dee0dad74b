//! # Storefront Checkout Library
//!
//! Orchestration layer between the storefront frontend and
//! `storefront-core`: session state, commands and the checkout's side
//! effects (confirmation email, payment gateway, WhatsApp handoff).
//!
//! ## Module Organization
//! ```text
//! storefront_checkout/
//! ├── lib.rs          ◄─── You are here (exports, logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Environment configuration
//! │   └── session.rs  ◄─── Cart + coupon + submission state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, Notice
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── coupon.rs   ◄─── Coupon commands
//! │   ├── checkout.rs ◄─── Form pre-fill, place_order
//! │   ├── confirmation.rs ◄─── Handoff links and redirect
//! │   ├── config.rs   ◄─── Public settings
//! │   └── policy.rs   ◄─── Refund policy
//! ├── services/
//! │   ├── email.rs    ◄─── Confirmation email client
//! │   ├── payment.rs  ◄─── Payment gateway seam
//! │   └── redirect.rs ◄─── Delayed redirect task
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout State                                       │
//! │                                                                         │
//! │  ┌──────────────────────┐             ┌──────────────────────┐          │
//! │  │   CheckoutSession    │             │    CheckoutConfig    │          │
//! │  │                      │             │                      │          │
//! │  │  • Cart lines        │             │  • Backend URL       │          │
//! │  │  • Applied coupon    │             │  • Tax, shipping     │          │
//! │  │  • Submission state  │             │  • WhatsApp number   │          │
//! │  └──────────────────────┘             └──────────────────────┘          │
//! │        &mut per command                     & everywhere                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod services;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::{CheckoutConfig, CheckoutSession};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_checkout=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
