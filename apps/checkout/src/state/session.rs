//! # Checkout Session
//!
//! Everything the checkout view owns while it is open: the cart, the coupon
//! text box, the applied coupon and the submission flags.
//!
//! ## Ownership
//! The session is owned by whoever drives the checkout (one shopper, one
//! view) and passed to commands as `&mut CheckoutSession`. There is no
//! global cart and no lock: only one command runs against a session at a
//! time, which `&mut` already guarantees.
//!
//! ## Submission States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Idle ──place_order──► Submitting ──cod──────────────► Idle (cleared)  │
//! │                              │                                          │
//! │                              └──online──► AwaitingPayment               │
//! │                                              │         │                │
//! │                                  success ◄───┘         └───► failure    │
//! │                                     │                          │        │
//! │                                     ▼                          ▼        │
//! │                               Idle (cleared)          Idle (cart kept)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every state other than `Idle` is held through a [`Submission`] guard, so a
//! place-order future that is dropped mid-await still leaves the session idle.

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use storefront_core::{Cart, CoreResult, Coupon, CouponBook, OrderBreakdown, PricingConfig};
use tracing::{debug, warn};

/// Where the session is in the place-order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    AwaitingPayment,
}

/// Per-shopper checkout state.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    pub cart: Cart,

    /// Raw text of the coupon box.
    pub coupon_input: String,

    /// Coupon currently applied to the order.
    pub active_coupon: Option<Coupon>,

    pub submission: SubmissionState,
}

impl CheckoutSession {
    pub fn new() -> Self {
        CheckoutSession::default()
    }

    pub fn with_cart(cart: Cart) -> Self {
        CheckoutSession {
            cart,
            ..CheckoutSession::default()
        }
    }

    /// Recomputes the order breakdown from the current cart and coupon.
    ///
    /// Lines without a price for their weight are priced at zero; they are
    /// logged here so the catalog gap is visible.
    pub fn breakdown(&self, pricing: &PricingConfig) -> OrderBreakdown {
        for line in self.cart.unpriced_lines() {
            warn!(
                product_id = %line.product.id,
                weight = %line.weight,
                "No price for weight variant, counting line as zero"
            );
        }
        OrderBreakdown::compute(self.cart.items(), self.active_coupon.as_ref(), pricing)
    }

    /// Applies the code typed into the coupon box.
    ///
    /// An unknown code is reported and leaves any previously applied coupon
    /// in place.
    pub fn apply_coupon(&mut self, entered: &str, coupons: &CouponBook) -> CoreResult<&Coupon> {
        self.coupon_input = entered.to_string();
        let coupon = coupons.lookup(entered)?.clone();
        Ok(self.active_coupon.insert(coupon))
    }

    /// Drops the applied coupon and empties the coupon box.
    pub fn remove_coupon(&mut self) {
        self.active_coupon = None;
        self.coupon_input.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.submission == SubmissionState::Idle
    }

    /// Resets after an order is placed: empty cart, no coupon, idle.
    pub fn finish_order(&mut self) {
        self.cart.clear();
        self.remove_coupon();
        self.submission = SubmissionState::Idle;
    }

    /// Marks the session as submitting until the returned guard is dropped.
    pub fn begin_submission(&mut self) -> Submission<'_> {
        self.submission = SubmissionState::Submitting;
        Submission { session: self }
    }
}

/// Exclusive access to a session while an order is being placed.
///
/// Dropping the guard returns the session to `Idle`, whether the flow
/// finished, failed or was abandoned at an await point.
#[derive(Debug)]
pub struct Submission<'a> {
    session: &'a mut CheckoutSession,
}

impl Submission<'_> {
    pub fn awaiting_payment(&mut self) {
        self.session.submission = SubmissionState::AwaitingPayment;
    }
}

impl Deref for Submission<'_> {
    type Target = CheckoutSession;

    fn deref(&self) -> &CheckoutSession {
        self.session
    }
}

impl DerefMut for Submission<'_> {
    fn deref_mut(&mut self) -> &mut CheckoutSession {
        self.session
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if !self.session.is_idle() {
            debug!(state = ?self.session.submission, "Submission ended, session idle again");
        }
        self.session.submission = SubmissionState::Idle;
    }
}
