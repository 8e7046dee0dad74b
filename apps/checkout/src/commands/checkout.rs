//! # Checkout Commands
//!
//! Form pre-fill and order placement.
//!
//! ## Place Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         place_order                                     │
//! │                                                                         │
//! │  1. Guard ────────── already submitting? ──► CHECKOUT_IN_PROGRESS       │
//! │                      cart empty?         ──► EMPTY_CART                 │
//! │                                                                         │
//! │  2. Validate form ── any field invalid?  ──► VALIDATION_ERROR (fields)  │
//! │                                                                         │
//! │  3. Breakdown ────── computed once, used for payment and email          │
//! │                                                                         │
//! │  4. Payment                                                             │
//! │     ├── Cash on delivery ─────────────────────────────┐                 │
//! │     └── Online ──► gateway.collect(total)             │                 │
//! │                      ├── Success(txn id) ─────────────┤                 │
//! │                      └── Failure ──► PAYMENT_FAILED   │                 │
//! │                                      (cart kept)      ▼                 │
//! │  5. Finalize ─────── ORD-<millis>, clear cart, email (best effort)      │
//! │                      ──► PlacedOrder { confirmation, notices }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is held through a [`Submission`](crate::state::Submission) guard for the whole flow.
//! If the caller drops the future at either await the session goes back to
//! `Idle`; once payment is taken the cart is already cleared before the
//! email is attempted.

use chrono::Utc;
use serde::Serialize;
use storefront_core::{
    CheckoutForm, CoreError, CustomerProfile, OrderConfirmation, OrderId, PaymentMethod,
};
use tracing::{debug, info, warn};

use crate::commands::Notice;
use crate::error::ApiError;
use crate::services::{OrderEmail, OrderNotifier, PaymentGateway, PaymentOutcome, PaymentRequest};
use crate::state::{CheckoutConfig, CheckoutSession};

pub const EMAIL_SENT: &str = "Order placed and confirmation email sent!";
pub const EMAIL_FAILED: &str = "Order placed but failed to send confirmation email.";
pub const PAYMENT_SUCCEEDED: &str = "Payment successful!";

/// Result of a successful `place_order`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub confirmation: OrderConfirmation,
    pub notices: Vec<Notice>,
}

/// Builds the initial checkout form.
///
/// Signed-in customers get their first saved address (or at least name and
/// email); guests get an empty form with cash on delivery selected.
pub fn checkout_form(profile: Option<&CustomerProfile>) -> CheckoutForm {
    debug!(signed_in = profile.is_some(), "checkout_form command");
    profile.map(CheckoutForm::prefilled).unwrap_or_default()
}

/// Handles a change of the saved-address dropdown.
pub fn select_saved_address(
    mut form: CheckoutForm,
    profile: &CustomerProfile,
    address_id: &str,
) -> CheckoutForm {
    debug!(address_id = %address_id, "select_saved_address command");
    form.select_saved_address(profile, address_id);
    form
}

/// Places the order in the session's cart.
///
/// On success the cart and coupon are cleared, even when the confirmation
/// email could not be sent. On payment failure nothing is cleared and the
/// shopper can submit again.
pub async fn place_order<G, N>(
    session: &mut CheckoutSession,
    config: &CheckoutConfig,
    form: CheckoutForm,
    gateway: &G,
    notifier: &N,
) -> Result<PlacedOrder, ApiError>
where
    G: PaymentGateway,
    N: OrderNotifier,
{
    debug!(items = session.cart.item_count(), "place_order command");

    if !session.is_idle() {
        return Err(ApiError::checkout_in_progress());
    }
    if session.cart.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }
    form.validate()?;

    let mut session = session.begin_submission();
    let breakdown = session.breakdown(&config.pricing);
    let mut notices = Vec::new();

    let payment_id = match form.chosen_payment_method() {
        PaymentMethod::CashOnDelivery => None,
        PaymentMethod::OnlineGateway => {
            session.awaiting_payment();
            let request = PaymentRequest::new(&config.store_name, breakdown.total, &form);

            match gateway.collect(&request).await {
                PaymentOutcome::Success { transaction_id } => {
                    info!(transaction_id = %transaction_id, amount = %breakdown.total, "Payment captured");
                    notices.push(Notice::success(PAYMENT_SUCCEEDED));
                    Some(transaction_id)
                }
                PaymentOutcome::Failure { reason } => {
                    warn!(reason = %reason, amount = %breakdown.total, "Payment failed");
                    return Err(ApiError::payment_failed());
                }
            }
        }
    };

    let placed_at = Utc::now();
    let confirmation = OrderConfirmation {
        order_id: OrderId::issue(placed_at),
        customer: form,
        items: session.cart.items().to_vec(),
        breakdown,
        payment_id,
        placed_at,
    };
    session.finish_order();
    drop(session);

    let email = OrderEmail::from_confirmation(&confirmation);
    match notifier.send_confirmation(&email).await {
        Ok(()) => notices.push(Notice::success(EMAIL_SENT)),
        Err(e) => {
            warn!(order_id = %confirmation.order_id, error = %e, "Failed to send confirmation email");
            notices.push(Notice::warning(EMAIL_FAILED));
        }
    }

    info!(
        order_id = %confirmation.order_id,
        total = %confirmation.breakdown.total,
        payment_method = ?confirmation.payment_method(),
        "Order placed"
    );

    Ok(PlacedOrder {
        confirmation,
        notices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::coupon::apply_coupon;
    use crate::commands::NoticeLevel;
    use crate::error::ErrorCode;
    use crate::services::NotifyError;
    use crate::state::SubmissionState;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use storefront_core::{Money, Product, SavedAddress};

    struct FakeGateway {
        outcome: PaymentOutcome,
        requests: Mutex<Vec<PaymentRequest>>,
    }

    impl FakeGateway {
        fn approving(transaction_id: &str) -> Self {
            FakeGateway {
                outcome: PaymentOutcome::Success {
                    transaction_id: transaction_id.to_string(),
                },
                requests: Mutex::new(Vec::new()),
            }
        }

        fn declining() -> Self {
            FakeGateway {
                outcome: PaymentOutcome::Failure {
                    reason: "card declined".to_string(),
                },
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl PaymentGateway for FakeGateway {
        async fn collect(&self, request: &PaymentRequest) -> PaymentOutcome {
            self.requests.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        fail: bool,
        sent: Mutex<Vec<OrderEmail>>,
    }

    impl OrderNotifier for FakeNotifier {
        async fn send_confirmation(&self, email: &OrderEmail) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(NotifyError::Rejected {
                    status: 500,
                    body: "smtp down".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    /// Gateway whose payment sheet is never completed.
    struct PendingGateway;

    impl PaymentGateway for PendingGateway {
        async fn collect(&self, _request: &PaymentRequest) -> PaymentOutcome {
            std::future::pending().await
        }
    }

    struct PendingNotifier;

    impl OrderNotifier for PendingNotifier {
        async fn send_confirmation(&self, _email: &OrderEmail) -> Result<(), NotifyError> {
            std::future::pending().await
        }
    }

    fn valid_form(method: &str) -> CheckoutForm {
        let mut form = CheckoutForm {
            full_name: "Anitha Reddy".to_string(),
            email: "anitha@example.com".to_string(),
            address: "4-12 Brodipet".to_string(),
            city: "Guntur".to_string(),
            state: "Andhra Pradesh".to_string(),
            postal_code: "522002".to_string(),
            phone_number: "9848012345".to_string(),
            ..CheckoutForm::default()
        };
        form.select_payment_method(method);
        form
    }

    fn session_with_order(config: &CheckoutConfig) -> CheckoutSession {
        let product = Product {
            id: "mango".to_string(),
            name: "Mango Avakaya".to_string(),
            image: String::new(),
            price_per_weight: BTreeMap::from([("500".to_string(), Money::from_rupees(340))]),
        };
        let mut session = CheckoutSession::new();
        add_to_cart(&mut session, config, &product, "500", Some(2)).unwrap();
        session
    }

    #[tokio::test]
    async fn test_cod_order_places_and_clears() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        apply_coupon(&mut session, &config, "ADH10").unwrap();
        let gateway = FakeGateway::declining();
        let notifier = FakeNotifier::default();

        let placed = place_order(&mut session, &config, valid_form("cod"), &gateway, &notifier)
            .await
            .unwrap();

        let confirmation = &placed.confirmation;
        assert!(confirmation.order_id.as_str().starts_with("ORD-"));
        assert_eq!(confirmation.breakdown.subtotal, Money::from_rupees(680));
        assert_eq!(confirmation.breakdown.discount, Money::from_rupees(68));
        assert_eq!(confirmation.breakdown.total, Money::from_rupees(682));
        assert!(confirmation.payment_id.is_none());
        assert_eq!(placed.notices, vec![Notice::success(EMAIL_SENT)]);

        assert_eq!(gateway.calls(), 0);
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
        assert!(session.cart.is_empty());
        assert!(session.active_coupon.is_none());
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn test_email_failure_still_places_order() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        let notifier = FakeNotifier {
            fail: true,
            ..FakeNotifier::default()
        };

        let placed = place_order(
            &mut session,
            &config,
            valid_form("cod"),
            &FakeGateway::declining(),
            &notifier,
        )
        .await
        .unwrap();

        assert_eq!(placed.notices.len(), 1);
        assert_eq!(placed.notices[0].level, NoticeLevel::Warning);
        assert_eq!(placed.notices[0].message, EMAIL_FAILED);
        assert!(session.cart.is_empty());
    }

    #[tokio::test]
    async fn test_online_payment_success_carries_transaction_id() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        let gateway = FakeGateway::approving("pay_N3xT9");
        let notifier = FakeNotifier::default();

        let placed = place_order(&mut session, &config, valid_form("razorpay"), &gateway, &notifier)
            .await
            .unwrap();

        assert_eq!(placed.confirmation.payment_id.as_deref(), Some("pay_N3xT9"));
        assert_eq!(placed.notices[0], Notice::success(PAYMENT_SUCCEEDED));

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].amount, placed.confirmation.breakdown.total);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent[0].payment_id.as_deref(), Some("pay_N3xT9"));
    }

    #[tokio::test]
    async fn test_payment_failure_keeps_cart_and_allows_retry() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        let notifier = FakeNotifier::default();

        let err = place_order(
            &mut session,
            &config,
            valid_form("razorpay"),
            &FakeGateway::declining(),
            &notifier,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::PaymentFailed);
        assert_eq!(err.message, "Payment failed. Please try again.");
        assert_eq!(session.cart.item_count(), 1);
        assert!(session.is_idle());
        assert!(notifier.sent.lock().unwrap().is_empty());

        let placed = place_order(
            &mut session,
            &config,
            valid_form("razorpay"),
            &FakeGateway::approving("pay_retry"),
            &notifier,
        )
        .await
        .unwrap();
        assert_eq!(placed.confirmation.payment_id.as_deref(), Some("pay_retry"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_payment_leaves_session_idle() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        let notifier = FakeNotifier::default();

        let abandoned = tokio::time::timeout(
            Duration::from_secs(1),
            place_order(&mut session, &config, valid_form("razorpay"), &PendingGateway, &notifier),
        )
        .await;
        assert!(abandoned.is_err());

        assert!(session.is_idle());
        assert_eq!(session.cart.item_count(), 1);
        assert!(notifier.sent.lock().unwrap().is_empty());

        let placed = place_order(
            &mut session,
            &config,
            valid_form("cod"),
            &FakeGateway::declining(),
            &notifier,
        )
        .await
        .unwrap();
        assert!(placed.confirmation.payment_id.is_none());
        assert!(session.cart.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_email_still_clears_paid_cart() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        apply_coupon(&mut session, &config, "ADH10").unwrap();
        let gateway = FakeGateway::approving("pay_Q7wE2");

        let abandoned = tokio::time::timeout(
            Duration::from_secs(1),
            place_order(&mut session, &config, valid_form("razorpay"), &gateway, &PendingNotifier),
        )
        .await;
        assert!(abandoned.is_err());

        assert_eq!(gateway.calls(), 1);
        assert!(session.cart.is_empty());
        assert!(session.active_coupon.is_none());
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let config = CheckoutConfig::default();
        let mut session = CheckoutSession::new();

        let err = place_order(
            &mut session,
            &config,
            valid_form("cod"),
            &FakeGateway::declining(),
            &FakeNotifier::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[tokio::test]
    async fn test_invalid_form_blocks_submission() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        let mut form = valid_form("cod");
        form.postal_code = "5220021".to_string();
        form.city = "G".to_string();
        let notifier = FakeNotifier::default();

        let err = place_order(&mut session, &config, form, &FakeGateway::declining(), &notifier)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field()).collect();
        assert_eq!(fields, vec!["city", "postalCode"]);
        assert!(session.is_idle());
        assert_eq!(session.cart.item_count(), 1);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_submission_rejected() {
        let config = CheckoutConfig::default();
        let mut session = session_with_order(&config);
        session.submission = SubmissionState::AwaitingPayment;

        let err = place_order(
            &mut session,
            &config,
            valid_form("cod"),
            &FakeGateway::declining(),
            &FakeNotifier::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::CheckoutInProgress);
        assert_eq!(session.cart.item_count(), 1);
    }

    #[test]
    fn test_form_prefill_and_address_switch() {
        let profile = CustomerProfile {
            full_name: "Suresh Babu".to_string(),
            email: "suresh@example.com".to_string(),
            saved_addresses: vec![
                SavedAddress {
                    id: "home".to_string(),
                    full_name: "Suresh Babu".to_string(),
                    address: "7 Lake View Road".to_string(),
                    city: "Vijayawada".to_string(),
                    state: "Andhra Pradesh".to_string(),
                    postal_code: "520001".to_string(),
                    phone_number: "9000012345".to_string(),
                },
                SavedAddress {
                    id: "office".to_string(),
                    full_name: "Suresh Babu".to_string(),
                    address: "Plot 22 Hitech City".to_string(),
                    city: "Hyderabad".to_string(),
                    state: "Telangana".to_string(),
                    postal_code: "500081".to_string(),
                    phone_number: "9000054321".to_string(),
                },
            ],
        };

        let form = checkout_form(Some(&profile));
        assert_eq!(form.city, "Vijayawada");

        let form = select_saved_address(form, &profile, "office");
        assert_eq!(form.city, "Hyderabad");
        assert_eq!(form.saved_address_id.as_deref(), Some("office"));

        let form = select_saved_address(form, &profile, "");
        assert!(form.city.is_empty());
        assert_eq!(form.email, "suresh@example.com");

        let guest = checkout_form(None);
        assert!(guest.full_name.is_empty());
        assert_eq!(guest.payment_method, Some(PaymentMethod::CashOnDelivery));
    }
}
