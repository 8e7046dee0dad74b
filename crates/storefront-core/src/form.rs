//! # Checkout Form
//!
//! The shopper's contact, shipping and payment choices, with the rules that
//! gate order placement and the saved-address pre-fill behaviour.
//!
//! ## Field Rules
//! ```text
//! ┌──────────────────┬──────────────────┬──────────────────────────────────────────┐
//! │ Field            │ Rule             │ Message                                  │
//! ├──────────────────┼──────────────────┼──────────────────────────────────────────┤
//! │ fullName         │ ≥ 3 chars        │ Full Name is required                    │
//! │ email            │ address pattern  │ Invalid email address                    │
//! │ address          │ ≥ 5 chars        │ Address is required                      │
//! │ city             │ ≥ 2 chars        │ City is required                         │
//! │ state            │ ≥ 2 chars        │ State is required                        │
//! │ postalCode       │ 5..=6 chars      │ Postal Code is required / ... 6 digits   │
//! │ phoneNumber      │ ≥ 10 chars       │ Phone number must be at least 10 digits  │
//! │ paymentMethod    │ razorpay | cod   │ Please select a payment method           │
//! └──────────────────┴──────────────────┴──────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{FormErrors, ValidationError};
use crate::types::{CustomerProfile, PaymentMethod, SavedAddress};
use crate::validation::{validate_email, validate_min_len, validate_postal_code, ValidationResult};

/// The checkout form as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone_number: String,

    /// `None` when the shopper picked something that is not a payment method.
    pub payment_method: Option<PaymentMethod>,

    /// Which saved address the fields were copied from, if any.
    pub saved_address_id: Option<String>,
}

impl Default for CheckoutForm {
    /// Empty fields, cash on delivery selected.
    fn default() -> Self {
        CheckoutForm {
            full_name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            phone_number: String::new(),
            payment_method: Some(PaymentMethod::CashOnDelivery),
            saved_address_id: None,
        }
    }
}

impl CheckoutForm {
    /// Pre-fills a fresh form for a signed-in customer.
    ///
    /// With saved addresses, the first one is copied in. Without, only name
    /// and email come from the profile.
    pub fn prefilled(profile: &CustomerProfile) -> Self {
        let mut form = CheckoutForm::default();
        match profile.saved_addresses.first() {
            Some(addr) => form.copy_address(profile, addr),
            None => form.copy_identity(profile),
        }
        form
    }

    /// Handles a change of the saved-address dropdown.
    ///
    /// A known id copies that address in. An empty or unknown id clears the
    /// address fields and restores name and email from the profile.
    pub fn select_saved_address(&mut self, profile: &CustomerProfile, address_id: &str) {
        match profile.saved_address(address_id) {
            Some(addr) => self.copy_address(profile, addr),
            None => {
                self.saved_address_id = None;
                self.address.clear();
                self.city.clear();
                self.state.clear();
                self.postal_code.clear();
                self.phone_number.clear();
                self.copy_identity(profile);
            }
        }
    }

    /// Sets the payment method from the radio group's value.
    pub fn select_payment_method(&mut self, value: &str) {
        self.payment_method = PaymentMethod::from_form_value(value);
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let checks: [ValidationResult<()>; 8] = [
            validate_min_len("fullName", &self.full_name, 3, "Full Name is required"),
            validate_email(&self.email),
            validate_min_len("address", &self.address, 5, "Address is required"),
            validate_min_len("city", &self.city, 2, "City is required"),
            validate_min_len("state", &self.state, 2, "State is required"),
            validate_postal_code(&self.postal_code),
            validate_min_len(
                "phoneNumber",
                &self.phone_number,
                10,
                "Phone number must be at least 10 digits",
            ),
            self.validate_payment_method(),
        ];

        let mut errors = FormErrors::default();
        for err in checks.into_iter().filter_map(Result::err) {
            errors.push(err);
        }
        errors.into_result()
    }

    /// Payment method, once [`CheckoutForm::validate`] has passed.
    pub fn chosen_payment_method(&self) -> PaymentMethod {
        self.payment_method.unwrap_or_default()
    }

    /// `address, city, state - postal`, as printed on confirmations.
    pub fn shipping_address_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.postal_code.trim()
        )
    }

    fn validate_payment_method(&self) -> ValidationResult<()> {
        if self.payment_method.is_none() {
            return Err(ValidationError::NotAllowed {
                field: "paymentMethod".to_string(),
                message: "Please select a payment method".to_string(),
            });
        }
        Ok(())
    }

    fn copy_address(&mut self, profile: &CustomerProfile, addr: &SavedAddress) {
        self.full_name = first_non_empty(&addr.full_name, &profile.full_name);
        self.email = profile.email.clone();
        self.address = addr.address.clone();
        self.city = addr.city.clone();
        self.state = addr.state.clone();
        self.postal_code = addr.postal_code.clone();
        self.phone_number = addr.phone_number.clone();
        self.saved_address_id = Some(addr.id.clone());
    }

    fn copy_identity(&mut self, profile: &CustomerProfile) {
        self.full_name = profile.full_name.clone();
        self.email = profile.email.clone();
    }
}

fn first_non_empty(preferred: &str, fallback: &str) -> String {
    if preferred.is_empty() {
        fallback.to_string()
    } else {
        preferred.to_string()
    }
}
