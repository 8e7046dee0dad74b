//! # Services
//!
//! The checkout's side effects, each behind a small seam so commands can be
//! tested with fakes.
//!
//! ```text
//! services/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── email.rs     ◄─── OrderNotifier + reqwest EmailClient
//! ├── payment.rs   ◄─── PaymentGateway seam
//! └── redirect.rs  ◄─── Delayed WhatsApp redirect (tokio task)
//! ```

pub mod email;
pub mod payment;
pub mod redirect;

pub use email::{EmailClient, NotifyError, OrderEmail, OrderNotifier};
pub use payment::{PaymentGateway, PaymentOutcome, PaymentRequest, UnavailableGateway};
pub use redirect::HandoffRedirect;
