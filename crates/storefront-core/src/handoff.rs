//! # Messaging Handoff Text
//!
//! The pre-filled WhatsApp messages sent to the store after an order.
//! Only the text lives here; link building and the timed redirect belong to
//! the app layer.
//!
//! ## Detailed Message Layout
//! ```text
//! Hello ADHYAA PICKLES, I just placed an order with the following details ...
//!
//! *Order ID:* ORD-1718000000123
//! *Customer Name:* Asha Rao
//! *Email:* asha@example.in
//! *Phone:* 9876543210
//! *Shipping Address:* 12 Temple Street, Vijayawada, Andhra Pradesh - 520001
//! *Payment Method:* Cash on Delivery
//!
//! *Order Summary:*
//! - Mango Avakaya (500g) x 2 = ₹680.00
//!
//! *Total Amount:* ₹750.00
//!
//! Looking forward to receiving my delicious pickles!
//! ```

use crate::order::OrderConfirmation;
use crate::types::LineItem;

/// `- {name} ({weight}g) x {qty} = {line total}`
pub fn summary_line(item: &LineItem) -> String {
    format!(
        "- {} ({}g) x {} = {}",
        item.product.name,
        item.weight,
        item.quantity,
        item.line_total()
    )
}

/// The full order message sent by the automatic redirect.
pub fn detailed_message(store_name: &str, order: &OrderConfirmation) -> String {
    let customer = &order.customer;
    let summary = order
        .items
        .iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Hello {store}, I just placed an order with the following details for faster processing:\n\n\
         *Order ID:* {order_id}\n\
         *Customer Name:* {name}\n\
         *Email:* {email}\n\
         *Phone:* {phone}\n\
         *Shipping Address:* {address}\n\
         *Payment Method:* {method}\n\n\
         *Order Summary:*\n{summary}\n\n\
         *Total Amount:* {total}\n\n\
         Looking forward to receiving my delicious pickles!",
        store = store_name,
        order_id = order.order_id,
        name = customer.full_name,
        email = customer.email,
        phone = customer.phone_number,
        address = customer.shipping_address_line(),
        method = order.payment_method().label(),
        summary = summary,
        total = order.breakdown.total,
    )
}

/// The short message behind the manual "Send Details via WhatsApp" button.
pub fn short_message(store_name: &str, order: &OrderConfirmation) -> String {
    format!(
        "Hello {}, I just placed an order. My name is {} and my total order amount is {}. \
         Please find my complete order details in the previous automatically sent message \
         or in my email. Thank you!",
        store_name, order.customer.full_name, order.breakdown.total
    )
}
