//! # Cart
//!
//! The shopper's cart: an ordered list of line items keyed by
//! (product id, weight variant).
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper Action           Cart Method             Cart Change           │
//! │  ──────────────           ───────────             ───────────           │
//! │                                                                         │
//! │  Add jar ────────────────► add_item() ──────────► push or merge qty     │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► items[i].qty = n      │
//! │                                                                         │
//! │  Click ✕ ────────────────► remove_item() ───────► items.remove(i)       │
//! │                                                                         │
//! │  Order placed ───────────► clear() ─────────────► items.clear()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per (product id, weight)
//! - Every quantity is in `1..=MAX_ITEM_QUANTITY`
//! - Insertion order is preserved (it is the order-summary order)

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, Product};
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Builds a cart from already-formed lines, merging duplicates.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> CoreResult<Self> {
        let mut cart = Cart::new();
        for item in items {
            cart.add_item(&item.product, &item.weight, item.quantity)?;
        }
        Ok(cart)
    }

    /// Adds a product jar to the cart, or increases the quantity of the
    /// existing (product, weight) line.
    pub fn add_item(&mut self, product: &Product, weight: &str, quantity: u32) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(item) = self.find_mut(&product.id, weight) {
            let merged = item.quantity.saturating_add(quantity);
            if merged > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = merged;
            return Ok(());
        }

        self.items.push(LineItem::new(product.clone(), weight, quantity));
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// Quantities outside `1..=99` are rejected and leave the line untouched;
    /// removing a line is an explicit [`Cart::remove_item`].
    pub fn update_quantity(&mut self, product_id: &str, weight: &str, quantity: u32) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let item = self
            .find_mut(product_id, weight)
            .ok_or_else(|| line_not_found(product_id, weight))?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str, weight: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| !i.is_line(product_id, weight));

        if self.items.len() == initial_len {
            Err(line_not_found(product_id, weight))
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of jars across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ(unit price × quantity), unpriced lines counting as zero.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Lines whose weight variant has no published price.
    pub fn unpriced_lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| !i.is_priced())
    }

    fn find_mut(&mut self, product_id: &str, weight: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.is_line(product_id, weight))
    }
}

fn line_not_found(product_id: &str, weight: &str) -> CoreError {
    CoreError::LineNotFound {
        product_id: product_id.to_string(),
        weight: weight.to_string(),
    }
}
