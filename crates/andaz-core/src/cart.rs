//! # Cart
//!
//! The ordered list of line items and the aggregates derived from it.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Cart Method             Effect                │
//! │  ─────────────────        ───────────             ──────                │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_or_increment() ──► push, or qty += 1     │
//! │                                                                         │
//! │  "+" button ─────────────► increment() ─────────► qty += 1              │
//! │                                                                         │
//! │  "-" button ─────────────► decrement() ─────────► qty -= 1 (floor 1)    │
//! │                                                                         │
//! │  Quantity input ─────────► set_quantity() ──────► qty = n (n >= 1)      │
//! │                                                                         │
//! │  Totals panel / badge ───► totals() ────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by id. Adding a known id bumps its quantity.
//! - Every quantity is at least 1. Lines are never removed by decrementing.
//! - Subtotal, tax and total are derived, never stored.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ItemId, LineItem};
use crate::validation::validate_quantity;
use crate::SALES_TAX_RATE;

/// The shopping cart.
///
/// Serializes as a bare JSON array of line items. Deserializing merges any
/// duplicate ids so the uniqueness invariant holds for hand-edited or
/// legacy data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from raw lines, merging repeated ids.
    ///
    /// The first occurrence keeps its position and fields; quantities of
    /// later duplicates are added to it.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            match cart.position(&item.id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.qty = existing.qty.saturating_add(item.qty);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    fn line_mut(&mut self, id: &ItemId) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    /// Adds a product, or bumps the quantity of the line with the same id.
    ///
    /// ## Behavior
    /// - Known id: that line's qty goes up by one. The other fields of
    ///   `item` (name, price, size...) are ignored.
    /// - New id: `item` is appended with qty 1, whatever qty it carried.
    ///
    /// Returns the resulting line.
    pub fn add_or_increment(&mut self, mut item: LineItem) -> &LineItem {
        let index = match self.position(&item.id) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.qty = existing.qty.saturating_add(1);
                index
            }
            None => {
                item.qty = 1;
                self.items.push(item);
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Replaces the quantity of the line with `id`.
    ///
    /// ## Errors
    /// - `Validation` when `qty < 1`. The cart is left untouched.
    /// - `ItemNotFound` when no line has `id`.
    pub fn set_quantity(&mut self, id: &ItemId, qty: i64) -> CoreResult<()> {
        let qty = validate_quantity(qty)?;
        self.line_mut(id)?.qty = qty;
        Ok(())
    }

    /// Raises the quantity of `id` by one. Returns the new quantity.
    pub fn increment(&mut self, id: &ItemId) -> CoreResult<u32> {
        let line = self.line_mut(id)?;
        line.qty = line.qty.saturating_add(1);
        Ok(line.qty)
    }

    /// Lowers the quantity of `id` by one, stopping at 1.
    ///
    /// Returns the new quantity; at 1 this is a no-op and returns 1.
    pub fn decrement(&mut self, id: &ItemId) -> CoreResult<u32> {
        let line = self.line_mut(id)?;
        if line.qty > 1 {
            line.qty -= 1;
        }
        Ok(line.qty)
    }

    /// Sum of all quantities (the header badge).
    pub fn item_count(&self) -> u64 {
        item_count(self)
    }

    /// Sum of price × qty over all lines.
    pub fn subtotal(&self) -> Money {
        subtotal(self)
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<LineItem>::deserialize(deserializer)?;
        Ok(Cart::from_items(items))
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Cart::from_items(iter)
    }
}

// =============================================================================
// Aggregates
// =============================================================================

/// Sum of all quantities; 0 for an empty cart.
pub fn item_count(cart: &Cart) -> u64 {
    cart.items.iter().map(|item| u64::from(item.qty)).sum()
}

/// Sum of price × qty over all lines.
pub fn subtotal(cart: &Cart) -> Money {
    cart.items.iter().map(LineItem::line_total).sum()
}

/// Sales tax on `subtotal` at the fixed 8% rate, rounded to the cent.
pub fn tax(subtotal: Money) -> Money {
    subtotal.calculate_tax(SALES_TAX_RATE)
}

pub fn total(subtotal: Money, tax: Money) -> Money {
    subtotal + tax
}

/// Cart totals snapshot for the totals panel and the header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    #[ts(type = "number")]
    pub item_count: u64,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let subtotal = subtotal(cart);
        let tax = tax(subtotal);
        CartTotals {
            line_count: cart.len(),
            item_count: item_count(cart),
            subtotal,
            tax,
            total: total(subtotal, tax),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
