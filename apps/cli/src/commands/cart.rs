//! # Cart Commands
//!
//! Command handlers for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐                               │
//! │  │  Empty   │───────────────►│ In Cart  │◄──┐ increment_item            │
//! │  │  Cart    │                │          │───┘ decrement_item (floor 1)  │
//! │  └──────────┘                └──────────┘     update_cart_item (n >= 1) │
//! │       ▲                           │                                     │
//! │       └─ storage missing or ──────┘                                     │
//! │          malformed on next load                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use andaz_core::{Cart, CartTotals, ItemId, LineItem, Money};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::state::CartState;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Product attributes as the storefront's "Add to cart" button carries them.
#[derive(Debug, Clone)]
pub struct AddToCartInput {
    pub id: String,
    pub name: String,
    /// Decimal price in currency units (e.g. `24.99`).
    pub price: f64,
    pub image: String,
    pub size: Option<String>,
}

impl AddToCartInput {
    fn into_line_item(self) -> Result<LineItem, CliError> {
        let price = Money::try_from_decimal(self.price)
            .ok_or_else(|| CliError::validation("price must be a non-negative number"))?;

        Ok(LineItem::new(self.id, self.name, price, self.image)
            .with_size(self.size.unwrap_or_default()))
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &mut CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(&cart.store_mut().load())
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: its quantity goes up by one
/// - Product not in cart: added with quantity 1
pub fn add_to_cart(cart: &mut CartState, input: AddToCartInput) -> Result<CartResponse, CliError> {
    debug!(id = %input.id, "add_to_cart command");

    let item = input.into_line_item()?;
    let updated = cart.store_mut().add_or_increment(item)?;
    Ok(CartResponse::from(&updated))
}

/// The "+" button.
pub fn increment_item(cart: &mut CartState, id: &str) -> CartResponse {
    debug!(id = %id, "increment_item command");
    CartResponse::from(&cart.store_mut().increment(&ItemId::from(id)))
}

/// The "-" button. Stops at quantity 1.
pub fn decrement_item(cart: &mut CartState, id: &str) -> CartResponse {
    debug!(id = %id, "decrement_item command");
    CartResponse::from(&cart.store_mut().decrement(&ItemId::from(id)))
}

/// Sets the quantity of an item.
///
/// Quantities below 1 are ignored and the cart is returned unchanged.
pub fn update_cart_item(cart: &mut CartState, id: &str, quantity: i64) -> CartResponse {
    debug!(id = %id, quantity = %quantity, "update_cart_item command");
    CartResponse::from(&cart.store_mut().set_quantity(&ItemId::from(id), quantity))
}

/// Header badge count.
pub fn cart_count(cart: &mut CartState) -> u64 {
    debug!("cart_count command");
    cart.store_mut().item_count()
}
