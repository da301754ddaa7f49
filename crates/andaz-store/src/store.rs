//! # Cart Store
//!
//! Read-modify-write access to the persisted cart.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Mutation (runs to completion)                    │
//! │                                                                         │
//! │  load() ───► Cart (fresh from storage, or empty)                       │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Cart::add_or_increment / set_quantity / increment / decrement         │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  save() ───► whole list rewritten under the key                        │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  observers.cart_changed(cart, totals)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fallbacks
//! - Absent key: empty cart.
//! - Malformed JSON: empty cart, logged. The bad value is replaced on the
//!   next save.
//! - Backend failure: the store switches to a session-only in-memory cart
//!   and logs once. Every later load and save uses that copy.
//!
//! Mutations take `&mut self`; one store has one owner and every call
//! finishes before the next starts.

use andaz_core::validation::validate_line_item;
use andaz_core::{Cart, CartTotals, CoreError, ItemId, LineItem, CART_STORAGE_KEY};
use tracing::{debug, info, warn};

use crate::error::{StorageError, StoreError, StoreResult};
use crate::storage::KeyValueStorage;

/// Collaborator notified after every persisted cart change.
///
/// The renderer and the header badge hang off this; the store itself has
/// no presentation concerns.
pub trait CartObserver {
    fn cart_changed(&mut self, cart: &Cart, totals: &CartTotals);
}

impl<F> CartObserver for F
where
    F: FnMut(&Cart, &CartTotals),
{
    fn cart_changed(&mut self, cart: &Cart, totals: &CartTotals) {
        self(cart, totals)
    }
}

/// The cart component: a persisted list of line items behind one key.
pub struct CartStore<S> {
    storage: S,
    key: String,
    /// Session-only cart, set once the backend has failed.
    fallback: Option<Cart>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Creates a store over `storage` using the shared `"cart"` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        CartStore {
            storage,
            key: key.into(),
            fallback: None,
            observers: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// True once the store runs on its in-memory fallback.
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    /// Registers an observer for future mutations.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // =========================================================================
    // Storage boundary
    // =========================================================================

    /// Reads the cart, surfacing storage and parse failures.
    pub fn try_load(&self) -> StoreResult<Cart> {
        if let Some(cart) = &self.fallback {
            return Ok(cart.clone());
        }

        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Cart::new());
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::MalformedData {
            key: self.key.clone(),
            source,
        })
    }

    /// Reads the cart. Never fails; see the module docs for the fallbacks.
    pub fn load(&mut self) -> Cart {
        match self.try_load() {
            Ok(cart) => cart,
            Err(StoreError::StorageUnavailable(err)) => {
                self.degrade(&err, Cart::new());
                Cart::new()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "Discarding stored cart");
                Cart::new()
            }
        }
    }

    /// Persists `cart`, replacing whatever was stored.
    pub fn save(&mut self, cart: &Cart) {
        if let Some(fallback) = self.fallback.as_mut() {
            *fallback = cart.clone();
            return;
        }

        let raw = match serde_json::to_string(cart) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %self.key, error = %err, "Cart could not be serialized");
                return;
            }
        };

        match self.storage.set_item(&self.key, &raw) {
            Ok(()) => debug!(key = %self.key, lines = cart.len(), "Cart saved"),
            Err(err) => self.degrade(&err, cart.clone()),
        }
    }

    fn degrade(&mut self, err: &StorageError, cart: Cart) {
        if self.fallback.is_none() {
            warn!(
                key = %self.key,
                error = %err,
                "Cart storage unavailable, keeping the cart in memory for this session"
            );
        }
        self.fallback = Some(cart);
    }

    fn commit(&mut self, cart: &Cart) {
        self.save(cart);
        let totals = cart.totals();
        for observer in &mut self.observers {
            observer.cart_changed(cart, &totals);
        }
    }

    /// Logs a mutation aimed at an id the cart does not hold.
    fn skip_unknown(&self, id: &ItemId, err: &CoreError) {
        debug!(id = %id, error = %err, "Quantity change ignored");
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product or bumps the quantity of its existing line.
    ///
    /// ## Errors
    /// `InvalidItem` if `item` has a blank id or name or a negative price.
    /// Nothing is written in that case.
    pub fn add_or_increment(&mut self, item: LineItem) -> StoreResult<Cart> {
        validate_line_item(&item)?;

        let mut cart = self.load();
        let line = cart.add_or_increment(item);
        info!(id = %line.id, qty = line.qty, "Added to cart");

        self.commit(&cart);
        Ok(cart)
    }

    /// Replaces the quantity of `id`.
    ///
    /// `qty < 1` and unknown ids are no-ops: nothing is stored and the
    /// current cart is returned.
    pub fn set_quantity(&mut self, id: &ItemId, qty: i64) -> Cart {
        let mut cart = self.load();
        match cart.set_quantity(id, qty) {
            Ok(()) => {
                debug!(id = %id, qty, "Quantity set");
                self.commit(&cart);
            }
            Err(CoreError::Validation(_)) => {
                let err = StoreError::InvalidQuantity {
                    id: id.to_string(),
                    requested: qty,
                };
                warn!(error = %err, "Quantity change ignored");
            }
            Err(err) => self.skip_unknown(id, &err),
        }
        cart
    }

    /// The "+" button: one more of `id`.
    pub fn increment(&mut self, id: &ItemId) -> Cart {
        let mut cart = self.load();
        match cart.increment(id) {
            Ok(qty) => {
                debug!(id = %id, qty, "Quantity incremented");
                self.commit(&cart);
            }
            Err(err) => self.skip_unknown(id, &err),
        }
        cart
    }

    /// The "-" button: one fewer of `id`, never below 1.
    ///
    /// At qty 1 nothing is written and observers are not notified.
    pub fn decrement(&mut self, id: &ItemId) -> Cart {
        let mut cart = self.load();
        let before = cart.get(id).map(|line| line.qty);
        match cart.decrement(id) {
            Ok(qty) if Some(qty) != before => {
                debug!(id = %id, qty, "Quantity decremented");
                self.commit(&cart);
            }
            Ok(_) => debug!(id = %id, "Quantity already at 1"),
            Err(err) => self.skip_unknown(id, &err),
        }
        cart
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Sum of quantities in the stored cart (the header badge).
    pub fn item_count(&mut self) -> u64 {
        self.load().item_count()
    }

    pub fn totals(&mut self) -> CartTotals {
        self.load().totals()
    }
}
