//! # andaz-store: Persistence Boundary for the Andaz Cart
//!
//! This crate keeps the cart in a key/value store with the same contract as
//! the browser's `localStorage`: one key, one JSON string.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Andaz Cart Data Flow                             │
//! │                                                                         │
//! │  CLI command (andaz-cart inc sk-104)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   andaz-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CartStore   │    │   Storage     │    │  Observers   │  │   │
//! │  │   │  (store.rs)   │    │ (storage.rs)  │    │              │  │   │
//! │  │   │               │    │               │    │ BadgeObserver│  │   │
//! │  │   │ load ─ mutate │───►│ MemoryStorage │    │ (apps/cli)   │  │   │
//! │  │   │ save ─ notify │    │ FileStorage   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data dir>/cart.json     (or an in-memory map)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - `KeyValueStorage` trait and its backends
//! - [`store`] - `CartStore`, the read-modify-write cart component
//! - [`error`] - Storage and store error types
//!
//! ## Usage
//!
//! ```rust
//! use andaz_core::{LineItem, Money};
//! use andaz_store::{CartStore, MemoryStorage};
//!
//! let mut store = CartStore::new(MemoryStorage::new());
//! let scarf = LineItem::new("a", "Scarf", Money::from_cents(1000), "/img/a.jpg");
//!
//! store.add_or_increment(scarf.clone()).unwrap();
//! store.add_or_increment(scarf).unwrap();
//!
//! assert_eq!(store.item_count(), 2);
//! assert_eq!(store.totals().total.cents(), 2160);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult, StoreError, StoreResult};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CartObserver, CartStore};
