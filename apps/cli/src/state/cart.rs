//! # Cart State
//!
//! Owns the `CartStore` for the lifetime of one command.
//!
//! ## Storage Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigState::resolve_data_dir()                                        │
//! │       │                                                                 │
//! │       ├── Some(dir) ──► FileStorage::open(dir)                          │
//! │       │                    ├── Ok  ──► <dir>/<cart_key>.json            │
//! │       │                    └── Err ──► MemoryStorage (warn)             │
//! │       │                                                                 │
//! │       └── None ───────► MemoryStorage (warn)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage problems never stop a command: the cart just lives in memory
//! for this run, like a browser with storage disabled.

use andaz_store::{CartStore, FileStorage, KeyValueStorage, MemoryStorage};
use tracing::{debug, warn};

use super::config::ConfigState;
use crate::render::BadgeObserver;

/// Storage type erased so file and memory backends share one state type.
pub type DynStorage = Box<dyn KeyValueStorage>;

/// The cart store plus the observers the app hangs off it.
pub struct CartState {
    store: CartStore<DynStorage>,
}

impl CartState {
    /// Opens the cart configured by `config`.
    pub fn open(config: &ConfigState) -> Self {
        let storage: DynStorage = match config.resolve_data_dir() {
            Some(dir) => match FileStorage::open(&dir) {
                Ok(storage) => {
                    debug!(dir = %dir.display(), "Using file storage");
                    Box::new(storage)
                }
                Err(err) => {
                    warn!(error = %err, "Cart directory unavailable, cart is session-only");
                    Box::new(MemoryStorage::new())
                }
            },
            None => {
                warn!("No data directory for this platform, cart is session-only");
                Box::new(MemoryStorage::new())
            }
        };

        Self::with_storage(storage, config)
    }

    /// Builds the state over an explicit backend.
    pub fn with_storage(storage: DynStorage, config: &ConfigState) -> Self {
        let mut store = CartStore::with_key(storage, config.cart_key.clone());
        store.subscribe(BadgeObserver::default());
        CartState { store }
    }

    /// A session-only cart (tests, `--memory`).
    pub fn in_memory(config: &ConfigState) -> Self {
        Self::with_storage(Box::new(MemoryStorage::new()), config)
    }

    pub fn store(&self) -> &CartStore<DynStorage> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CartStore<DynStorage> {
        &mut self.store
    }
}
