//! # State Module
//!
//! Application state for the andaz-cart binary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      ConfigState         │ ─────► │       CartState          │      │
//! │  │                          │ opens  │                          │      │
//! │  │  store_name, cart_key    │        │  CartStore<DynStorage>   │      │
//! │  │  data_dir, currency      │        │  + BadgeObserver         │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                  │
//! │  CartState:   single owner, mutated through &mut                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartState, DynStorage};
pub use config::ConfigState;
