//! # andaz-core: Pure Cart Logic for the Andaz Storefront
//!
//! This crate holds the cart rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Andaz Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Renderer (apps/cli TextRenderer)                   │   │
//! │  │    cart lines ──► subtotal / tax / total ──► header badge       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              andaz-store (CartStore)                            │   │
//! │  │    load ──► mutate ──► save ──► notify observers                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ andaz-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  ItemId   │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │ LineItem  │  │  TaxRate  │  │  Totals   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line item types (ItemId, LineItem)
//! - [`money`] - Money and TaxRate with integer arithmetic
//! - [`cart`] - The Cart list and its derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use andaz_core::{Cart, ItemId, LineItem, Money};
//!
//! let mut cart = Cart::new();
//! let kurta = LineItem::new("a", "Silk Kurta", Money::from_cents(1000), "/img/a.jpg");
//!
//! cart.add_or_increment(kurta.clone());
//! cart.add_or_increment(kurta);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.item_count, 2);
//! assert_eq!(totals.subtotal.cents(), 2000);
//! assert_eq!(totals.tax.cents(), 160);
//! assert_eq!(totals.total.cents(), 2160);
//! assert_eq!(cart.get(&ItemId::from("a")).map(|i| i.qty), Some(2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{item_count, subtotal, tax, total, Cart, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use types::{ItemId, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the storefront pages share for the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Sales tax applied to every cart: 8%.
///
/// Fixed for the storefront, there is no per-item or per-region rate.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(800);
