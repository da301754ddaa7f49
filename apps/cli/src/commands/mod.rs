//! # Commands Module
//!
//! Every subcommand of the andaz-cart binary.
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ andaz-cart inc sk-104                                                │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  Command::Inc { id: "sk-104" }                                          │
//! │         │                                                               │
//! │         │ execute(command, &mut CartState)                              │
//! │         ▼                                                               │
//! │  cart::increment_item() ──► CartStore ──► Output::Cart(CartResponse)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  TextRenderer (default) or JSON (--json)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;

use clap::Subcommand;

use crate::error::CliError;
use crate::state::CartState;
use cart::{AddToCartInput, CartResponse};

/// Cart subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the cart with its totals
    Show,

    /// Add a product (or one more of it if already in the cart)
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price, e.g. 24.99
        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Selected size
        #[arg(long)]
        size: Option<String>,
    },

    /// One more of an item
    Inc { id: String },

    /// One fewer of an item (stops at 1)
    Dec { id: String },

    /// Set the quantity of an item (must be at least 1)
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },

    /// Print the header badge count
    Count,
}

/// What a command produced, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Cart(CartResponse),
    Count(u64),
}

/// Runs `command` against the cart.
pub fn execute(command: Command, state: &mut CartState) -> Result<Output, CliError> {
    let output = match command {
        Command::Show => Output::Cart(cart::get_cart(state)),
        Command::Add {
            id,
            name,
            price,
            image,
            size,
        } => Output::Cart(cart::add_to_cart(
            state,
            AddToCartInput {
                id,
                name,
                price,
                image,
                size,
            },
        )?),
        Command::Inc { id } => Output::Cart(cart::increment_item(state, &id)),
        Command::Dec { id } => Output::Cart(cart::decrement_item(state, &id)),
        Command::Set { id, qty } => Output::Cart(cart::update_cart_item(state, &id, qty)),
        Command::Count => Output::Count(cart::cart_count(state)),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    #[test]
    fn test_execute_sequence() {
        let mut state = CartState::in_memory(&ConfigState::default());

        let add = Command::Add {
            id: "a".to_string(),
            name: "Scarf".to_string(),
            price: 10.0,
            image: String::new(),
            size: None,
        };
        execute(add.clone(), &mut state).unwrap();
        execute(add, &mut state).unwrap();
        execute(
            Command::Set {
                id: "a".to_string(),
                qty: 5,
            },
            &mut state,
        )
        .unwrap();

        assert_eq!(execute(Command::Count, &mut state).unwrap(), Output::Count(5));

        match execute(Command::Show, &mut state).unwrap() {
            Output::Cart(response) => assert_eq!(response.totals.subtotal.cents(), 5000),
            other => panic!("unexpected output: {:?}", other),
        }
    }
}
