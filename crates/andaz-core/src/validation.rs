//! # Validation Module
//!
//! Checks applied before a value enters the cart.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product button / CLI args                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_line_item ◄── THIS MODULE (id, name, price)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart::add_or_increment / Cart::set_quantity                           │
//! │       │                                                                 │
//! │       └── validate_quantity ◄── THIS MODULE (qty >= 1)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use andaz_core::validation::validate_quantity;
//!
//! assert_eq!(validate_quantity(5), Ok(5));
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested quantity and narrows it to the stored type.
///
/// ## Rules
/// - Must be at least 1 (a line is never stored with qty 0)
/// - Values above `u32::MAX` saturate
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty < 1 {
        return Err(ValidationError::BelowOne {
            field: "qty".to_string(),
            value: qty,
        });
    }

    Ok(u32::try_from(qty).unwrap_or(u32::MAX))
}

/// Validates a line item about to be added.
///
/// ## Rules
/// - `id` must not be blank
/// - `name` must not be blank
/// - `price` must not be negative
///
/// `image` and `size` are free-form.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.id.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if item.price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1), Ok(1));
        assert_eq!(validate_quantity(999), Ok(999));
        assert_eq!(validate_quantity(i64::MAX), Ok(u32::MAX));

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_line_item() {
        let item = LineItem::new("a", "Scarf", Money::from_cents(1000), "/img/s.jpg");
        assert!(validate_line_item(&item).is_ok());

        let blank_id = LineItem::new("  ", "Scarf", Money::from_cents(1000), "");
        assert_eq!(
            validate_line_item(&blank_id),
            Err(ValidationError::Required {
                field: "id".to_string()
            })
        );

        let blank_name = LineItem::new("a", "", Money::from_cents(1000), "");
        assert!(validate_line_item(&blank_name).is_err());

        let negative = LineItem::new("a", "Scarf", Money::from_cents(-1), "");
        assert_eq!(
            validate_line_item(&negative),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_free_items_are_valid() {
        let free = LineItem::new("gift", "Gift Wrap", Money::zero(), "");
        assert!(validate_line_item(&free).is_ok());
    }
}
