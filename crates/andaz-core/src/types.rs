//! # Line Item Types
//!
//! The persisted shape of one cart entry.
//!
//! ## Stored Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  localStorage["cart"] = JSON array of:                                  │
//! │                                                                         │
//! │  {                                                                      │
//! │    "id":    "sk-104" | 104,    ◄── string or number, kept as ItemId     │
//! │    "name":  "Silk Kurta",                                               │
//! │    "price": 24.99,             ◄── decimal dollars, kept as Money       │
//! │    "image": "/img/kurta.jpg",                                           │
//! │    "size":  "M",               ◄── optional, defaults to ""             │
//! │    "qty":   2                  ◄── clamped to >= 1 on read              │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Id
// =============================================================================

/// Identifier of a product line in the cart.
///
/// Product buttons on the storefront carry their id as a data attribute, so
/// older stored carts may hold either `"7"` or `7`. Both deserialize to the
/// same `ItemId("7")`, and ids are always written back as strings. Matching
/// is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ItemId(text),
            RawId::Number(number) => ItemId(number.to_string()),
        })
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart, with its quantity.
///
/// ## Invariants
/// - `qty >= 1`. Deserialization clamps stored values below 1.
/// - `price` is never negative. Deserialization rejects negative prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Unit price. Stored as a decimal number of dollars.
    #[serde(with = "crate::money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    /// Product image URL.
    pub image: String,

    /// Selected size, empty when the product has none.
    #[serde(default)]
    pub size: String,

    #[serde(deserialize_with = "clamped_quantity")]
    #[ts(type = "number")]
    pub qty: u32,
}

impl LineItem {
    /// Creates a line with quantity 1 and no size.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            size: String::new(),
            qty: 1,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.qty)
    }
}

/// Reads any JSON number as a quantity and clamps it into `1..=u32::MAX`.
///
/// Integers beyond `i64` and floats (`2.0`, `1e20`) are accepted too; the
/// fractional part of a float is dropped.
fn clamped_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Number::deserialize(deserializer)?;
    let qty = match (raw.as_u64(), raw.as_i64(), raw.as_f64()) {
        (Some(unsigned), _, _) => u32::try_from(unsigned).unwrap_or(u32::MAX),
        (None, Some(_negative), _) => 0,
        // `as` saturates: negatives go to 0, huge values to u32::MAX
        (None, None, Some(float)) => float as u32,
        (None, None, None) => 0,
    };
    Ok(qty.max(1))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_accepts_string_or_number() {
        let from_text: ItemId = serde_json::from_str(r#""7""#).unwrap();
        let from_number: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(from_number.as_str(), "7");
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let id: ItemId = serde_json::from_str("104").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""104""#);
    }

    #[test]
    fn test_item_id_rejects_other_json() {
        assert!(serde_json::from_str::<ItemId>("null").is_err());
        assert!(serde_json::from_str::<ItemId>("[1]").is_err());
    }

    #[test]
    fn test_line_item_reads_stored_layout() {
        let json = r#"{"id":3,"name":"Silk Kurta","price":24.99,"image":"/img/k.jpg","size":"M","qty":2}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, ItemId::from("3"));
        assert_eq!(item.price.cents(), 2499);
        assert_eq!(item.size, "M");
        assert_eq!(item.qty, 2);
        assert_eq!(item.line_total().cents(), 4998);
    }

    #[test]
    fn test_line_item_size_defaults_to_empty() {
        let json = r#"{"id":"a","name":"Scarf","price":10,"image":"/img/s.jpg","qty":1}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.size, "");
    }

    #[test]
    fn test_line_item_clamps_quantity() {
        let zero = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":0}"#;
        assert_eq!(serde_json::from_str::<LineItem>(zero).unwrap().qty, 1);

        let negative = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":-4}"#;
        assert_eq!(serde_json::from_str::<LineItem>(negative).unwrap().qty, 1);
    }

    #[test]
    fn test_line_item_saturates_large_quantity() {
        let beyond_i64 =
            r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":10000000000000000000}"#;
        assert_eq!(serde_json::from_str::<LineItem>(beyond_i64).unwrap().qty, u32::MAX);

        let beyond_u32 = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":5000000000}"#;
        assert_eq!(serde_json::from_str::<LineItem>(beyond_u32).unwrap().qty, u32::MAX);
    }

    #[test]
    fn test_line_item_accepts_float_quantity() {
        let whole = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":2.0}"#;
        assert_eq!(serde_json::from_str::<LineItem>(whole).unwrap().qty, 2);

        let fractional = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":2.7}"#;
        assert_eq!(serde_json::from_str::<LineItem>(fractional).unwrap().qty, 2);

        let huge = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":1e20}"#;
        assert_eq!(serde_json::from_str::<LineItem>(huge).unwrap().qty, u32::MAX);

        let below_one = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":0.5}"#;
        assert_eq!(serde_json::from_str::<LineItem>(below_one).unwrap().qty, 1);
    }

    #[test]
    fn test_line_item_ignores_unknown_fields() {
        let json = r#"{"id":"a","name":"Scarf","price":10,"image":"","qty":1,"color":"red"}"#;
        assert!(serde_json::from_str::<LineItem>(json).is_ok());
    }

    #[test]
    fn test_line_item_writes_stored_layout() {
        let item = LineItem::new("a", "Scarf", Money::from_cents(1000), "/img/s.jpg");
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":"a","name":"Scarf","price":10,"image":"/img/s.jpg","size":"","qty":1}"#
        );
    }
}
