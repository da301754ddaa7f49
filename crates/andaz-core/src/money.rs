//! # Money Module
//!
//! Provides `Money` and `TaxRate` for cart arithmetic.
//!
//! ## Integer Cents, Decimal Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORED CART (JSON)            IN MEMORY                RENDERED        │
//! │                                                                         │
//! │  "price": 24.99  ──decimal──►  Money(2499)  ──Display──►  "$24.99"     │
//! │                  ◄─────────                                             │
//! │                                                                         │
//! │  Floating point only exists at the JSON boundary. Every sum, product   │
//! │  and tax calculation runs on i64 cents:                                │
//! │    0.1 + 0.2 = 0.30000000000000004   (f64)                             │
//! │    10  + 20  = 30                     (cents)                          │
//! │                                                                         │
//! │  Sums and products saturate at i64::MAX cents. A stored cart can carry │
//! │  any price and any u32 qty, and totals must never panic or wrap.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use andaz_core::money::{Money, TaxRate};
//!
//! let price = Money::from_cents(1099); // $10.99
//! let line = price * 3;                // $32.97
//! let tax = line.calculate_tax(TaxRate::from_bps(800));
//! assert_eq!(tax.cents(), 264);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that differences can be represented, although cart prices are
/// validated to be non-negative before they get here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use andaz_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as stored by the storefront page) to cents.
    ///
    /// Rounds to the nearest cent. Returns `None` for negative, NaN,
    /// infinite or out-of-range input.
    ///
    /// ## Example
    /// ```rust
    /// use andaz_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_decimal(24.99), Some(Money::from_cents(2499)));
    /// assert_eq!(Money::try_from_decimal(-1.0), None);
    /// ```
    pub fn try_from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }

        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the amount as a decimal number of dollars.
    ///
    /// Only for the JSON boundary; never do arithmetic on the result.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at `rate`, rounding half up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 is the half-cent rounding term.
    ///
    /// ## Example
    /// ```rust
    /// use andaz_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(2000); // $20.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
    /// assert_eq!(tax.cents(), 160); // $1.60
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large subtotals from overflowing before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Multiplies a unit price by a line quantity, saturating at the i64
    /// bounds.
    ///
    /// ## Example
    /// ```rust
    /// use andaz_core::money::Money;
    ///
    /// let line_total = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

/// Shows money as `$12.34` (debugging and logs).
///
/// The CLI renderer formats through its configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Saturating: `Money(i64::MAX) + Money(1)` stays at `i64::MAX`.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Decimal Serde Adapter
// =============================================================================

/// Serde adapter storing `Money` as a decimal number of dollars.
///
/// Used on `LineItem::price` so the persisted layout stays `"price": 24.99`.
/// Whole-dollar amounts are written as integers (`10`, not `10.0`), the way
/// the storefront page's own `JSON.stringify` writes them.
pub mod decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if money.cents() % 100 == 0 {
            serializer.serialize_i64(money.dollars())
        } else {
            serializer.serialize_f64(money.to_decimal())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::try_from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("invalid price: {}", value)))
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (1 bps = 0.01%).
///
/// 800 bps = 8%, the storefront sales tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "decimal")]
        price: Money,
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::try_from_decimal(24.99), Some(Money::from_cents(2499)));
        assert_eq!(Money::try_from_decimal(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::try_from_decimal(10.0), Some(Money::from_cents(1000)));
        assert_eq!(Money::try_from_decimal(0.0), Some(Money::zero()));
    }

    #[test]
    fn test_from_decimal_rejects_invalid() {
        assert_eq!(Money::try_from_decimal(-0.01), None);
        assert_eq!(Money::try_from_decimal(f64::NAN), None);
        assert_eq!(Money::try_from_decimal(f64::INFINITY), None);
        assert_eq!(Money::try_from_decimal(1e300), None);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let summed: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(summed.cents(), 2000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(100_000_000_000_000_000);
        assert_eq!(huge.multiply_quantity(100).cents(), i64::MAX);
        assert_eq!((huge * u32::MAX).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MAX) + Money::from_cents(1)).cents(), i64::MAX);

        let summed: Money = vec![huge * 90, huge * 90].into_iter().sum();
        assert_eq!(summed.cents(), i64::MAX);

        let tax = Money::from_cents(i64::MAX).calculate_tax(TaxRate::from_bps(800));
        assert!(tax.cents() > 0);
    }

    #[test]
    fn test_eight_percent_tax() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(Money::from_cents(2000).calculate_tax(rate).cents(), 160);
        assert_eq!(Money::from_cents(1000).calculate_tax(rate).cents(), 80);
        // $0.06 × 8% = 0.48 cents → 0
        assert_eq!(Money::from_cents(6).calculate_tax(rate).cents(), 0);
        // $0.07 × 8% = 0.56 cents → 1
        assert_eq!(Money::from_cents(7).calculate_tax(rate).cents(), 1);
    }

    #[test]
    fn test_tax_rate_percentage() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_decimal_serde_layout() {
        let whole = serde_json::to_string(&Priced { price: Money::from_cents(1000) }).unwrap();
        assert_eq!(whole, r#"{"price":10}"#);

        let fractional =
            serde_json::to_string(&Priced { price: Money::from_cents(2499) }).unwrap();
        assert_eq!(fractional, r#"{"price":24.99}"#);

        let parsed: Priced = serde_json::from_str(r#"{"price":24.99}"#).unwrap();
        assert_eq!(parsed.price.cents(), 2499);

        let from_int: Priced = serde_json::from_str(r#"{"price":15}"#).unwrap();
        assert_eq!(from_int.price.cents(), 1500);
    }

    #[test]
    fn test_decimal_serde_rejects_negative_price() {
        let err = serde_json::from_str::<Priced>(r#"{"price":-3.5}"#).unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }
}
