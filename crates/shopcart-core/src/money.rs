//! Money type for representing prices and totals.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Amounts are
//! currency-agnostic; the symbol is a presentation concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CartError;

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in the smallest unit (cents).
///
/// Serializes as a decimal number (`9.99`) so catalog files stay readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// Non-finite amounts and amounts whose cents do not fit in an `i64` are
    /// rejected rather than clamped.
    ///
    /// ```
    /// use shopcart_core::money::Money;
    /// let price = Money::try_from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// assert!(Money::try_from_decimal(f64::NAN).is_err());
    /// ```
    pub fn try_from_decimal(amount: f64) -> Result<Self, CartError> {
        let cents = (amount * CENTS_PER_UNIT as f64).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(CartError::InvalidAmount(amount.to_string()));
        }
        Ok(Self::new(cents as i64))
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format the amount with two decimals and no symbol (e.g. "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u64;
        format!("{}{}.{:02}", sign, abs / per_unit, abs % per_unit)
    }

    /// Format with a currency symbol prefix (e.g. "$49.99").
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }

    /// Add another amount, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn checked_sum(iter: impl IntoIterator<Item = Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }
}

impl TryFrom<f64> for Money {
    type Error = CartError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::try_from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}
