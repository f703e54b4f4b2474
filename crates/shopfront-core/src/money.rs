//! # Money Module
//!
//! Exact currency amounts for prices, subtotals, discounts and charges.
//!
//! ## Cents, Not Floats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  10 x $1.00 + 30 x $3.75                                                │
//! │                                                                         │
//! │    as f64:  10.0 + 112.5       rounding left to the caller             │
//! │    as i64:  1000 + 11250       = 12250 cents, nothing to round         │
//! │                                                                         │
//! │  Only percentages produce fractions of a cent; those are resolved      │
//! │  once, in `Money::percentage`, half up.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let chocolate = Money::from_cents(375);
//! let subtotal = chocolate * 30 + Money::from_major_minor(10, 0);
//!
//! assert_eq!(subtotal.cents(), 12250);
//! assert_eq!(subtotal.to_string(), "$122.50");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// An amount in cents.
///
/// Signed so that a negative input reaches validation as a negative number
/// instead of wrapping. Serializes as a bare integer.
///
/// ```text
/// Product.price ──► CartItem.unit_price ──► line_total ──► cart subtotal
///                                                              │
///                          Order.total ◄── minus discount ◄────┘
///                              │
///                              └──► PaymentProcessor::charge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds an amount from whole units and cents, e.g. `(3, 75)` is $3.75.
    ///
    /// The sign is taken from `major`; `minor` is always a magnitude, so
    /// `(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        let magnitude = major.abs() * 100 + minor;
        if major < 0 {
            Money(-magnitude)
        } else {
            Money(magnitude)
        }
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Cents below one whole unit, without sign.
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
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Price of `qty` units at this unit price.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// `self + rhs`, or `None` if the sum does not fit.
    #[inline]
    pub const fn checked_add(&self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Price of `qty` units, or `None` if it does not fit.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats with a currency symbol other than `$`: `-€5.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{sign}{symbol}{}.{:02}",
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Returns `bps` basis points of this amount (1000 bps = 10%).
    ///
    /// Rounds half up to the nearest cent: `(cents * bps + 5000) / 10000`,
    /// computed in i128 so large amounts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(12250); // $122.50
    /// assert_eq!(subtotal.percentage(1000).cents(), 1225); // $12.25
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(cents as i64)
    }
}

/// `$110.25`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    #[inline]
    fn mul(self, qty: i64) -> Money {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}
