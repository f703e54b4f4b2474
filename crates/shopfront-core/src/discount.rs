//! # Discount Policies
//!
//! Maps a cart subtotal to a discount amount. Checkout only sees the
//! [`DiscountPolicy`] trait, so rule sets can be swapped without touching
//! order placement.
//!
//! ## Default Rule
//! ```text
//! subtotal >= $100.00  ──►  10% of subtotal
//! subtotal <  $100.00  ──►  $0.00
//! ```

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_discount_bps, validate_non_negative};

/// Subtotal at which the default discount starts to apply.
pub const DEFAULT_DISCOUNT_THRESHOLD: Money = Money::from_cents(10_000);

/// Default discount rate in basis points (1000 = 10%).
pub const DEFAULT_DISCOUNT_BPS: u32 = 1_000;

/// A pure subtotal → discount rule.
///
/// Implementations must be deterministic and side-effect free.
pub trait DiscountPolicy {
    fn discount(&self, subtotal: Money) -> Money;
}

/// Percentage off once the subtotal reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdDiscount {
    threshold: Money,
    rate_bps: u32,
}

impl ThresholdDiscount {
    /// Creates a threshold rule.
    ///
    /// ## Errors
    /// - negative threshold
    /// - rate above 10000 bps (100%)
    pub fn new(threshold: Money, rate_bps: u32) -> CoreResult<Self> {
        validate_non_negative("discount threshold", threshold.cents())?;
        validate_discount_bps(rate_bps)?;
        Ok(ThresholdDiscount {
            threshold,
            rate_bps,
        })
    }

    pub fn threshold(&self) -> Money {
        self.threshold
    }

    pub fn rate_bps(&self) -> u32 {
        self.rate_bps
    }
}

impl Default for ThresholdDiscount {
    fn default() -> Self {
        ThresholdDiscount {
            threshold: DEFAULT_DISCOUNT_THRESHOLD,
            rate_bps: DEFAULT_DISCOUNT_BPS,
        }
    }
}

impl DiscountPolicy for ThresholdDiscount {
    fn discount(&self, subtotal: Money) -> Money {
        if subtotal < self.threshold || !subtotal.is_positive() {
            return Money::zero();
        }
        subtotal.percentage(self.rate_bps).min(subtotal)
    }
}

/// Never discounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn discount(&self, _subtotal: Money) -> Money {
        Money::zero()
    }
}

/// Applies the default rule: 10% off at $100.00 or more.
///
/// ## Example
/// ```rust
/// use shopfront_core::discount::discount;
/// use shopfront_core::Money;
///
/// assert_eq!(discount(Money::from_cents(12250)).cents(), 1225);
/// assert!(discount(Money::from_cents(9999)).is_zero());
/// ```
pub fn discount(subtotal: Money) -> Money {
    ThresholdDiscount::default().discount(subtotal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_boundary() {
        assert!(discount(Money::zero()).is_zero());
        assert!(discount(Money::from_cents(9999)).is_zero());
        assert_eq!(discount(Money::from_cents(10000)).cents(), 1000);
        assert_eq!(discount(Money::from_cents(12250)).cents(), 1225);
    }

    #[test]
    fn test_custom_threshold() {
        let policy = ThresholdDiscount::new(Money::from_cents(5000), 2500).unwrap();
        assert!(policy.discount(Money::from_cents(4999)).is_zero());
        assert_eq!(policy.discount(Money::from_cents(8000)).cents(), 2000);
    }

    #[test]
    fn test_zero_threshold_still_ignores_empty_subtotal() {
        let policy = ThresholdDiscount::new(Money::zero(), 1000).unwrap();
        assert!(policy.discount(Money::zero()).is_zero());
    }

    #[test]
    fn test_full_discount_never_exceeds_subtotal() {
        let policy = ThresholdDiscount::new(Money::zero(), 10000).unwrap();
        assert_eq!(policy.discount(Money::from_cents(333)).cents(), 333);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        assert!(ThresholdDiscount::new(Money::from_cents(-1), 1000).is_err());
        assert!(ThresholdDiscount::new(Money::zero(), 10001).is_err());
    }

    #[test]
    fn test_no_discount() {
        assert!(NoDiscount.discount(Money::from_cents(1_000_000)).is_zero());
    }
}
