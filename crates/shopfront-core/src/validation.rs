//! # Validation Module
//!
//! Input validation for the shopping domain.
//!
//! Every check here runs synchronously at the offending call, before any
//! state is touched. Values are rejected, never clamped.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_cart_quantity, validate_price};
//! use shopfront_core::Money;
//!
//! assert!(validate_price(Money::from_cents(375)).is_ok());
//! assert!(validate_cart_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest discount rate a policy may apply (100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Rejects a negative value for `field`.
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

// =============================================================================
// Money Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    validate_non_negative("price", price.cents())
}

/// Validates a payment charge amount.
///
/// Zero is allowed: a fully discounted order still goes through the
/// processor.
pub fn validate_charge_amount(amount: Money) -> ValidationResult<()> {
    validate_non_negative("charge amount", amount.cents())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount rate".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates a stock level held by a product.
pub fn validate_stock_level(quantity: i64) -> ValidationResult<()> {
    validate_non_negative("quantity", quantity)
}

/// Validates an amount passed to a stock increase/decrease.
pub fn validate_stock_amount(amount: i64) -> ValidationResult<()> {
    validate_non_negative("stock amount", amount)
}

/// Validates a quantity being added to a cart.
///
/// ## Rules
/// - Must be positive (> 0); zero or negative never creates a line
pub fn validate_cart_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(375)).is_ok());
        assert!(matches!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::Negative { value: -1, .. })
        ));
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock_level(0).is_ok());
        assert!(validate_stock_level(-3).is_err());
        assert!(validate_stock_amount(0).is_ok());
        assert!(validate_stock_amount(-1).is_err());
    }

    #[test]
    fn test_validate_cart_quantity() {
        assert!(validate_cart_quantity(1).is_ok());
        assert!(validate_cart_quantity(1_000_000).is_ok());
        assert!(validate_cart_quantity(0).is_err());
        assert!(validate_cart_quantity(-2).is_err());
    }

    #[test]
    fn test_validate_charge_amount() {
        assert!(validate_charge_amount(Money::zero()).is_ok());
        assert!(validate_charge_amount(Money::from_cents(-5)).is_err());
    }

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps(0).is_ok());
        assert!(validate_discount_bps(1000).is_ok());
        assert!(validate_discount_bps(10000).is_ok());
        assert!(validate_discount_bps(10001).is_err());
    }
}
