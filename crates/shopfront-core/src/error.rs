//! # Errors
//!
//! Every fallible operation in shopfront-core returns [`CoreResult`].
//!
//! ## Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors (stock, checkout, lifecycle)     │
//! │  └── ValidationError  - Input validation failures (InvalidArgument)    │
//! │                                                                         │
//! │  shopfront-cli errors (in app)                                         │
//! │  └── CliError         - What the console sees (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages carry the product name and amounts involved. Errors go back to
//! the direct caller; the core never prints them. Use [`CoreError::kind`]
//! to branch on the category instead of matching every variant.

use thiserror::Error;

use crate::money::Money;
use crate::order::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Failure of an inventory, cart, checkout or order operation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is not in the inventory.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds available stock.
    ///
    /// ## Raised By
    /// - `Inventory::decrease_stock` with an amount above the current level
    /// - Checkout validation finds a cart line the inventory cannot cover
    ///
    /// ## Example
    /// ```text
    /// Cart: 25 x Ice
    ///      │
    ///      ▼
    /// Check stock: available=5
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Ice", available: 5, requested: 25 }
    ///      │
    ///      ▼
    /// Console shows: "Insufficient stock for Ice: available 5, requested 25"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// The payment processor declined or failed the charge.
    #[error("Payment of {amount} failed: {reason}")]
    PaymentFailed { amount: Money, reason: String },

    /// Order is not in a state that allows the requested transition.
    #[error("Order {order_id} is {from}, cannot move to {to}")]
    InvalidStatusTransition {
        order_id: u32,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// No order with this per-user id.
    #[error("Order not found: {0}")]
    OrderNotFound(u32),

    /// Invariant broken outside the domain (e.g. a poisoned lock).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Coarse error classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InsufficientStock,
    EmptyCart,
    PaymentFailure,
    InvalidState,
    Internal,
}

impl CoreError {
    /// Returns the error's classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::InvalidArgument,
            CoreError::ProductNotFound(_) | CoreError::OrderNotFound(_) => ErrorKind::NotFound,
            CoreError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            CoreError::EmptyCart => ErrorKind::EmptyCart,
            CoreError::PaymentFailed { .. } => ErrorKind::PaymentFailure,
            CoreError::InvalidStatusTransition { .. } => ErrorKind::InvalidState,
            CoreError::Internal(_) => ErrorKind::Internal,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A rejected input value.
///
/// Raised synchronously at the offending call. Values are never clamped.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value falls outside `min..=max`.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Result would not fit in an `i64`.
    #[error("{field} is too large")]
    Overflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result alias used across the crate.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_messages_name_the_product() {
        let err = CoreError::InsufficientStock {
            name: "Ice".to_string(),
            available: 5,
            requested: 25,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Ice: available 5, requested 25"
        );

        let err = CoreError::PaymentFailed {
            amount: Money::from_cents(11025),
            reason: "declined".to_string(),
        };
        assert_eq!(err.to_string(), "Payment of $110.25 failed: declined");
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::Negative {
            field: "price".to_string(),
            value: -100,
        };
        assert_eq!(err.to_string(), "price cannot be negative (got -100)");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Overflow {
            field: "stock level".to_string(),
        };
        assert_eq!(err.to_string(), "stock level is too large");
    }

    #[test]
    fn test_validation_is_invalid_argument() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(CoreError::EmptyCart.kind(), ErrorKind::EmptyCart);
        assert_eq!(
            CoreError::ProductNotFound("Tea".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(CoreError::OrderNotFound(3).kind(), ErrorKind::NotFound);
        assert_eq!(
            CoreError::InvalidStatusTransition {
                order_id: 1,
                from: OrderStatus::Delivered,
                to: OrderStatus::Paid,
            }
            .kind(),
            ErrorKind::InvalidState
        );
    }
}
