//! # Payment Processing
//!
//! The boundary to a payment gateway. Only a mock ships here; gateway
//! failure modes, retries and idempotency keys belong to a real
//! implementation of [`PaymentProcessor`].

use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_charge_amount;

/// Charges a payee.
///
/// ## Contract
/// - `Err(_)`: the request itself was invalid (e.g. negative amount) or the
///   processor could not be reached
/// - `Ok(false)`: the charge was declined
/// - `Ok(true)`: the money was taken
///
/// Checkout treats both `Err` and `Ok(false)` as a failed payment.
pub trait PaymentProcessor {
    fn charge(&self, amount: Money, payee: &str) -> CoreResult<bool>;
}

/// Processor that accepts every valid charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentProcessor;

impl PaymentProcessor for MockPaymentProcessor {
    fn charge(&self, amount: Money, payee: &str) -> CoreResult<bool> {
        validate_charge_amount(amount)?;
        debug!(amount = %amount, payee = %payee, "Mock charge accepted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_mock_accepts() {
        let processor = MockPaymentProcessor;
        assert!(processor.charge(Money::from_cents(11025), "sina@g.com").unwrap());
        assert!(processor.charge(Money::zero(), "sina@g.com").unwrap());
    }

    #[test]
    fn test_mock_rejects_negative_amount() {
        let err = MockPaymentProcessor
            .charge(Money::from_cents(-1), "sina@g.com")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
