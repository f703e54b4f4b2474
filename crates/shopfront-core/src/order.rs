//! # Orders
//!
//! Immutable snapshot of a completed purchase. After creation only the
//! status moves, and only along the lifecycle below.
//!
//! ## Status Lifecycle
//! ```text
//!   PENDING ──► PAID ──► SHIPPED ──► DELIVERED
//!      │          │
//!      └──────────┴──► CANCELLED
//! ```
//!
//! ## Dual-Key Identity
//! - `order_id`: sequential per user, 1-based (business key)
//! - `reference`: UUID v4, unique across users

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, not yet paid.
    Pending,
    /// Payment taken.
    Paid,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Abandoned or refunded.
    Cancelled,
}

impl OrderStatus {
    /// True if `next` is a legal successor of this status.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Paid)
                | (Pending, Cancelled)
                | (Paid, Shipped)
                | (Paid, Cancelled)
                | (Shipped, Delivered)
        )
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    order_id: u32,
    reference: Uuid,
    /// Deep copy of the cart lines at purchase time.
    items: Vec<CartItem>,
    subtotal: Money,
    discount: Money,
    total: Money,
    status: OrderStatus,
    /// Email the payment was charged against.
    payee: String,
    placed_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order; `total` is derived as `subtotal - discount`.
    pub(crate) fn new(
        order_id: u32,
        items: Vec<CartItem>,
        subtotal: Money,
        discount: Money,
        status: OrderStatus,
        payee: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Order {
            order_id,
            reference: Uuid::new_v4(),
            items,
            subtotal,
            discount,
            total: subtotal - discount,
            status,
            payee: payee.into(),
            placed_at: now,
            updated_at: now,
        }
    }

    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Moves the order to `next`.
    ///
    /// ## Errors
    /// `InvalidStatusTransition` if the lifecycle does not allow the move;
    /// the order is left unchanged.
    pub fn transition_to(&mut self, next: OrderStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidStatusTransition {
                order_id: self.order_id,
                from: self.status,
                to: next,
            });
        }

        info!(order_id = self.order_id, from = %self.status, to = %next, "Order status changed");
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn ship(&mut self) -> CoreResult<()> {
        self.transition_to(OrderStatus::Shipped)
    }

    pub fn deliver(&mut self) -> CoreResult<()> {
        self.transition_to(OrderStatus::Delivered)
    }

    pub fn cancel(&mut self) -> CoreResult<()> {
        self.transition_to(OrderStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn paid_order() -> Order {
        let water = Product::new("Water", Money::from_cents(100), 20, "Drinks").unwrap();
        Order::new(
            1,
            vec![CartItem::from_product(&water, 10)],
            Money::from_cents(1000),
            Money::zero(),
            OrderStatus::Paid,
            "sina@g.com",
        )
    }

    #[test]
    fn test_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_display_and_serialize() {
        assert_eq!(OrderStatus::Paid.to_string(), "PAID");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Paid));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Paid.can_transition_to(Shipped));
        assert!(Paid.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Delivered));

        assert!(!Paid.can_transition_to(Paid));
        assert!(!Paid.can_transition_to(Pending));
        assert!(!Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Paid));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_order_totals() {
        let order = paid_order();
        assert_eq!(order.total().cents(), 1000);
        assert_eq!(order.total_quantity(), 10);
        assert_eq!(order.payee(), "sina@g.com");
    }

    #[test]
    fn test_ship_and_deliver() {
        let mut order = paid_order();
        order.ship().unwrap();
        order.deliver().unwrap();
        assert_eq!(order.status(), OrderStatus::Delivered);
        assert!(order.updated_at() >= order.placed_at());
    }

    #[test]
    fn test_invalid_transition_leaves_status() {
        let mut order = paid_order();
        order.ship().unwrap();

        let err = order.cancel().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidStatusTransition {
                order_id: 1,
                from: OrderStatus::Shipped,
                to: OrderStatus::Cancelled,
            }
        ));
        assert_eq!(order.status(), OrderStatus::Shipped);
    }

    #[test]
    fn test_references_are_unique() {
        assert_ne!(paid_order().reference(), paid_order().reference());
    }
}
