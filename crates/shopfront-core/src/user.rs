//! # User & Checkout
//!
//! A user owns one cart and an order history, and places orders by
//! composing the inventory, a discount policy and a payment processor.
//!
//! ## Checkout Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order                                          │
//! │                                                                         │
//! │  1. Cart empty? ───────────────────────────────► EmptyCart              │
//! │                                                                         │
//! │  2. Validate every line (no mutation)                                   │
//! │     has_stock(name, qty)? ── no ──────────────► InsufficientStock       │
//! │                                                                         │
//! │  3. Reserve: decrease_stock for every line                              │
//! │     failure ──► restore applied lines ────────► error                   │
//! │                                                                         │
//! │  4. subtotal, discount = policy(subtotal), total = subtotal - discount  │
//! │                                                                         │
//! │  5. charge(total, email)                                                │
//! │     declined / error ──► restore all lines ───► PaymentFailed / error   │
//! │                                                                         │
//! │  6. Order { order_id = orders.len() + 1, status = PAID, items copy }    │
//! │                                                                         │
//! │  7. Append to history, clear cart, return the order                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure leaves inventory, cart and history as they were before the
//! call. Nothing is retried.

use serde::Serialize;
use tracing::{info, warn};

use crate::cart::ShoppingCart;
use crate::discount::{DiscountPolicy, ThresholdDiscount};
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::order::{Order, OrderStatus};
use crate::payment::PaymentProcessor;

/// A shopper with contact details, a cart and past orders.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    name: String,
    email: String,
    shipping_address: String,
    cart: ShoppingCart,
    /// Chronological: insertion order is placement order.
    orders: Vec<Order>,
}

impl User {
    /// Creates a user with an empty cart and no orders.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        shipping_address: impl Into<String>,
    ) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            shipping_address: shipping_address.into(),
            cart: ShoppingCart::new(),
            orders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut ShoppingCart {
        &mut self.cart
    }

    /// Orders in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Alias of [`orders`](Self::orders).
    pub fn order_history(&self) -> &[Order] {
        self.orders()
    }

    /// Looks up an order by its per-user id.
    pub fn order(&self, order_id: u32) -> CoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.order_id() == order_id)
            .ok_or(CoreError::OrderNotFound(order_id))
    }

    pub fn order_mut(&mut self, order_id: u32) -> CoreResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.order_id() == order_id)
            .ok_or(CoreError::OrderNotFound(order_id))
    }

    /// Moves one of this user's orders to `status`.
    pub fn update_order_status(&mut self, order_id: u32, status: OrderStatus) -> CoreResult<()> {
        self.order_mut(order_id)?.transition_to(status)
    }

    /// Places an order with the default discount (10% at $100.00 or more).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{Inventory, MockPaymentProcessor, Money, OrderStatus, Product, User};
    ///
    /// let mut inventory: Inventory = [
    ///     Product::new("Water", Money::from_cents(100), 20, "Drinks").unwrap(),
    ///     Product::new("Chocolate", Money::from_cents(375), 40, "Snacks").unwrap(),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let mut user = User::new("Sina", "sina@g.com", "Altstadt 11, 4600 Wels");
    /// user.cart_mut().add(inventory.get("Water").unwrap(), 10).unwrap();
    /// user.cart_mut().add(inventory.get("Chocolate").unwrap(), 30).unwrap();
    ///
    /// let order = user.place_order(&mut inventory, &MockPaymentProcessor).unwrap();
    /// assert_eq!(order.total().cents(), 11025);
    /// assert_eq!(order.status(), OrderStatus::Paid);
    /// assert!(user.cart().is_empty());
    /// ```
    pub fn place_order(
        &mut self,
        inventory: &mut Inventory,
        payment: &dyn PaymentProcessor,
    ) -> CoreResult<Order> {
        self.place_order_with(inventory, payment, &ThresholdDiscount::default())
    }

    /// Places an order using the given discount policy.
    pub fn place_order_with(
        &mut self,
        inventory: &mut Inventory,
        payment: &dyn PaymentProcessor,
        policy: &dyn DiscountPolicy,
    ) -> CoreResult<Order> {
        if self.cart.is_empty() {
            warn!(user = %self.email, "Checkout rejected: cart is empty");
            return Err(CoreError::EmptyCart);
        }

        // Validation pass: nothing is mutated until every line is covered.
        for item in self.cart.items() {
            if !inventory.has_stock(&item.product_name, item.quantity) {
                let available = inventory
                    .get(&item.product_name)
                    .map(|p| p.quantity())
                    .unwrap_or(0);
                warn!(
                    user = %self.email,
                    product = %item.product_name,
                    available,
                    requested = item.quantity,
                    "Checkout rejected: insufficient stock"
                );
                return Err(CoreError::InsufficientStock {
                    name: item.product_name.clone(),
                    available,
                    requested: item.quantity,
                });
            }
        }

        // Reservation pass.
        let mut reserved: Vec<(&str, i64)> = Vec::with_capacity(self.cart.len());
        for item in self.cart.items() {
            if let Err(err) = inventory.decrease_stock(&item.product_name, item.quantity) {
                restore_stock(inventory, &reserved);
                return Err(err);
            }
            reserved.push((item.product_name.as_str(), item.quantity));
        }

        let subtotal = self.cart.subtotal();
        let discount = policy.discount(subtotal).min(subtotal);
        let total = subtotal - discount;

        let charged = match payment.charge(total, &self.email) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CoreError::PaymentFailed {
                amount: total,
                reason: "charge declined".to_string(),
            }),
            Err(err) => Err(err),
        };
        if let Err(err) = charged {
            warn!(user = %self.email, total = %total, error = %err, "Payment failed, releasing stock");
            restore_stock(inventory, &reserved);
            return Err(err);
        }

        let order_id = self.orders.len() as u32 + 1;
        let order = Order::new(
            order_id,
            self.cart.items().to_vec(),
            subtotal,
            discount,
            OrderStatus::Paid,
            self.email.clone(),
        );

        info!(
            user = %self.email,
            order_id,
            reference = %order.reference(),
            subtotal = %subtotal,
            discount = %discount,
            total = %total,
            items = order.items().len(),
            "Order placed"
        );

        self.orders.push(order.clone());
        self.cart.clear();
        Ok(order)
    }
}

/// Puts back stock taken by a checkout that did not complete.
fn restore_stock(inventory: &mut Inventory, reserved: &[(&str, i64)]) {
    for (name, quantity) in reserved {
        if let Err(err) = inventory.increase_stock(name, *quantity) {
            warn!(product = %name, quantity, error = %err, "Could not restore stock");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
