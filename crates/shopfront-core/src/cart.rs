//! # Shopping Cart
//!
//! A per-user collection of selected products and quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add(product, q) ─────────► new line, or existing line qty += q        │
//! │                             (unit price frozen at the first add)        │
//! │                                                                         │
//! │  remove(name, None) ──────► line deleted                               │
//! │  remove(name, Some(q)) ───► q >= qty ? line deleted : qty -= q          │
//! │                                                                         │
//! │  clear() ─────────────────► all lines dropped (after checkout)          │
//! │                                                                         │
//! │  subtotal() ──────────────► Σ unit_price × quantity (0 when empty)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::product::Product;
use crate::validation::validate_cart_quantity;

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product_name`: reference to the inventory entry by name
/// - `unit_price`: frozen copy of the product price at the time of the
///   first add. Later price changes in the inventory do not reach the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub product_name: String,

    pub unit_price: Money,

    /// Always > 0 while the line is in a cart.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line from a product, freezing its current price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_name` (adding the same product again
///   increases quantity)
/// - Every line has quantity > 0; anything that would reach zero removes the
///   line instead
/// - `items()` yields lines in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingCart {
    items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of a product.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: rejected with a validation error, cart unchanged
    /// - Product already in cart: quantity accumulates, unit price is kept
    /// - Product not in cart: new line at the product's current price
    /// - A line quantity, total quantity or subtotal that would not fit in an
    ///   `i64` is rejected, cart unchanged
    pub fn add(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_cart_quantity(quantity)?;

        let pos = self
            .items
            .iter()
            .position(|i| i.product_name == product.name());

        let (unit_price, line_quantity) = match pos {
            Some(pos) => {
                let item = &self.items[pos];
                let line_quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| overflow("cart quantity"))?;
                (item.unit_price, line_quantity)
            }
            None => (product.price(), quantity),
        };
        self.ensure_totals_fit(pos, unit_price, line_quantity)?;

        match pos {
            Some(pos) => {
                self.items[pos].quantity = line_quantity;
                debug!(product = %product.name(), quantity = line_quantity, "Cart line increased");
            }
            None => {
                self.items.push(CartItem::from_product(product, quantity));
                debug!(product = %product.name(), quantity, "Cart line added");
            }
        }
        Ok(())
    }

    /// Checks that setting line `replacing` (or a new line) to `quantity` at
    /// `unit_price` keeps `subtotal()` and `total_quantity()` representable.
    ///
    /// Prices and quantities are never negative, so the running sums only
    /// grow and a checked sum is exact.
    fn ensure_totals_fit(
        &self,
        replacing: Option<usize>,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<()> {
        let mut subtotal = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| overflow("cart subtotal"))?;
        let mut total_quantity = quantity;

        for (idx, item) in self.items.iter().enumerate() {
            if Some(idx) == replacing {
                continue;
            }
            subtotal = subtotal
                .checked_add(item.line_total())
                .ok_or_else(|| overflow("cart subtotal"))?;
            total_quantity = total_quantity
                .checked_add(item.quantity)
                .ok_or_else(|| overflow("cart quantity"))?;
        }
        Ok(())
    }

    /// Adds a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> CoreResult<()> {
        self.add(product, 1)
    }

    /// Removes a line entirely, or decreases its quantity.
    ///
    /// ## Behavior
    /// - Product not in cart: no-op
    /// - `quantity` is `None` or >= the line quantity: line deleted
    /// - Otherwise: line quantity decreased
    /// - `Some(q)` with `q <= 0`: rejected with a validation error
    pub fn remove(&mut self, product_name: &str, quantity: Option<i64>) -> CoreResult<()> {
        if let Some(q) = quantity {
            validate_cart_quantity(q)?;
        }

        let Some(pos) = self
            .items
            .iter()
            .position(|i| i.product_name == product_name)
        else {
            return Ok(());
        };

        match quantity {
            Some(q) if q < self.items[pos].quantity => {
                self.items[pos].quantity -= q;
                debug!(product = %product_name, quantity = self.items[pos].quantity, "Cart line decreased");
            }
            _ => {
                self.items.remove(pos);
                debug!(product = %product_name, "Cart line removed");
            }
        }
        Ok(())
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up a line by product name.
    pub fn get(&self, product_name: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_name == product_name)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ line totals. Zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Summary for reports.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

fn overflow(field: &str) -> CoreError {
    ValidationError::Overflow {
        field: field.to_string(),
    }
    .into()
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cart[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{} x{} @ {}",
                item.product_name, item.quantity, item.unit_price
            )?;
        }
        write!(f, "] subtotal {}", self.subtotal())
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
}

impl From<&ShoppingCart> for CartTotals {
    fn from(cart: &ShoppingCart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
