//! # Product
//!
//! A sellable item. Once added to an [`Inventory`](crate::inventory::Inventory)
//! the inventory owns it exclusively; carts and orders copy what they need
//! by value.

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_price, validate_stock_level};

/// A product available for sale.
///
/// Fields are private so `price >= 0` and `quantity >= 0` hold for the
/// lifetime of the value. Only the inventory adjusts `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique key within an inventory.
    name: String,

    /// Unit price.
    price: Money,

    /// Units currently in stock.
    quantity: i64,

    /// Free-form grouping ("Drinks", "Frozen", ...).
    category: String,
}

impl Product {
    /// Creates a product, rejecting a negative price or quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{Money, Product};
    ///
    /// let water = Product::new("Water", Money::from_cents(100), 20, "Drinks").unwrap();
    /// assert_eq!(water.quantity(), 20);
    ///
    /// assert!(Product::new("Ice", Money::from_cents(-1), 5, "Frozen").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        category: impl Into<String>,
    ) -> CoreResult<Self> {
        validate_price(price)?;
        validate_stock_level(quantity)?;

        Ok(Product {
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True when at least `amount` units are on hand.
    #[inline]
    pub fn can_supply(&self, amount: i64) -> bool {
        self.quantity >= amount
    }

    /// Caller has already validated that the result stays non-negative.
    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 0);
        self.quantity = quantity;
    }
}
