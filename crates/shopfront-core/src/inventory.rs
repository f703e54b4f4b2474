//! # Inventory
//!
//! In-memory product catalogue with stock bookkeeping.
//!
//! ## Stock Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  add_product(p) ─────────► insert or fully overwrite by name            │
//! │                                                                         │
//! │  increase_stock(n, a) ───► NotFound? ─► a < 0? ─► quantity += a        │
//! │                                                                         │
//! │  decrease_stock(n, a) ───► NotFound? ─► a < 0? ─► short? ─► qty -= a   │
//! │                                                                         │
//! │  has_stock(n, a) ────────► false when absent or short (never an error) │
//! │                                                                         │
//! │  NOTE: A failed operation leaves every quantity unchanged.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing
//! [`SharedInventory`] wraps an inventory in `Arc<Mutex<_>>` for callers that
//! hand the same stock to several actors. Running a whole checkout inside
//! one [`SharedInventory::with_inventory_mut`] call keeps the stock check and
//! the decrement under the same lock.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::product::Product;
use crate::validation::validate_stock_amount;

/// Products keyed by name.
///
/// Listing order is alphabetical by name so reports are stable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    products: BTreeMap<String, Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: BTreeMap::new(),
        }
    }

    /// Adds a product, replacing any existing entry with the same name.
    ///
    /// Quantities are not merged; use [`increase_stock`](Self::increase_stock)
    /// to top up. Returns the replaced product, if any.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        debug!(
            product = %product.name(),
            price = %product.price(),
            quantity = product.quantity(),
            "Product added to inventory"
        );
        self.products.insert(product.name().to_string(), product)
    }

    /// Adds `amount` units to an existing product. Returns the new level.
    ///
    /// A level that would not fit in an `i64` is rejected with the stock
    /// unchanged.
    pub fn increase_stock(&mut self, name: &str, amount: i64) -> CoreResult<i64> {
        let product = self.require_mut(name)?;
        validate_stock_amount(amount)?;

        let level = product
            .quantity()
            .checked_add(amount)
            .ok_or_else(|| ValidationError::Overflow {
                field: "stock level".to_string(),
            })?;
        product.set_quantity(level);

        debug!(product = %name, amount, level, "Stock increased");
        Ok(level)
    }

    /// Removes `amount` units from an existing product. Returns the new level.
    ///
    /// ## Errors
    /// - `ProductNotFound` if `name` is not stocked
    /// - `Validation` if `amount < 0`
    /// - `InsufficientStock` if fewer than `amount` units are on hand
    pub fn decrease_stock(&mut self, name: &str, amount: i64) -> CoreResult<i64> {
        let product = self.require_mut(name)?;
        validate_stock_amount(amount)?;

        if !product.can_supply(amount) {
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available: product.quantity(),
                requested: amount,
            });
        }

        let level = product.quantity() - amount;
        product.set_quantity(level);

        debug!(product = %name, amount, level, "Stock decreased");
        Ok(level)
    }

    /// Deletes a product and returns it.
    pub fn remove_product(&mut self, name: &str) -> CoreResult<Product> {
        let product = self
            .products
            .remove(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        debug!(product = %name, "Product removed from inventory");
        Ok(product)
    }

    /// Looks up a product by name.
    pub fn get(&self, name: &str) -> CoreResult<&Product> {
        self.products
            .get(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    /// True if the product exists and has at least `amount` units.
    pub fn has_stock(&self, name: &str, amount: i64) -> bool {
        self.products
            .get(name)
            .is_some_and(|p| p.can_supply(amount))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    fn require_mut(&mut self, name: &str) -> CoreResult<&mut Product> {
        self.products
            .get_mut(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for product in iter {
            inventory.add_product(product);
        }
        inventory
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inventory[")?;
        for (i, p) in self.products.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} x{} @ {}", p.name(), p.quantity(), p.price())?;
        }
        write!(f, "]")
    }
}

// =============================================================================
// Shared Inventory
// =============================================================================

/// Cloneable handle to an inventory shared between actors.
///
/// ## Why Not RwLock?
/// Nearly every caller mutates stock, and a checkout must hold exclusive
/// access from validation through payment.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inventory: Arc<Mutex<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        SharedInventory {
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Executes a function with read access to the inventory.
    pub fn with_inventory<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&Inventory) -> R,
    {
        let inventory = self
            .inventory
            .lock()
            .map_err(|_| CoreError::Internal("inventory lock poisoned".to_string()))?;
        Ok(f(&inventory))
    }

    /// Executes a function with exclusive write access to the inventory.
    ///
    /// ## Usage
    /// ```rust
    /// use shopfront_core::{Inventory, MockPaymentProcessor, Money, Product, SharedInventory, User};
    ///
    /// let shared = SharedInventory::new(
    ///     [Product::new("Water", Money::from_cents(100), 20, "Drinks").unwrap()]
    ///         .into_iter()
    ///         .collect(),
    /// );
    /// let mut user = User::new("Sina", "sina@g.com", "Altstadt 11, 4600 Wels");
    /// let water = shared.with_inventory(|inv| inv.get("Water").cloned()).unwrap().unwrap();
    /// user.cart_mut().add(&water, 3).unwrap();
    ///
    /// let order = shared
    ///     .with_inventory_mut(|inv| user.place_order(inv, &MockPaymentProcessor))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(order.order_id(), 1);
    /// ```
    pub fn with_inventory_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self
            .inventory
            .lock()
            .map_err(|_| CoreError::Internal("inventory lock poisoned".to_string()))?;
        Ok(f(&mut inventory))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
