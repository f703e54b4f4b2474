//! # shopfront-core: Pure Shopping Domain for Shopfront
//!
//! This crate contains the online-shopping domain model: products, stock,
//! carts, discounts, payments and orders, with checkout orchestration on
//! top. It performs no I/O; the console driver owns all output.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                shopfront-cli (console driver)                   │   │
//! │  │        config ──► seed inventory ──► cart ──► report            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   cart    │  │  payment  │  │   user    │  │   │
//! │  │   │  Product  │  │ CartItem  │  │ discount  │  │ checkout  │  │   │
//! │  │   │  stock    │  │ subtotal  │  │   order   │  │ history   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PRINTING • INTEGER MONEY                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] / [`inventory`] - Catalogue and stock levels
//! - [`cart`] - Shopping cart lines and subtotal
//! - [`discount`] - Pluggable discount policies
//! - [`payment`] - Payment processor boundary (mock included)
//! - [`order`] - Order snapshot and status lifecycle
//! - [`user`] - User, order history and checkout
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Inventory, MockPaymentProcessor, Money, Product, User};
//!
//! let mut inventory = Inventory::new();
//! inventory.add_product(Product::new("Ice", Money::from_cents(250), 5, "Frozen").unwrap());
//!
//! let mut user = User::new("Sina", "sina@g.com", "Altstadt 11, 4600 Wels");
//! user.cart_mut().add(inventory.get("Ice").unwrap(), 25).unwrap();
//!
//! // Only 5 in stock: rejected before anything is decremented.
//! assert!(user.place_order(&mut inventory, &MockPaymentProcessor).is_err());
//! assert_eq!(inventory.get("Ice").unwrap().quantity(), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod inventory;
pub mod money;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartItem, CartTotals, ShoppingCart};
pub use discount::{DiscountPolicy, NoDiscount, ThresholdDiscount};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use inventory::{Inventory, SharedInventory};
pub use money::Money;
pub use order::{Order, OrderStatus};
pub use payment::{MockPaymentProcessor, PaymentProcessor};
pub use product::Product;
pub use user::User;
