//! `shopfront demo`: the scripted walkthrough. Ten Water and thirty
//! Chocolate go into the cart, the 10% discount kicks in, and the order is
//! paid through the mock processor.

use serde::Serialize;
use shopfront_core::{Inventory, MockPaymentProcessor, Order, ShoppingCart};

use crate::config::AppConfig;
use crate::context::Context;
use crate::error::CliError;
use crate::output::{render_cart, render_inventory, render_order};

/// Cart lines the demo buys.
pub const DEMO_CART: &[(&str, i64)] = &[("Water", 10), ("Chocolate", 30)];

/// Everything the demo shows, before and after checkout.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub cart: ShoppingCart,
    pub inventory_before: Inventory,
    pub order: Order,
    pub inventory_after: Inventory,
    pub order_history: Vec<u32>,
}

pub fn execute(config: &AppConfig) -> Result<DemoReport, CliError> {
    let mut inventory = config.build_inventory()?;
    let policy = config.discount_policy()?;
    let mut user = config.user();

    for (name, quantity) in DEMO_CART {
        user.cart_mut().add(inventory.get(name)?, *quantity)?;
    }

    let cart = user.cart().clone();
    let inventory_before = inventory.clone();
    let order = user.place_order_with(&mut inventory, &MockPaymentProcessor, &policy)?;
    let order_history = user.order_history().iter().map(Order::order_id).collect();

    Ok(DemoReport {
        cart,
        inventory_before,
        order,
        inventory_after: inventory,
        order_history,
    })
}

pub fn run(ctx: &Context) -> Result<(), CliError> {
    let report = execute(&ctx.config)?;

    if ctx.output.is_json() {
        return ctx.output.json(&report);
    }

    let out = &ctx.output;
    out.header(&format!("Cart for {}", ctx.config.customer.name));
    out.line(&render_cart(&report.cart, &ctx.config));

    out.header("Inventory before order");
    out.line(&render_inventory(&report.inventory_before, &ctx.config));

    out.header("Order");
    out.success(&format!("Order #{} placed", report.order.order_id()));
    out.line(&render_order(&report.order, &ctx.config));

    out.header("Inventory after order");
    out.line(&render_inventory(&report.inventory_after, &ctx.config));

    out.header("Order history");
    out.line(&format!("  {:?}", report.order_history));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProductConfig;
    use crate::error::ErrorCode;
    use shopfront_core::OrderStatus;

    #[test]
    fn test_demo_scenario() {
        let report = execute(&AppConfig::default()).unwrap();

        assert_eq!(report.cart.subtotal().cents(), 12250);
        assert_eq!(report.order.discount().cents(), 1225);
        assert_eq!(report.order.total().cents(), 11025);
        assert_eq!(report.order.status(), OrderStatus::Paid);
        assert_eq!(report.inventory_before.get("Water").unwrap().quantity(), 20);
        assert_eq!(report.inventory_after.get("Water").unwrap().quantity(), 10);
        assert_eq!(report.inventory_after.get("Chocolate").unwrap().quantity(), 10);
        assert_eq!(report.order_history, vec![1]);
    }

    #[test]
    fn test_demo_needs_demo_products() {
        let mut config = AppConfig::default();
        config.products = vec![ProductConfig {
            name: "Tea".to_string(),
            price_cents: 450,
            quantity: 10,
            category: "Drinks".to_string(),
        }];

        let err = execute(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
