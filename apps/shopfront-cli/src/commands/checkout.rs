//! `shopfront checkout`: build a cart from `--item NAME=QTY` arguments and
//! place one order against the configured inventory.

use serde::Serialize;
use shopfront_core::{CartTotals, Inventory, MockPaymentProcessor, Order};
use tracing::debug;

use super::CheckoutArgs;
use crate::config::AppConfig;
use crate::context::Context;
use crate::error::CliError;
use crate::output::{render_inventory, render_order};

/// A requested cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemArg {
    pub name: String,
    pub quantity: i64,
}

/// Parses `NAME=QTY`. Quantity sign is checked later by the cart.
pub fn parse_item(raw: &str) -> Result<LineItemArg, String> {
    let (name, qty) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QTY, got '{raw}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing product name in '{raw}'"));
    }

    let quantity = qty
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid quantity '{}' for {}", qty.trim(), name))?;

    Ok(LineItemArg {
        name: name.to_string(),
        quantity,
    })
}

/// Result of a successful checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutReport {
    pub cart: CartTotals,
    pub order: Order,
    pub inventory: Inventory,
}

/// Seeds the inventory, fills the cart and places the order.
pub fn execute(config: &AppConfig, items: &[LineItemArg]) -> Result<CheckoutReport, CliError> {
    let mut inventory = config.build_inventory()?;
    let policy = config.discount_policy()?;
    let mut user = config.user();

    for item in items {
        let product = inventory.get(&item.name)?;
        user.cart_mut().add(product, item.quantity)?;
        debug!(product = %item.name, quantity = item.quantity, "Added to cart");
    }

    let cart = user.cart().totals();
    let order = user.place_order_with(&mut inventory, &MockPaymentProcessor, &policy)?;

    Ok(CheckoutReport {
        cart,
        order,
        inventory,
    })
}

pub fn run(ctx: &Context, args: &CheckoutArgs) -> Result<(), CliError> {
    let report = execute(&ctx.config, &args.items)?;

    if ctx.output.is_json() {
        return ctx.output.json(&report);
    }

    ctx.output.success(&format!(
        "Order #{} placed for {}",
        report.order.order_id(),
        ctx.config.customer.name
    ));
    ctx.output.line(&render_order(&report.order, &ctx.config));
    ctx.output.header("Inventory after order");
    ctx.output.line(&render_inventory(&report.inventory, &ctx.config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn item(name: &str, quantity: i64) -> LineItemArg {
        LineItemArg {
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("Water=10").unwrap(), item("Water", 10));
        assert_eq!(parse_item(" Ice = 3 ").unwrap(), item("Ice", 3));
        assert_eq!(parse_item("Ice=-3").unwrap(), item("Ice", -3));

        assert!(parse_item("Water").is_err());
        assert!(parse_item("=4").is_err());
        assert!(parse_item("Water=lots").is_err());
    }

    #[test]
    fn test_execute_places_order() {
        let config = AppConfig::default();
        let report = execute(&config, &[item("Water", 10), item("Chocolate", 30)]).unwrap();

        assert_eq!(report.cart.subtotal.cents(), 12250);
        assert_eq!(report.order.total().cents(), 11025);
        assert_eq!(report.inventory.get("Water").unwrap().quantity(), 10);
    }

    #[test]
    fn test_execute_uses_configured_discount() {
        let mut config = AppConfig::default();
        config.discount.rate_bps = 0;
        let report = execute(&config, &[item("Chocolate", 30)]).unwrap();
        assert!(report.order.discount().is_zero());
    }

    #[test]
    fn test_execute_error_codes() {
        let config = AppConfig::default();

        let err = execute(&config, &[item("Tea", 1)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = execute(&config, &[item("Ice", 25)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = execute(&config, &[item("Ice", 0)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
