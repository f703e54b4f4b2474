//! Output formatting for the CLI.
//!
//! Plain-text reports go to stdout, or a single JSON document with `--json`.
//! Errors always go to stderr.

use console::style;
use serde::Serialize;
use shopfront_core::{Inventory, Order, ShoppingCart};

use crate::config::AppConfig;
use crate::error::{CliError, ErrorCode};

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a value as pretty JSON (only in JSON mode).
    pub fn json<T: Serialize>(&self, value: &T) -> Result<(), CliError> {
        if !self.json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| CliError::new(ErrorCode::Internal, e.to_string()))?;
        println!("{}", text);
        Ok(())
    }

    /// Print an error to stderr.
    pub fn error(&self, err: &CliError) {
        if self.json {
            match serde_json::to_string(err) {
                Ok(text) => eprintln!("{}", text),
                Err(_) => eprintln!("{}", err),
            }
            return;
        }
        eprintln!("{}", style(err.to_string()).red());
    }
}

// =============================================================================
// Renderers
// =============================================================================

/// One line per cart entry plus the subtotal.
pub fn render_cart(cart: &ShoppingCart, config: &AppConfig) -> String {
    if cart.is_empty() {
        return "  (empty)".to_string();
    }
    let mut out = String::new();
    for item in cart.items() {
        out.push_str(&format!(
            "  {:<12} {:>4} x {:>9} = {:>10}\n",
            item.product_name,
            item.quantity,
            config.format_money(item.unit_price),
            config.format_money(item.line_total()),
        ));
    }
    out.push_str(&format!(
        "  {:<12} {:>28}",
        "Subtotal",
        config.format_money(cart.subtotal())
    ));
    out
}

/// One line per product, in name order.
pub fn render_inventory(inventory: &Inventory, config: &AppConfig) -> String {
    if inventory.is_empty() {
        return "  (no products)".to_string();
    }
    inventory
        .products()
        .map(|p| {
            format!(
                "  {:<12} {:<10} {:>5} in stock @ {}",
                p.name(),
                p.category(),
                p.quantity(),
                config.format_money(p.price()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Order summary block.
pub fn render_order(order: &Order, config: &AppConfig) -> String {
    [
        format!("  Order #{} ({})", order.order_id(), order.reference()),
        format!("  Status  : {}", order.status()),
        format!("  Subtotal: {}", config.format_money(order.subtotal())),
        format!("  Discount: {}", config.format_money(order.discount())),
        format!("  Total   : {}", config.format_money(order.total())),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::MockPaymentProcessor;

    #[test]
    fn test_render_cart() {
        let config = AppConfig::default();
        let inventory = config.build_inventory().unwrap();
        let mut cart = ShoppingCart::new();
        assert_eq!(render_cart(&cart, &config), "  (empty)");

        cart.add(inventory.get("Water").unwrap(), 10).unwrap();
        let text = render_cart(&cart, &config);
        assert!(text.contains("Water"));
        assert!(text.contains("$10.00"));
        assert!(text.ends_with("$10.00"));
    }

    #[test]
    fn test_render_inventory_lists_every_product() {
        let config = AppConfig::default();
        let inventory = config.build_inventory().unwrap();
        let text = render_inventory(&inventory, &config);

        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().contains("Chocolate"));
        assert!(render_inventory(&Inventory::new(), &config).contains("no products"));
    }

    #[test]
    fn test_render_order() {
        let config = AppConfig::default();
        let mut inventory = config.build_inventory().unwrap();
        let mut user = config.user();
        user.cart_mut().add(inventory.get("Water").unwrap(), 10).unwrap();
        user.cart_mut()
            .add(inventory.get("Chocolate").unwrap(), 30)
            .unwrap();
        let order = user.place_order(&mut inventory, &MockPaymentProcessor).unwrap();

        let text = render_order(&order, &config);
        assert!(text.contains("Order #1"));
        assert!(text.contains("Status  : PAID"));
        assert!(text.contains("Discount: $12.25"));
        assert!(text.contains("Total   : $110.25"));
    }
}
