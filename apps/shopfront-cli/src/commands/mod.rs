//! CLI command implementations.

pub mod checkout;
pub mod demo;
pub mod inventory;

use clap::Args;

use checkout::LineItemArg;

/// Arguments for the checkout command.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Cart line as NAME=QTY (repeatable), e.g. --item Water=10
    #[arg(short, long = "item", value_name = "NAME=QTY", value_parser = checkout::parse_item, required = true)]
    pub items: Vec<LineItemArg>,
}
