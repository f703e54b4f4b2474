//! `shopfront inventory`: list the configured stock.

use crate::context::Context;
use crate::error::CliError;
use crate::output::render_inventory;

pub fn run(ctx: &Context) -> Result<(), CliError> {
    let inventory = ctx.config.build_inventory()?;

    if ctx.output.is_json() {
        return ctx.output.json(&inventory);
    }

    ctx.output.header("Inventory");
    ctx.output.line(&render_inventory(&inventory, &ctx.config));
    Ok(())
}
