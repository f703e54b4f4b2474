//! # Shopfront Console Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    shopfront_cli::run()
}
