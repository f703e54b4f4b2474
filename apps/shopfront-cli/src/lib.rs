//! # Shopfront Console Driver
//!
//! Thin command-line front end over `shopfront-core`.
//!
//! ## Module Organization
//! ```text
//! shopfront_cli/
//! ├── lib.rs          ◄─── You are here (arg parsing, logging, dispatch)
//! ├── config.rs       ◄─── AppConfig: file + environment + defaults
//! ├── context.rs      ◄─── Config + output bundle handed to commands
//! ├── output.rs       ◄─── Text/JSON rendering
//! ├── error.rs        ◄─── CliError with stable codes and exit statuses
//! └── commands/
//!     ├── demo.rs     ◄─── Scripted walkthrough
//!     ├── checkout.rs ◄─── Cart from --item NAME=QTY
//!     └── inventory.rs◄─── Stock listing
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr, `RUST_LOG` aware)
//! 3. Load configuration
//! 4. Run the command, translate failures into `error[CODE]` + exit status

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::CheckoutArgs;
use context::Context;
use error::CliError;
use output::Output;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn,shopfront=info";

/// Shopfront - online shopping domain demo
#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the scripted shopping walkthrough
    Demo,

    /// Place one order from --item NAME=QTY lines
    Checkout(CheckoutArgs),

    /// List the configured inventory
    Inventory,
}

/// Parses arguments, runs the command and returns the process exit code.
pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            let json = std::env::args().any(|arg| arg == "--json");
            let err = CliError::from(err);
            Output::new(json).error(&err);
            return Ok(ExitCode::from(err.code.exit_code()));
        }
    };
    init_tracing(cli.verbose)?;

    let output = Output::new(cli.json);
    match dispatch(&cli, output.clone()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            output.error(&err);
            Ok(ExitCode::from(err.code.exit_code()))
        }
    }
}

/// Runs a parsed command.
pub fn dispatch(cli: &Cli, output: Output) -> Result<(), CliError> {
    let ctx = Context::load(cli.config.as_deref(), output)?;
    info!(command = ?cli.command, customer = %ctx.config.customer.email, "Running command");

    match &cli.command {
        Commands::Demo => commands::demo::run(&ctx),
        Commands::Checkout(args) => commands::checkout::run(&ctx, args),
        Commands::Inventory => commands::inventory::run(&ctx),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront_core=trace` - Trace the domain crate only
/// - `--verbose` - Same as `RUST_LOG=info,shopfront=debug`
/// - Default: warnings, plus info from shopfront crates
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("info,shopfront=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_checkout_items() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "--json",
            "checkout",
            "--item",
            "Water=10",
            "-i",
            "Chocolate=30",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Checkout(args) => {
                assert_eq!(args.items.len(), 2);
                assert_eq!(args.items[1].name, "Chocolate");
                assert_eq!(args.items[1].quantity, 30);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_checkout_requires_items() {
        assert!(Cli::try_parse_from(["shopfront", "checkout"]).is_err());
        assert!(Cli::try_parse_from(["shopfront", "checkout", "--item", "Water"]).is_err());
    }

    #[test]
    fn test_bad_item_is_usage_error() {
        let err = Cli::try_parse_from(["shopfront", "checkout", "--item", "Water"]).unwrap_err();
        let err = CliError::from(err);

        assert_eq!(err.code, error::ErrorCode::UsageError);
        assert_eq!(err.code.exit_code(), 2);
        assert!(err.message.contains("NAME=QTY"), "message: {}", err.message);
        assert!(!err.message.contains('\n'));
    }

    #[test]
    fn test_dispatch_reports_config_errors() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "--config",
            "/nonexistent/shopfront.toml",
            "inventory",
        ])
        .unwrap();

        let err = dispatch(&cli, Output::new(true)).unwrap_err();
        assert_eq!(err.code, error::ErrorCode::ConfigError);
        assert_eq!(err.code.exit_code(), 3);
    }
}
