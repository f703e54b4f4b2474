//! # CLI Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  Command function                                                      │
//! │  Result<T, CliError>                                                   │
//! │         │                                                               │
//! │         ├── ConfigError ─────────► CONFIG_ERROR                         │
//! │         ├── CoreError ───────────► NOT_FOUND / INSUFFICIENT_STOCK / ... │
//! │         └── usage problems ──────► USAGE_ERROR                          │
//! │                                                                         │
//! │  main(): prints `error[CODE]: message`, exits with code.exit_code()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use shopfront_core::{CoreError, ErrorKind};

use crate::config::ConfigError;

/// Error surfaced to the console user.
///
/// ## Serialization
/// With `--json` this is written to stderr as:
/// ```json
/// { "code": "INSUFFICIENT_STOCK", "message": "Insufficient stock for Ice: available 5, requested 25" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad command-line input
    UsageError,

    /// Config file missing, malformed or invalid
    ConfigError,

    /// Negative or non-positive values
    ValidationError,

    /// Unknown product or order
    NotFound,

    /// Insufficient stock
    InsufficientStock,

    /// Checkout with an empty cart
    EmptyCart,

    /// Payment processing error
    PaymentError,

    /// Illegal order status change
    InvalidState,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UsageError => "USAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::PaymentError => "PAYMENT_ERROR",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// Process exit status for this code.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::UsageError => 2,
            ErrorCode::ConfigError => 3,
            ErrorCode::ValidationError | ErrorCode::NotFound => 4,
            ErrorCode::InsufficientStock | ErrorCode::EmptyCart | ErrorCode::InvalidState => 5,
            ErrorCode::PaymentError => 6,
            ErrorCode::Internal => 1,
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::UsageError, message)
    }
}

/// Keeps clap's first line (`error: invalid value ...`) without the prefix;
/// the usage block that follows is dropped.
impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first).trim();
        CliError::usage(message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Converts core errors to console errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::InvalidArgument => ErrorCode::ValidationError,
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::InsufficientStock => ErrorCode::InsufficientStock,
            ErrorKind::EmptyCart => ErrorCode::EmptyCart,
            ErrorKind::PaymentFailure => ErrorCode::PaymentError,
            ErrorKind::InvalidState => ErrorCode::InvalidState,
            ErrorKind::Internal => {
                tracing::error!("Internal error: {}", err);
                ErrorCode::Internal
            }
        };
        CliError::new(code, err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}
