//! # Command Error Type
//!
//! Unified error type for cart commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in andaz-cart                             │
//! │                                                                         │
//! │  Command Function ── Result<CartResponse, CliError>                    │
//! │         │                                                               │
//! │         ├── bad --price ────────────► CliError(VALIDATION_ERROR)        │
//! │         ├── StoreError::InvalidItem ► CliError(VALIDATION_ERROR)        │
//! │         └── anything else the store ► CliError(CART_ERROR)              │
//! │             chose to surface                                            │
//! │                                                                         │
//! │  main.rs: prints "error: ..." to stderr, exits with exit_code()        │
//! │           --json prints {"code": ..., "message": ...} instead          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures are not in this list: the store recovers from them
//! and the command still succeeds on the in-memory cart.

use andaz_store::StoreError;
use serde::Serialize;

/// Error returned from cart commands.
///
/// ## Serialization
/// With `--json` this is what gets printed when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Invalid item: name is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Internal error (serialization, etc.)
    Internal,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }

    /// Process exit status for this error.
    ///
    /// Follows the sysexits convention: 65 for bad input data, 70 for
    /// internal software errors.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            ErrorCode::ValidationError => 65,
            ErrorCode::CartError => 1,
            ErrorCode::Internal => 70,
        }
    }
}

/// Converts store errors to command errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidItem(_) | StoreError::InvalidQuantity { .. } => {
                CliError::validation(err.to_string())
            }
            StoreError::StorageUnavailable(_) | StoreError::MalformedData { .. } => {
                // Normally recovered inside the store; surfaced only by try_load
                tracing::error!(error = %err, "Cart storage failed");
                CliError::new(ErrorCode::CartError, err.to_string())
            }
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
