//! # Shell Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Menu command                                                          │
//! │  ShellResult<()>                                                       │
//! │       │                                                                 │
//! │       ├── Bad typed input?  ── ValidationError ──┐                     │
//! │       ├── Rule rejected?    ── CoreError ────────┤                     │
//! │       ├── Database failed?  ── DbError ──────────┼──► ShellError       │
//! │       └── stdin/stdout?     ── io::Error ────────┘        │            │
//! │                                                           ▼            │
//! │                                      "Error: Item not found: 7"        │
//! │                                      menu shown again                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal details (SQL text, constraint names) are logged, not printed.

use std::fmt;
use std::io;

use canteen_core::{CoreError, ValidationError};
use canteen_db::DbError;
use thiserror::Error;

/// Error shown to the operator when a command fails.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ShellError {
    /// Machine-readable category.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Referenced id does not exist.
    NotFound,

    /// Typed input could not be parsed or broke a rule.
    ValidationError,

    /// Database operation failed.
    DatabaseError,

    /// A business rule rejected the operation.
    BusinessLogic,

    /// Reading input or writing output failed.
    Io,

    /// Standard input reached end of file.
    InputClosed,

    /// Anything else.
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::Io => "IO",
            ErrorCode::InputClosed => "INPUT_CLOSED",
            ErrorCode::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ShellError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ShellError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::Internal, message)
    }

    /// Standard input was closed while a prompt was waiting.
    pub fn input_closed() -> Self {
        ShellError::new(ErrorCode::InputClosed, "Input closed")
    }

    /// Whether the shell should stop instead of showing the menu again.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::InputClosed | ErrorCode::Io)
    }
}

/// Converts database errors to shell errors.
impl From<DbError> for ShellError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ShellError::not_found(&entity, id),
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ShellError::new(
                    ErrorCode::BusinessLogic,
                    "The record is referenced by recorded sales",
                )
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ShellError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ShellError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ShellError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ShellError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                ShellError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Domain(e) => ShellError::from(e),
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ShellError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to shell errors.
impl From<CoreError> for ShellError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ShellError::not_found("Item", id),
            CoreError::NegativePrice { .. } | CoreError::TotalOverflow { .. } => {
                ShellError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => ShellError::from(e),
        }
    }
}

/// Converts validation errors to shell errors.
impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        ShellError::validation(err.to_string())
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::new(ErrorCode::Io, err.to_string())
    }
}

/// Result type for shell commands.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;
    use canteen_core::Money;

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err = ShellError::from(DbError::not_found("Item", 7));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Item not found: 7");
    }

    #[test]
    fn test_negative_price_is_business_logic() {
        let err = ShellError::from(DbError::Domain(CoreError::NegativePrice {
            original: Money::from_cents(10_000),
            discounted: Money::from_cents(-5_000),
        }));
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert!(err.message.contains("negative"));
    }

    #[test]
    fn test_total_overflow_is_business_logic() {
        let err = ShellError::from(DbError::Domain(CoreError::TotalOverflow {
            item_id: 3,
            quantity: 20_000_000_000_000_000,
        }));
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert!(err.message.contains("too large"));
    }

    #[test]
    fn test_query_details_are_not_shown() {
        let err = ShellError::from(DbError::QueryFailed("no such table: itmes".to_string()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("itmes"));
    }

    #[test]
    fn test_validation_message_is_kept() {
        let err = ShellError::from(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("quantity"));
    }

    #[test]
    fn test_fatal_codes() {
        assert!(ShellError::input_closed().is_fatal());
        assert!(!ShellError::validation("bad").is_fatal());
    }
}
