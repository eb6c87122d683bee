//! Error types for the demurrage and detention billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading tariff books or
//! raising invoices.
//!
//! A missing tariff during evaluation is *not* an error: it is a
//! first-class outcome carried on the billing item (see
//! [`crate::models::ChargeOutcome`]), because the rest of the item
//! (timeline and status) is still meaningful and must reach the operator.

use thiserror::Error;

/// The main error type for the billing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use demurrage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/book.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/book.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tariff's tier list violated the schedule invariants.
    #[error("Invalid tariff '{schedule}': {message}")]
    InvalidTariff {
        /// Identifies the offending schedule (carrier and container class).
        schedule: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// An invoice was requested for a billing item that fails the
    /// invoicing preconditions.
    #[error("Invoicing blocked for container '{container_number}': {reason}")]
    InvoiceBlocked {
        /// The container whose charge cannot be invoiced.
        container_number: String,
        /// Why the charge cannot be invoiced.
        reason: String,
    },

    /// The external ledger gateway refused or failed to create the entry.
    #[error("Ledger entry rejected: {message}")]
    LedgerRejected {
        /// A description of the gateway failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
