//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Order form presence checks                     │
//! │                                                                         │
//! │  desktop app errors (apps/desktop)                                     │
//! │  └── UiError          - What the message dialog shows                  │
//! │                                                                         │
//! │  Flow: ValidationError → UiError → blocking message dialog             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both validation failures are recoverable: the user fixes the selection
//! and presses Order again. Nothing is retried automatically.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A menu option name did not match any crust, size or topping.
    #[error("Unknown {kind} option: {value}")]
    UnknownOption { kind: &'static str, value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Why an order could not be priced.
///
/// The messages are the exact text of the blocking dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No crust radio button is selected.
    #[error("Please select a crust type.")]
    NoCrustSelected,

    /// A crust is selected but every topping checkbox is clear.
    #[error("Please select at least one topping.")]
    NoToppingSelected,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
