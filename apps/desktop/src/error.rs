//! # UI Error Type
//!
//! The error a command hands back to the window for display.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order button                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commands::order::place_order ── Result<CommandOutcome, UiError>        │
//! │       │                                                                 │
//! │       ├── ValidationError::NoCrustSelected ──┐                          │
//! │       ├── ValidationError::NoToppingSelected ┼──► UiError ──► Dialog    │
//! │       └── CoreError ─────────────────────────┘                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use pizza_core::{CoreError, ValidationError};

/// Error shown to the user in a blocking message dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct UiError {
    /// Machine-readable error code, used for log fields
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for the message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The selection is incomplete; the user can fix it and retry
    Validation,

    /// Anything else
    Internal,
}

impl UiError {
    /// Creates a new UI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::Validation
    }
}

impl From<ValidationError> for UiError {
    fn from(err: ValidationError) -> Self {
        UiError::validation(err.to_string())
    }
}

impl From<CoreError> for UiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(inner) => inner.into(),
            other => UiError::internal(other.to_string()),
        }
    }
}
