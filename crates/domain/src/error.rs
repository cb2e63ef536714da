//! Common error types used across the workspace.
//!
//! Only construction and parsing can fail. Runtime device operations never
//! return errors: out-of-range writes are dropped and gated operations
//! report through the console.

use crate::command::UnknownCommandError;

/// Top-level error for the smarthome workspace.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    /// A domain invariant was violated while building a value.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A command name did not match any known operation.
    #[error("unknown command")]
    UnknownCommand(#[from] UnknownCommandError),
}

/// Reasons a device record can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The device name is empty or only whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// The device category is empty or only whitespace.
    #[error("category must not be empty")]
    EmptyCategory,
}
