//! Error types for editor commands.

use thiserror::Error;

use super::input::Mode;

/// Errors returned by editor commands.
///
/// The editor state is left untouched whenever one of these is returned, so
/// a host may ignore them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The command is not valid in the current state
    #[error("Cannot {operation} in {mode} mode: {reason}")]
    InvalidOperation {
        operation: &'static str,
        mode: Mode,
        reason: &'static str,
    },
}

impl EditorError {
    /// Create an invalid operation error.
    pub fn invalid(operation: &'static str, mode: Mode, reason: &'static str) -> Self {
        Self::InvalidOperation {
            operation,
            mode,
            reason,
        }
    }
}
