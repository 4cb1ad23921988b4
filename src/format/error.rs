//! Error types for label file operations.

use thiserror::Error;

/// Errors that can occur while reading or writing label files.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that does not decompose into a valid box
    #[error("Line {line}: {reason} (got '{content}')")]
    Parse {
        /// 1-based line number, or 0 for a standalone line
        line: usize,
        /// The offending line, trimmed
        content: String,
        /// What was wrong with it
        reason: String,
    },
}

impl FormatError {
    /// Create a parse error for a line.
    pub fn parse(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Attach a line number to a parse error produced for a standalone line.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse {
                content, reason, ..
            } => Self::Parse {
                line,
                content,
                reason,
            },
            other => other,
        }
    }

    /// Check if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
