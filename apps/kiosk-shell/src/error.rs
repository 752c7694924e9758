//! # Shell Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  "add donut"                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog lookup ── CoreError::ProductNotFound ──► ShellError::Core     │
//! │       │                                                 │               │
//! │       ▼                                                 ▼               │
//! │  Session prints "error: Product not found: donut", reads next line     │
//! │                                                                         │
//! │  Only ShellError::Io (stdin/stdout gone) ends the session.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kiosk_core::CoreError;
use thiserror::Error;

/// Errors raised while reading, parsing, or running a shell command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// First word of the line is not a command.
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// Command needs an argument that was not given.
    #[error("'{command}' needs a product name")]
    MissingArgument { command: String },

    /// `action` payload is not valid action JSON.
    #[error("Invalid action: {0}")]
    InvalidAction(#[from] serde_json::Error),

    /// An input line could not be decoded. The stream itself is still fine.
    #[error("Input is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Catalog lookup or validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Bad environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Whether the session has to stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Io(_) | ShellError::Config(_))
    }
}

/// Convenience type alias for Results with ShellError.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let err: ShellError = CoreError::ProductNotFound("donut".to_string()).into();
        assert_eq!(err.to_string(), "Product not found: donut");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::UnknownCommand("buy".to_string()).to_string(),
            "Unknown command: buy (try 'help')"
        );
        assert_eq!(
            ShellError::MissingArgument {
                command: "add".to_string()
            }
            .to_string(),
            "'add' needs a product name"
        );
    }

    #[test]
    fn test_bad_utf8_is_not_fatal() {
        let err: ShellError = String::from_utf8(vec![b'a', 0xff]).unwrap_err().into();
        assert_eq!(err.to_string(), "Input is not valid UTF-8");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_io_is_fatal() {
        let err: ShellError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert!(err.is_fatal());
    }
}
