//! Error types for INI reading and JSON encoding.
//!
//! Value coercion itself has no error channel: every raw string is
//! representable as at least a plain JSON string, so [`crate::Value::infer`]
//! and [`crate::Recorder::add`] are infallible. Errors only arise while
//! reading input text or while writing the final JSON document.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: Failures reading a file or stream
//! - **Syntax Errors**: Malformed INI input, with line/column information
//! - **Encode Errors**: JSON serialization or output failures
//!
//! ## Examples
//!
//! ```rust
//! use ini2json::{parse_str, Error, TypedValues};
//!
//! let result: Result<TypedValues, Error> = parse_str("[unterminated");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//!     // Error messages include line numbers
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting INI to JSON.
///
/// Syntax errors carry line and column information pointing at the
/// offending input.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed INI input
    #[error("syntax error at line {line}, column {col}: {msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
    },

    /// JSON serialization or output failure
    #[error("encode error: {0}")]
    Encode(String),

    /// Generic message, used to attach context to an underlying error
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini2json::Error;
    ///
    /// let err = Error::syntax(10, 5, "unterminated section header");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an encode error from any displayable cause.
    pub fn encode<T: fmt::Display>(msg: T) -> Self {
        Error::Encode(msg.to_string())
    }

    /// Creates an error carrying a plain contextual message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
