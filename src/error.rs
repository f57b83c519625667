//! XPath Builder Error Types
//!
//! Core error types for the fallible parts of expression building.

use std::error::Error;
use std::fmt;

/// XPath building error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied input the builder cannot turn into well-formed XPath
    InvalidArgument,
}

/// Main XPath builder error type
#[derive(Debug, Clone)]
pub struct XPathError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for XPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XPath Builder Error: {}", self.message)
    }
}

impl Error for XPathError {}

/// Result type for XPath builder operations
pub type XPathResult<T> = Result<T, XPathError>;

impl XPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg.into())
    }
}
