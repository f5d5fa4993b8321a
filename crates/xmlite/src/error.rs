//! Error types for xmlite
//!
//! The grammar never fails: malformed markup produces a smaller tree instead.
//! Errors only come from the byte and file entry points.

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    InvalidUtf8 { valid_up_to: usize },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "i/o error"),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "invalid utf-8 after byte {valid_up_to}")
            }
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for xmlite
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::new(ErrorKind::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        })
    }
}

/// Result type alias for xmlite
pub type Result<T> = std::result::Result<T, Error>;
