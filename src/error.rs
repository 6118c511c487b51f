use std::fmt;

use thiserror::Error as ThisError;

use crate::types::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceReadFailure,
    StructuralParseError,
    TypeMismatch,
    NodeNotFound,
    NumericConversionFailure,
}

/// Position of the cursor when a structural error was raised.
///
/// `offset` is a byte offset into the buffered source; `line` and `column`
/// are 1-based and count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("read failed: {message}")]
    SourceReadFailure { message: String },

    #[error("{message} at {location}")]
    StructuralParseError { message: String, location: Location },

    #[error("expected {expected} node, found {found}")]
    TypeMismatch { expected: NodeKind, found: NodeKind },

    #[error("node not found: {path:?}")]
    NodeNotFound { path: String },

    #[error("cannot convert {raw:?}: {message}")]
    NumericConversionFailure { raw: String, message: String },
}

impl Error {
    pub fn source_read(message: impl Into<String>) -> Self {
        Error::SourceReadFailure {
            message: message.into(),
        }
    }

    pub fn structural(message: impl Into<String>, location: Location) -> Self {
        Error::StructuralParseError {
            message: message.into(),
            location,
        }
    }

    pub fn type_mismatch(expected: NodeKind, found: NodeKind) -> Self {
        Error::TypeMismatch { expected, found }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Error::NodeNotFound { path: path.into() }
    }

    pub fn numeric(raw: impl Into<String>, message: impl fmt::Display) -> Self {
        Error::NumericConversionFailure {
            raw: raw.into(),
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SourceReadFailure { .. } => ErrorKind::SourceReadFailure,
            Error::StructuralParseError { .. } => ErrorKind::StructuralParseError,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::NodeNotFound { .. } => ErrorKind::NodeNotFound,
            Error::NumericConversionFailure { .. } => ErrorKind::NumericConversionFailure,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            Error::StructuralParseError { location, .. } => Some(*location),
            _ => None,
        }
    }
}
