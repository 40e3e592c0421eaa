//! # Error Module
//!
//! Unified error type for every stage of a toolcheck run. The default run
//! never produces one for well-formed streams; errors only surface for
//! broken stdin/stdout or when the strict input policy rejects a line.

use std::fmt;
use std::io;

// -----------------------------------------------------------------------------
// ERROR KIND — Failure Classification
// -----------------------------------------------------------------------------

/// Classifies what went wrong during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading stdin or writing stdout failed.
    Io,
    /// Input was rejected by the strict age policy.
    Input,
    /// Checked arithmetic overflowed or divided by zero.
    Arithmetic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io => write!(f, "IoError"),
            ErrorKind::Input => write!(f, "InputError"),
            ErrorKind::Arithmetic => write!(f, "ArithmeticError"),
        }
    }
}

// -----------------------------------------------------------------------------
// TOOLCHECK ERROR — Unified Error Type
// -----------------------------------------------------------------------------

/// The single error type returned by the console, the checks and the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolcheckError {
    /// Which kind of failure this is.
    pub kind: ErrorKind,
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl ToolcheckError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    #[inline]
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    #[inline]
    pub fn arithmetic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Arithmetic, message)
    }
}

impl fmt::Display for ToolcheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ToolcheckError {}

impl From<io::Error> for ToolcheckError {
    fn from(err: io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Convenience type alias for Results throughout toolcheck.
pub type ToolcheckResult<T> = std::result::Result<T, ToolcheckError>;
