//! Error types for onevone core.

use std::fmt;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Logging setup errors.
#[derive(Debug)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    InvalidFilter(String),
    /// A global subscriber was already installed by someone else.
    AlreadyInitialized,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "Invalid log filter: {msg}"),
            Self::AlreadyInitialized => write!(f, "A global tracing subscriber is already set"),
        }
    }
}

impl std::error::Error for LoggingError {}
