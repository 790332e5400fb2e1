//! Centralized error handling for the rental analysis pipeline.
//!
//! Every stage returns [`Result<T>`], whose error type is [`RentError`].
//! Errors are fatal for the run: nothing is retried and there is no
//! partial-success mode.
//!
//! ## Conversions
//!
//! `From` impls let the `?` operator lift I/O, Polars and GUI errors:
//!
//! ```no_run
//! use rent_analysis::error::Result;
//! use std::fs;
//!
//! fn read_export(path: &str) -> Result<String> {
//!     let content = fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! ## Context
//!
//! [`ResultExt`] adds `.context()` to any result whose error converts into
//! [`RentError`]:
//!
//! ```no_run
//! use rent_analysis::error::ResultExt as _;
//! use std::fs;
//!
//! fn load() -> rent_analysis::error::Result<String> {
//!     fs::read_to_string("istanbul_rent_analysis.csv").context("Failed to read export")
//! }
//! ```

use std::fmt;

/// Main error type for rental analysis operations.
#[derive(Debug)]
pub enum RentError {
    /// I/O errors (export file, log sink, etc.)
    Io(std::io::Error),

    /// Data processing errors (Polars frames, column types, etc.)
    DataProcessing(String),

    /// A room spec that is not of the form "A+B" with two integer parts
    InvalidRoomSpec { spec: String },

    /// Listing-level validation issues, raised in strict mode only
    Validation(Vec<String>),

    /// Plot window could not be created or crashed
    Plot(String),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for RentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::InvalidRoomSpec { spec } => {
                write!(f, "Invalid room spec '{spec}': expected the form A+B")
            }
            Self::Validation(issues) => {
                write!(f, "Validation failed ({} issues): {}", issues.len(), issues.join("; "))
            }
            Self::Plot(msg) => write!(f, "Plot error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RentError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataProcessing(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for RentError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<eframe::Error> for RentError {
    fn from(err: eframe::Error) -> Self {
        Self::Plot(err.to_string())
    }
}

/// Result type alias for rental analysis operations.
pub type Result<T> = std::result::Result<T, RentError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RentError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: RentError = e.into();
            RentError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: RentError = e.into();
            RentError::Other(format!("{}: {}", f(), err))
        })
    }
}
