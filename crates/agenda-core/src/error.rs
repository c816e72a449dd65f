//! Core error types for agenda-core.
//!
//! Malformed scheduling data never raises: missing or unreadable date
//! fields degrade to "no date" and the affected task simply contributes no
//! occurrences. The only loud failure is a window whose bounds are
//! reversed, which indicates a bug in the calling collaborator.

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for agenda-core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Window bounds are reversed
    #[error("invalid window: start ({start}) is after end ({end})")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
