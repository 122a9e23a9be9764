//! Error types for fontdata
//!
//! Provides a unified error type for all buffer, view and stream operations.

use thiserror::Error;

/// Result type alias using FontDataError
pub type Result<T> = std::result::Result<T, FontDataError>;

/// Unified error type for fontdata operations
#[derive(Debug, Error)]
pub enum FontDataError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Access Errors
    // -------------------------------------------------------------------------
    /// `index + span` falls outside the visible range `[0, limit)`
    #[error("Index out of bounds: {span} byte(s) at index {index} exceed limit {limit}")]
    OutOfBounds {
        index: usize,
        span: usize,
        limit: usize,
    },

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Backing store has been closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FontDataError {
    pub(crate) fn out_of_bounds(index: usize, span: usize, limit: usize) -> Self {
        FontDataError::OutOfBounds { index, span, limit }
    }

    /// True for `OutOfBounds`, handy in caller-side matching
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, FontDataError::OutOfBounds { .. })
    }
}

/// Checked `index + span <= limit`, returning the exclusive end on success
pub(crate) fn check_span(index: usize, span: usize, limit: usize) -> Result<usize> {
    match index.checked_add(span) {
        Some(end) if end <= limit => Ok(end),
        _ => Err(FontDataError::out_of_bounds(index, span, limit)),
    }
}
