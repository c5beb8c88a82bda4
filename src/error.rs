//! Error types for repage library.

use std::io;
use thiserror::Error;

/// Result type alias for repage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during aggregation, pagination and navigation.
///
/// An empty document is not an error (pagination yields zero pages), and an
/// anchor that cannot be resolved is reported as `None` by the locator.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading block sources.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The layout budget cannot drive a pagination run.
    #[error("Invalid layout budget: {0}")]
    InvalidBudget(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
