//! Error handling for PanelKit.
//!
//! Geometry generation is pure and infallible over a clamped parameter
//! snapshot, so errors only arise at the I/O boundary: parameter files and
//! vector export. All error types use `thiserror`.

use thiserror::Error;

/// Top-level PanelKit error.
#[derive(Error, Debug)]
pub enum Error {
    /// File read/write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter file could not be parsed.
    #[error("Invalid parameter file: {0}")]
    ParamsFormat(#[from] serde_json::Error),
}

/// Convenience result type for PanelKit operations.
pub type Result<T> = std::result::Result<T, Error>;
