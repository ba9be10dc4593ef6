//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
///
/// Unreadable files also surface as [`Parse`](LutError::Parse): the
/// loaders fold open failures into the same human-readable message
/// stream as header and size-line errors.
#[derive(Debug, Error)]
pub enum LutError {
    /// Structural parse error when loading LUT files (unreadable file,
    /// bad header, bad size line). Record-level problems never surface
    /// here; malformed data lines are skipped by the loaders.
    #[error("parse error: {0}")]
    Parse(String),
}
