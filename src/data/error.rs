//! Errors at the persistence boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for persistence operations.
pub type DataResult<T> = Result<T, DataError>;

/// Anything that can go wrong reading or writing store files. The engine
/// core never produces these; only the `data` module does I/O.
#[derive(Debug, Error)]
pub enum DataError {
    /// File could not be read or written
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or not the expected shape
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// Document parsed but contained no usable records
    #[error("no games found in {}", path.display())]
    Empty { path: PathBuf },
}
