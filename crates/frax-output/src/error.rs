//! Error types for result export.

use std::fmt;
use std::io;

/// Errors that can occur while writing results.
#[derive(Debug)]
pub enum OutputError {
    /// An I/O error occurred on the underlying sink.
    Io(io::Error),
    /// A snapshot vector length does not match the mesh cell count.
    CellCountMismatch {
        /// Cells in the mesh.
        expected: usize,
        /// Cells in the snapshot vector.
        found: usize,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CellCountMismatch { expected, found } => {
                write!(
                    f,
                    "snapshot has {found} cells but the mesh has {expected}"
                )
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
