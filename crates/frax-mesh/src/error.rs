//! Mesh construction errors.

use std::error::Error;
use std::fmt;

/// Invalid arguments to [`Mesh::new`](crate::Mesh::new).
#[derive(Clone, Debug, PartialEq)]
pub enum MeshError {
    /// Cell count must be at least 1.
    ZeroCellCount,
    /// Fracture length must be positive and finite.
    InvalidLength {
        /// The offending length.
        value: f64,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellCount => write!(f, "cell_count must be at least 1"),
            Self::InvalidLength { value } => {
                write!(f, "length must be positive and finite, got {value}")
            }
        }
    }
}

impl Error for MeshError {}
