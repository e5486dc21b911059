//! 1-D fracture mesh.
//!
//! The mesh is pure geometry: a fixed number of equal-size cells along
//! the fracture length, created once at startup and never mutated. All
//! per-cell state lives in the engine; the mesh only answers "where is
//! cell `i`".

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mesh;

pub use error::MeshError;
pub use mesh::{Mesh, INJECTION_CELL};
