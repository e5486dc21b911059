//! CSV result export for Frax simulation runs.
//!
//! Flattens the per-step snapshot history into long-format rows, one
//! per (step, cell) pair, suitable for plotting tools and spreadsheet
//! import.
//!
//! # Format
//!
//! ```text
//! x,time,width,pressure
//! 0,1,0.0012,5034.2
//! 5,1,0,5000
//! ...
//! ```
//!
//! `x` is the cell-centre position in metres, `time` the step start
//! time in seconds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod writer;

pub use error::OutputError;
pub use writer::CsvWriter;
