#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the matrix module.
pub mod error;

/// Dense matrix type.
pub mod matrix;

/// Text to matrix parsing.
pub mod parser;

/// Display rounding policies.
pub mod precision;

pub use crate::error::MatrixError;
pub use crate::matrix::{Matrix, MatrixDisplay};
pub use crate::parser::{parse_matrix, parse_rows};
pub use crate::precision::Precision;
