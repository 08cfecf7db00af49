use linex_matrix::MatrixError;
use thiserror::Error;

use crate::basis::Basis;

/// An error type for the linear algebra engines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// The input matrix is not valid for the engine (ragged, non-square, shape mismatch).
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// QR needs at least as many rows as columns.
    #[error("Matrix needs at least as many rows as columns, got {rows}x{cols}")]
    NotEnoughRows {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A column is a linear combination of the columns before it.
    #[error("Column {column} is linearly dependent on the previous columns")]
    LinearlyDependentColumns {
        /// Zero-based index of the dependent column.
        column: usize,
    },

    /// The determinant is too close to zero for the matrix to be inverted.
    #[error("Basis {basis} is not invertible (determinant {determinant:e} is too close to 0)")]
    Singular {
        /// The basis that failed the check.
        basis: Basis,
        /// The determinant that was computed.
        determinant: f64,
    },

    /// At least one eigenvalue has a non-negligible imaginary part.
    #[error("Some eigenvalues are not real (eigenvalue {index} has imaginary part {imaginary:e})")]
    NonRealSpectrum {
        /// Index of the first offending eigenvalue in solver order.
        index: usize,
        /// Its imaginary part.
        imaginary: f64,
    },

    /// The numerical routine broke down.
    #[error("Numeric computation failed: {0}")]
    ComputationFailed(String),
}
