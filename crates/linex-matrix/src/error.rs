use thiserror::Error;

/// An error type for matrix construction and parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A token in the input text is not a finite decimal number.
    ///
    /// Positions are zero-based and count only the non-empty lines of the input.
    #[error("Invalid number '{token}' at row {row}, column {col}")]
    InvalidToken {
        /// Row of the offending token.
        row: usize,
        /// Column of the offending token.
        col: usize,
        /// The token as it appeared in the input.
        token: String,
    },

    /// The input text does not contain a single number.
    #[error("Please enter a valid numeric matrix")]
    EmptyInput,

    /// Rows of the input have different lengths.
    #[error("All rows must have the same number of entries: row {row} has {found}, expected {expected}")]
    RaggedRows {
        /// Index of the first row whose length differs from the first row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The data length does not match the requested shape.
    #[error("Data length ({actual}) does not match the matrix size ({expected})")]
    InvalidShape {
        /// Number of elements implied by the shape.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },

    /// The operation needs a square matrix.
    #[error("Matrix must be square (n x n), got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Two matrices have incompatible shapes for the requested operation.
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Expected shape as `[rows, cols]`.
        expected: [usize; 2],
        /// Actual shape as `[rows, cols]`.
        actual: [usize; 2],
    },
}

impl MatrixError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates a DimensionMismatch error from two shapes.
    pub fn dimension_mismatch(expected: [usize; 2], actual: [usize; 2]) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
