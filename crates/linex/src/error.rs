use linex_linalg::LinalgError;
use linex_matrix::MatrixError;
use thiserror::Error;

/// Classification of a failed request, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The text could not be read as numbers.
    Parse,
    /// Rows have different lengths.
    RaggedRows,
    /// A square matrix was required.
    NotSquare,
    /// Shapes are incompatible with the operation.
    DimensionMismatch,
    /// A QR input column depends on the previous ones.
    LinearlyDependentColumns,
    /// A basis cannot be inverted.
    Singular,
    /// Some eigenvalues are complex.
    NonRealSpectrum,
    /// The numerical routine broke down.
    ComputationFailed,
}

impl ErrorKind {
    /// A short message for the user.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Parse => "Please enter a valid numeric matrix.",
            ErrorKind::RaggedRows => {
                "Invalid matrix input. Ensure all rows have the same number of numbers."
            }
            ErrorKind::NotSquare => "Matrix must be square (n x n).",
            ErrorKind::DimensionMismatch => "The matrix dimensions do not fit this operation.",
            ErrorKind::LinearlyDependentColumns => {
                "The columns are linearly dependent, so no QR factorization exists."
            }
            ErrorKind::Singular => "One of the bases is not invertible (determinant is about 0).",
            ErrorKind::NonRealSpectrum => "Some eigenvalues are not real.",
            ErrorKind::ComputationFailed => "Numeric computation failed.",
        }
    }
}

/// An error type for explorer requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinexError {
    /// One of the text inputs could not be turned into a matrix.
    #[error("{field}: {source}")]
    Input {
        /// Name of the input field.
        field: &'static str,
        /// The underlying parse or shape error.
        #[source]
        source: MatrixError,
    },

    /// The engine rejected the matrix or failed.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

impl LinexError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinexError::Input { source, .. } => matrix_error_kind(source),
            LinexError::Linalg(err) => match err {
                LinalgError::Matrix(source) => matrix_error_kind(source),
                LinalgError::NotEnoughRows { .. } => ErrorKind::DimensionMismatch,
                LinalgError::LinearlyDependentColumns { .. } => {
                    ErrorKind::LinearlyDependentColumns
                }
                LinalgError::Singular { .. } => ErrorKind::Singular,
                LinalgError::NonRealSpectrum { .. } => ErrorKind::NonRealSpectrum,
                LinalgError::ComputationFailed(_) => ErrorKind::ComputationFailed,
            },
        }
    }

    /// The short user-facing message of the error kind.
    pub fn message(&self) -> &'static str {
        self.kind().message()
    }
}

fn matrix_error_kind(err: &MatrixError) -> ErrorKind {
    match err {
        MatrixError::InvalidToken { .. } | MatrixError::EmptyInput => ErrorKind::Parse,
        MatrixError::RaggedRows { .. } => ErrorKind::RaggedRows,
        MatrixError::NotSquare { .. } => ErrorKind::NotSquare,
        MatrixError::InvalidShape { .. } | MatrixError::DimensionMismatch { .. } => {
            ErrorKind::DimensionMismatch
        }
    }
}
