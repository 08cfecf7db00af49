use linex_linalg::{ChangeOfBasisOptions, EigenOptions, QrOptions, RrefOptions};
use linex_matrix::Precision;

/// Numerical and display settings of an [`crate::Explorer`].
#[derive(Debug, Clone, Default)]
pub struct LinexConfig {
    /// Row reduction parameters.
    pub rref: RrefOptions,
    /// Gram-Schmidt parameters.
    pub qr: QrOptions,
    /// Eigenvalue parameters.
    pub eigen: EigenOptions,
    /// Change-of-basis parameters.
    pub change_of_basis: ChangeOfBasisOptions,
    /// Display rounding of each operation.
    pub display: DisplayPrecision,
}

/// Rounding applied to the results of each operation before they are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrecision {
    /// RREF entries, integers by default.
    pub rref: Precision,
    /// `Q` and `R` entries, integers by default.
    pub qr: Precision,
    /// Eigenvalues, two decimals by default.
    pub eigenvalues: Precision,
    /// Change-of-basis entries, six decimals by default.
    pub change_of_basis: Precision,
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        Self {
            rref: Precision::Integer,
            qr: Precision::Integer,
            eigenvalues: Precision::Decimals(2),
            change_of_basis: Precision::Decimals(6),
        }
    }
}
