#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Change-of-basis matrices, determinant and inverse.
pub mod basis;

/// Eigenvalue extraction.
pub mod eigen;

/// Error types for the linalg module.
pub mod error;

/// QR factorization with Gram-Schmidt.
pub mod qr;

/// Reduced row-echelon form.
pub mod rref;

/// Conversions between [`linex_matrix::Matrix`] and faer matrices.
pub mod utils;

pub use crate::basis::{change_of_basis, Basis, ChangeOfBasis, ChangeOfBasisOptions};
pub use crate::eigen::{eigenvalues, EigenOptions};
pub use crate::error::LinalgError;
pub use crate::qr::{qr, QrDecomposition, QrOptions};
pub use crate::rref::{rref, RrefOptions, RrefResult};
