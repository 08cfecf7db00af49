use std::fmt;

use faer::prelude::SolverCore;
use linex_matrix::{Matrix, MatrixError};

use crate::{error::LinalgError, utils};

/// Identifies one of the two bases of a change of basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// The first basis, `A`.
    A,
    /// The second basis, `B`.
    B,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::A => write!(f, "A"),
            Basis::B => write!(f, "B"),
        }
    }
}

/// Parameters of the change of basis.
#[derive(Debug, Clone)]
pub struct ChangeOfBasisOptions {
    /// A basis is singular when the absolute value of its determinant is at or below this
    /// threshold. The test is absolute and therefore depends on the scale of the entries.
    pub singular_tolerance: f64,
}

impl Default for ChangeOfBasisOptions {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-10,
        }
    }
}

/// The two change-of-basis matrices between bases `A` and `B`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeOfBasis {
    /// `P = B^-1 * A`, maps coordinates in `A` to coordinates in `B`.
    pub p: Matrix,
    /// `Q = A^-1 * B`, maps coordinates in `B` to coordinates in `A`.
    pub q: Matrix,
}

/// Compute the determinant of a square matrix through an LU decomposition.
///
/// # Errors
///
/// Returns [`LinalgError::Matrix`] wrapping `NotSquare` if the matrix is not square.
pub fn determinant(matrix: &Matrix) -> Result<f64, LinalgError> {
    matrix.square_size()?;
    Ok(utils::matrix_to_faer(matrix).determinant())
}

/// Invert a square matrix with a partial-pivoting LU decomposition.
///
/// # Arguments
///
/// * `matrix` - A square matrix.
/// * `basis` - The basis the matrix stands for, reported in the errors.
/// * `singular_tolerance` - Matrices with `|det| <= singular_tolerance` are rejected.
///
/// # Errors
///
/// * [`LinalgError::Matrix`] wrapping `NotSquare` if the matrix is not square.
/// * [`LinalgError::Singular`] if the determinant is too small.
/// * [`LinalgError::ComputationFailed`] if the matrix or its inverse has non-finite entries.
pub fn inverse(
    matrix: &Matrix,
    basis: Basis,
    singular_tolerance: f64,
) -> Result<Matrix, LinalgError> {
    check_invertible(matrix, basis, singular_tolerance)?;
    let inv = utils::matrix_to_faer(matrix).partial_piv_lu().inverse();
    let inv = utils::faer_to_matrix(inv.as_ref());
    if !inv.is_finite() {
        return Err(LinalgError::ComputationFailed(format!(
            "inverse of basis {basis} has non-finite entries"
        )));
    }
    Ok(inv)
}

fn check_invertible(matrix: &Matrix, basis: Basis, tolerance: f64) -> Result<(), LinalgError> {
    if !matrix.is_finite() {
        return Err(LinalgError::ComputationFailed(format!(
            "basis {basis} has non-finite entries"
        )));
    }

    let det = determinant(matrix)?;
    log::debug!("change of basis: det({}) = {}", basis, det);

    if !det.is_finite() {
        return Err(LinalgError::ComputationFailed(format!(
            "determinant of basis {basis} is not finite"
        )));
    }

    if det.abs() <= tolerance {
        log::warn!("change of basis: basis {} is singular (det = {:e})", basis, det);
        return Err(LinalgError::Singular {
            basis,
            determinant: det,
        });
    }

    Ok(())
}

/// Compute the change-of-basis matrices between two bases.
///
/// Each basis is given as a square matrix whose columns are the basis vectors. The result
/// holds `P = B^-1 * A` (from `A` to `B`) and `Q = A^-1 * B` (from `B` to `A`), so that
/// `B * P = A` and `P * Q = I`.
///
/// # Arguments
///
/// * `a` - The first basis.
/// * `b` - The second basis, same size as `a`.
/// * `options` - The singularity tolerance.
///
/// # Errors
///
/// * [`LinalgError::Matrix`] wrapping `DimensionMismatch` if the shapes differ or a basis is
///   not square.
/// * [`LinalgError::Singular`] if either basis has `|det| <= singular_tolerance`.
/// * [`LinalgError::ComputationFailed`] if the result has non-finite entries.
///
/// Example:
///
/// ```
/// use linex_linalg::basis::{change_of_basis, ChangeOfBasisOptions};
/// use linex_matrix::Matrix;
///
/// let eye = Matrix::identity(3);
/// let res = change_of_basis(&eye, &eye, &ChangeOfBasisOptions::default()).unwrap();
/// assert_eq!(res.p, eye);
/// assert_eq!(res.q, eye);
/// ```
pub fn change_of_basis(
    a: &Matrix,
    b: &Matrix,
    options: &ChangeOfBasisOptions,
) -> Result<ChangeOfBasis, LinalgError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::dimension_mismatch(a.shape(), b.shape()).into());
    }
    for m in [a, b] {
        if !m.is_square() {
            return Err(MatrixError::dimension_mismatch([m.rows(), m.rows()], m.shape()).into());
        }
    }

    let a_inv = utils::matrix_to_faer(&inverse(a, Basis::A, options.singular_tolerance)?);
    let b_inv = utils::matrix_to_faer(&inverse(b, Basis::B, options.singular_tolerance)?);
    let a_mat = utils::matrix_to_faer(a);
    let b_mat = utils::matrix_to_faer(b);

    let p = utils::faer_to_matrix((&b_inv * &a_mat).as_ref());
    let q = utils::faer_to_matrix((&a_inv * &b_mat).as_ref());

    if !p.is_finite() || !q.is_finite() {
        return Err(LinalgError::ComputationFailed(
            "change-of-basis matrix has non-finite entries".to_string(),
        ));
    }

    Ok(ChangeOfBasis { p, q })
}
