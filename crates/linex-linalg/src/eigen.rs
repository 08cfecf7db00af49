use faer::complex_native::c64;
use linex_matrix::Matrix;

use crate::{error::LinalgError, utils};

/// Parameters of the eigenvalue extraction.
#[derive(Debug, Clone)]
pub struct EigenOptions {
    /// Eigenvalues whose imaginary part exceeds this absolute value are considered non-real.
    pub imaginary_tolerance: f64,
}

impl Default for EigenOptions {
    fn default() -> Self {
        Self {
            imaginary_tolerance: 1e-10,
        }
    }
}

/// Compute the real eigenvalues of a square matrix.
///
/// The eigenvalues are extracted with faer's dense (non-symmetric) solver and returned in the
/// order the solver produces them; they are not sorted. A spectrum is accepted only as a
/// whole: a single non-real eigenvalue rejects the result.
///
/// # Arguments
///
/// * `matrix` - A square matrix.
/// * `options` - The tolerance on the imaginary parts.
///
/// # Returns
///
/// The real parts of the eigenvalues, at full precision.
///
/// # Errors
///
/// * [`LinalgError::Matrix`] wrapping `NotSquare` if the matrix is not square.
/// * [`LinalgError::NonRealSpectrum`] if an eigenvalue has a non-negligible imaginary part.
/// * [`LinalgError::ComputationFailed`] if the input or the solver output is not finite.
///
/// Example:
///
/// ```
/// use linex_linalg::eigen::{eigenvalues, EigenOptions};
/// use linex_matrix::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap();
/// assert!(eigenvalues(&m, &EigenOptions::default()).is_err());
/// ```
pub fn eigenvalues(matrix: &Matrix, options: &EigenOptions) -> Result<Vec<f64>, LinalgError> {
    let n = matrix.square_size()?;

    if !matrix.is_finite() {
        return Err(LinalgError::ComputationFailed(
            "matrix has non-finite entries".to_string(),
        ));
    }

    let mat = utils::matrix_to_faer(matrix);
    let values: Vec<c64> = mat.eigenvalues::<c64>();

    if values.len() != n || values.iter().any(|z| !z.re.is_finite() || !z.im.is_finite()) {
        log::warn!("eigen: solver returned {:?} for a {}x{} matrix", values, n, n);
        return Err(LinalgError::ComputationFailed(
            "eigenvalue solver did not converge".to_string(),
        ));
    }

    log::debug!("eigen: solver returned {:?}", values);

    if let Some((index, z)) = values
        .iter()
        .enumerate()
        .find(|(_, z)| z.im.abs() > options.imaginary_tolerance)
    {
        return Err(LinalgError::NonRealSpectrum {
            index,
            imaginary: z.im,
        });
    }

    Ok(values.iter().map(|z| z.re).collect())
}
