use linex_matrix::Matrix;

/// Utility function to copy a matrix into an owned faer matrix.
///
/// # Arguments
///
/// * `matrix` - A row-major matrix.
///
/// # Returns
///
/// A faer matrix with the same shape and entries.
pub fn matrix_to_faer(matrix: &Matrix) -> faer::Mat<f64> {
    faer::Mat::<f64>::from_fn(matrix.rows(), matrix.cols(), |i, j| matrix[(i, j)])
}

/// Utility function to copy a faer matrix view back into a [`Matrix`].
///
/// # Arguments
///
/// * `mat` - A faer matrix view.
///
/// # Returns
///
/// A row-major matrix with the same shape and entries.
pub fn faer_to_matrix(mat: faer::MatRef<'_, f64>) -> Matrix {
    Matrix::from_fn([mat.nrows(), mat.ncols()], |i, j| mat.read(i, j))
}
