use linex_matrix::{Matrix, MatrixError};

use crate::error::LinalgError;

/// Parameters of the Gram-Schmidt factorization.
#[derive(Debug, Clone)]
pub struct QrOptions {
    /// A column is rejected as linearly dependent when the norm of its orthogonal residual is
    /// at or below `dependence_tolerance * max(1, |a_j|)`.
    pub dependence_tolerance: f64,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            dependence_tolerance: 1e-10,
        }
    }
}

/// The factors of `A = Q * R`.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    /// `n x m` matrix with orthonormal columns.
    pub q: Matrix,
    /// `m x m` upper triangular matrix with a positive diagonal.
    pub r: Matrix,
}

impl QrDecomposition {
    /// Multiply the factors back together.
    pub fn reconstruct(&self) -> Result<Matrix, MatrixError> {
        self.q.matmul(&self.r)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

/// Compute a thin QR factorization with classical Gram-Schmidt.
///
/// The columns of the input are orthonormalized from left to right. For column `j` the
/// projections on the previous columns `q_i` are removed one at a time, `r[i][j]` being the
/// dot product of `q_i` with the current residual, and `r[j][j]` the norm of what remains.
///
/// # Arguments
///
/// * `matrix` - An `n x m` matrix with `n >= m`.
/// * `options` - The linear dependence tolerance.
///
/// # Returns
///
/// The factors `Q` (`n x m`) and `R` (`m x m`) at full precision.
///
/// # Errors
///
/// * [`LinalgError::NotEnoughRows`] if the matrix has more columns than rows.
/// * [`LinalgError::LinearlyDependentColumns`] if a column lies in the span of the previous
///   ones, which would otherwise produce a division by (almost) zero.
pub fn qr(matrix: &Matrix, options: &QrOptions) -> Result<QrDecomposition, LinalgError> {
    let [n, m] = matrix.shape();
    if n < m {
        return Err(LinalgError::NotEnoughRows { rows: n, cols: m });
    }

    let mut q_cols: Vec<Vec<f64>> = Vec::with_capacity(m);
    let mut r = Matrix::zeros([m, m]);

    for j in 0..m {
        let a_j = matrix.col(j);
        let mut v = a_j.clone();

        for (i, q_i) in q_cols.iter().enumerate() {
            let r_ij = dot(q_i, &v);
            r[(i, j)] = r_ij;
            v.iter_mut().zip(q_i).for_each(|(x, q)| *x -= r_ij * q);
        }

        let r_jj = norm(&v);
        let threshold = options.dependence_tolerance * norm(&a_j).max(1.0);
        log::debug!("gram-schmidt: column {} residual norm {}", j, r_jj);

        if r_jj <= threshold {
            log::warn!(
                "gram-schmidt: column {} is linearly dependent (norm {} <= {})",
                j,
                r_jj,
                threshold
            );
            return Err(LinalgError::LinearlyDependentColumns { column: j });
        }

        r[(j, j)] = r_jj;
        v.iter_mut().for_each(|x| *x /= r_jj);
        q_cols.push(v);
    }

    let q = Matrix::from_fn([n, m], |i, j| q_cols[j][i]);

    Ok(QrDecomposition { q, r })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_matrix_near(actual: &Matrix, expected: &Matrix, epsilon: f64) {
        assert_eq!(actual.shape(), expected.shape());
        for (a, e) in actual.as_slice().iter().zip(expected.as_slice()) {
            assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
        }
    }

    fn assert_orthonormal_columns(q: &Matrix) -> Result<(), MatrixError> {
        let qtq = q.transpose().matmul(q)?;
        assert_matrix_near(&qtq, &Matrix::identity(q.cols()), 1e-12);
        Ok(())
    }

    #[test]
    fn test_qr_3x3() -> Result<(), Box<dyn std::error::Error>> {
        let a = Matrix::from_rows(vec![
            vec![12.0, -51.0, 4.0],
            vec![6.0, 167.0, -68.0],
            vec![-4.0, 24.0, -41.0],
        ])?;
        let QrDecomposition { q, r } = qr(&a, &QrOptions::default())?;

        let expected_r = Matrix::from_rows(vec![
            vec![14.0, 21.0, -14.0],
            vec![0.0, 175.0, -70.0],
            vec![0.0, 0.0, 35.0],
        ])?;
        let expected_q = Matrix::from_rows(vec![
            vec![6.0 / 7.0, -69.0 / 175.0, -58.0 / 175.0],
            vec![3.0 / 7.0, 158.0 / 175.0, 6.0 / 175.0],
            vec![-2.0 / 7.0, 6.0 / 35.0, -33.0 / 35.0],
        ])?;

        assert_matrix_near(&r, &expected_r, 1e-9);
        assert_matrix_near(&q, &expected_q, 1e-12);
        Ok(())
    }

    #[test]
    fn test_qr_properties() -> Result<(), Box<dyn std::error::Error>> {
        let inputs = vec![
            vec![vec![1.0, 1.0], vec![1.0, -1.0]],
            vec![vec![2.0, 0.5], vec![-1.0, 3.0], vec![4.0, 1.0]],
            vec![vec![1.0, 2.0, 0.0], vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![3.0, -2.0, 5.0]],
        ];
        for rows in inputs {
            let a = Matrix::from_rows(rows)?;
            let decomp = qr(&a, &QrOptions::default())?;

            assert_eq!(decomp.q.shape(), a.shape());
            assert_eq!(decomp.r.shape(), [a.cols(), a.cols()]);
            assert_orthonormal_columns(&decomp.q)?;

            // upper triangular with a positive diagonal
            for i in 0..a.cols() {
                assert!(decomp.r[(i, i)] > 0.0);
                for j in 0..i {
                    assert_eq!(decomp.r[(i, j)], 0.0);
                }
            }

            assert_matrix_near(&decomp.reconstruct()?, &a, 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_qr_tall_identity() -> Result<(), Box<dyn std::error::Error>> {
        let a = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]])?;
        let decomp = qr(&a, &QrOptions::default())?;
        assert_eq!(decomp.q, a);
        assert_eq!(decomp.r, Matrix::identity(2));
        Ok(())
    }

    #[test]
    fn test_qr_not_enough_rows() -> Result<(), Box<dyn std::error::Error>> {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]])?;
        assert_eq!(
            qr(&a, &QrOptions::default()),
            Err(LinalgError::NotEnoughRows { rows: 1, cols: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_qr_dependent_columns() -> Result<(), Box<dyn std::error::Error>> {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]])?;
        assert_eq!(
            qr(&a, &QrOptions::default()),
            Err(LinalgError::LinearlyDependentColumns { column: 1 })
        );
        Ok(())
    }

    #[test]
    fn test_qr_zero_column() -> Result<(), Box<dyn std::error::Error>> {
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 1.0]])?;
        assert_eq!(
            qr(&a, &QrOptions::default()),
            Err(LinalgError::LinearlyDependentColumns { column: 0 })
        );
        Ok(())
    }

    #[test]
    fn test_qr_relative_dependence() -> Result<(), Box<dyn std::error::Error>> {
        let options = QrOptions::default();

        // residual 1e-5 against a threshold of 1e-10 * |a_1| ~ 2e-4
        let a = Matrix::from_rows(vec![vec![1e6, 2e6], vec![0.0, 1e-5], vec![0.0, 0.0]])?;
        assert_eq!(
            qr(&a, &options),
            Err(LinalgError::LinearlyDependentColumns { column: 1 })
        );

        // residual 1e-3 clears the same threshold
        let a = Matrix::from_rows(vec![vec![1e6, 2e6], vec![0.0, 1e-3], vec![0.0, 0.0]])?;
        let decomp = qr(&a, &options)?;
        assert_abs_diff_eq!(decomp.r[(1, 1)], 1e-3, epsilon = 1e-12);

        // small columns are compared against the tolerance itself
        let tiny = Matrix::from_rows(vec![vec![1e-9], vec![0.0]])?;
        assert_eq!(qr(&tiny, &options)?.q.col(0), vec![1.0, 0.0]);
        let below = Matrix::from_rows(vec![vec![1e-10], vec![0.0]])?;
        assert_eq!(
            qr(&below, &options),
            Err(LinalgError::LinearlyDependentColumns { column: 0 })
        );
        Ok(())
    }
}
