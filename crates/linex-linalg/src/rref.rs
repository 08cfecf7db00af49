use linex_matrix::Matrix;

/// Parameters of the row reduction.
#[derive(Debug, Clone)]
pub struct RrefOptions {
    /// Entries with an absolute value at or below this threshold are treated as zero when
    /// looking for a pivot. `0.0` only skips exact zeros.
    pub pivot_tolerance: f64,
}

impl Default for RrefOptions {
    fn default() -> Self {
        Self {
            pivot_tolerance: 1e-12,
        }
    }
}

/// Result of the row reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct RrefResult {
    /// The matrix in reduced row-echelon form, at full precision.
    pub reduced: Matrix,
    /// The pivot column of each non-zero row, top to bottom.
    pub pivots: Vec<usize>,
}

impl RrefResult {
    /// The rank of the input matrix, i.e. the number of pivots found.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// Compute the reduced row-echelon form of a matrix with Gauss-Jordan elimination.
///
/// The input may have any shape; augmented systems are reduced as a whole. The input is not
/// modified. The reduction never fails: once the pivot column passes the last column the
/// matrix reduced so far is returned.
///
/// # Arguments
///
/// * `matrix` - The matrix to reduce.
/// * `options` - The pivot tolerance.
///
/// # Returns
///
/// The reduced matrix and the pivot columns.
///
/// Example:
///
/// ```
/// use linex_linalg::rref::{rref, RrefOptions};
/// use linex_matrix::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let res = rref(&m, &RrefOptions::default());
/// assert_eq!(res.reduced, Matrix::identity(2));
/// assert_eq!(res.rank(), 2);
/// ```
pub fn rref(matrix: &Matrix, options: &RrefOptions) -> RrefResult {
    let mut m = matrix.clone();
    let [rows, cols] = m.shape();
    let tol = options.pivot_tolerance;

    let mut pivots = Vec::with_capacity(rows.min(cols));
    let mut lead = 0;

    'rows: for r in 0..rows {
        if lead >= cols {
            break;
        }

        // search the pivot column downwards, moving right when it is all zeros
        let mut i = r;
        while m[(i, lead)].abs() <= tol {
            i += 1;
            if i == rows {
                for k in r..rows {
                    m[(k, lead)] = 0.0;
                }
                i = r;
                lead += 1;
                if lead == cols {
                    break 'rows;
                }
            }
        }

        m.swap_rows(i, r);

        let pivot = m[(r, lead)];
        for v in m.row_mut(r).iter_mut() {
            *v /= pivot;
        }
        m[(r, lead)] = 1.0;

        for k in 0..rows {
            if k == r {
                continue;
            }
            let factor = m[(k, lead)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..cols {
                let v = m[(r, j)];
                m[(k, j)] -= factor * v;
            }
            m[(k, lead)] = 0.0;
        }

        log::debug!("rref: row {} pivot at column {} (value {})", r, lead, pivot);

        pivots.push(lead);
        lead += 1;
    }

    RrefResult { reduced: m, pivots }
}
