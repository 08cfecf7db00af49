use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::precision::Precision;

/// A dense, row-major matrix of `f64` entries.
///
/// The matrix is always rectangular: the constructors reject ragged rows and data whose
/// length does not match the shape. Engines take a `&Matrix` and never modify it; any
/// in-place work happens on a clone.
///
/// # Examples
///
/// ```
/// use linex_matrix::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.shape(), [2, 2]);
/// assert_eq!(m[(1, 0)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    shape: [usize; 2],
}

impl Matrix {
    /// Create a matrix from a shape `[rows, cols]` and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<f64>) -> Result<Self, MatrixError> {
        let numel = shape[0] * shape[1];
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        Ok(Self { data, shape })
    }

    /// Create a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// * [`MatrixError::EmptyInput`] if there are no rows or the rows carry no entries.
    /// * [`MatrixError::RaggedRows`] if a row differs in length from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixError::EmptyInput),
        };

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != cols)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        let shape = [rows.len(), cols];
        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, shape })
    }

    /// Create a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(shape: [usize; 2], f: impl Fn(usize, usize) -> f64) -> Self {
        let [rows, cols] = shape;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, shape }
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(shape: [usize; 2]) -> Self {
        Self {
            data: vec![0.0; shape[0] * shape[1]],
            shape,
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn([n, n], |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// The shape of the matrix as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape[0] == self.shape[1]
    }

    /// Return the size `n` of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn square_size(&self) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// The entries in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// A slice over row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        let cols = self.cols();
        &self.data[i * cols..(i + 1) * cols]
    }

    /// A mutable slice over row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let cols = self.cols();
        &mut self.data[i * cols..(i + 1) * cols]
    }

    /// Iterate over the rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows()).map(move |i| self.row(i))
    }

    /// Copy column `j` into a vector.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.cols()`.
    pub fn col(&self, j: usize) -> Vec<f64> {
        assert!(j < self.cols(), "column {j} out of bounds");
        self.row_iter().map(|row| row[j]).collect()
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Return the transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn([self.cols(), self.rows()], |i, j| self[(j, i)])
    }

    /// Multiply `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the inner dimensions differ.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Self, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::dimension_mismatch(
                [self.cols(), rhs.cols()],
                rhs.shape(),
            ));
        }
        Ok(Self::from_fn([self.rows(), rhs.cols()], |i, j| {
            self.row(i)
                .iter()
                .enumerate()
                .map(|(k, a)| a * rhs[(k, j)])
                .sum()
        }))
    }

    /// Apply `f` to every entry, returning a new matrix.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            shape: self.shape,
        }
    }

    /// Round every entry for display.
    ///
    /// The result is meant to be shown, not fed back into further computation.
    pub fn rounded(&self, precision: Precision) -> Self {
        self.map(|v| precision.round(v))
    }

    /// Whether every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Copy the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.row_iter().map(|row| row.to_vec()).collect()
    }

    /// Create a display adapter that formats entries with the given precision.
    pub fn display(&self, precision: Precision) -> MatrixDisplay<'_> {
        MatrixDisplay {
            matrix: self,
            precision: Some(precision),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for shape {:?}",
            self.shape
        );
        &self.data[row * self.cols() + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for shape {:?}",
            self.shape
        );
        let cols = self.cols();
        &mut self.data[row * cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

/// Formats a matrix as a whitespace-aligned table, one row per line.
///
/// Created by [`Matrix::display`]; the plain `Display` impl of [`Matrix`] prints the
/// entries at full precision.
pub struct MatrixDisplay<'a> {
    matrix: &'a Matrix,
    precision: Option<Precision>,
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .matrix
            .as_slice()
            .iter()
            .map(|&v| match self.precision {
                Some(p) => p.format(v),
                None => Precision::format_full(v),
            })
            .collect();

        let cols = self.matrix.cols();
        let mut widths = vec![0; cols];
        for (k, cell) in cells.iter().enumerate() {
            widths[k % cols] = widths[k % cols].max(cell.len());
        }

        for (i, row) in cells.chunks(cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", cell, width = widths[j])?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixDisplay {
            matrix: self,
            precision: None,
        }
        .fmt(f)
    }
}
