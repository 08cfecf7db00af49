use std::fmt;

use linex_linalg::{self as linalg, QrDecomposition};
use linex_matrix::{parse_matrix, Matrix, Precision};

use crate::config::LinexConfig;
use crate::error::LinexError;

/// A computation requested with raw text inputs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    /// Reduced row-echelon form of one matrix.
    Rref {
        /// The matrix text.
        input: String,
    },
    /// Gram-Schmidt QR factorization of one matrix.
    Qr {
        /// The matrix text.
        input: String,
    },
    /// Real eigenvalues of one square matrix.
    Eigenvalues {
        /// The matrix text.
        input: String,
    },
    /// Change-of-basis matrices between two bases.
    ChangeOfBasis {
        /// The text of basis `A`, one basis vector per column.
        basis_a: String,
        /// The text of basis `B`, one basis vector per column.
        basis_b: String,
    },
}

/// The reduced row-echelon form, rounded for display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RrefResponse {
    /// The reduced matrix.
    pub matrix: Matrix,
    /// Pivot column of each non-zero row.
    pub pivots: Vec<usize>,
    /// Rounding applied to `matrix`.
    pub precision: Precision,
}

/// The QR factors, rounded for display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct QrResponse {
    /// Matrix with orthonormal columns.
    pub q: Matrix,
    /// Upper triangular matrix.
    pub r: Matrix,
    /// Rounding applied to `q` and `r`.
    pub precision: Precision,
    /// The factors before rounding.
    #[serde(skip)]
    pub exact: QrDecomposition,
}

/// The real eigenvalues, rounded for display, in solver order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EigenResponse {
    /// The eigenvalues.
    pub eigenvalues: Vec<f64>,
    /// Rounding applied to `eigenvalues`.
    pub precision: Precision,
}

/// The change-of-basis matrices, rounded for display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChangeOfBasisResponse {
    /// `P = B^-1 A`, maps `A` coordinates to `B` coordinates.
    pub p: Matrix,
    /// `Q = A^-1 B`, maps `B` coordinates to `A` coordinates.
    pub q: Matrix,
    /// Rounding applied to `p` and `q`.
    pub precision: Precision,
}

/// The result of a [`Request`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Response {
    /// See [`RrefResponse`].
    Rref(RrefResponse),
    /// See [`QrResponse`].
    Qr(QrResponse),
    /// See [`EigenResponse`].
    Eigenvalues(EigenResponse),
    /// See [`ChangeOfBasisResponse`].
    ChangeOfBasis(ChangeOfBasisResponse),
}

/// Runs the parse, validate, compute and round cycle of each operation.
///
/// The explorer holds only its configuration; every call works on its own inputs and
/// nothing is kept between calls.
///
/// # Example
///
/// ```
/// use linex::{Explorer, Request, Response};
///
/// let explorer = Explorer::default();
/// let response = explorer
///     .handle(&Request::Rref { input: "1 2\n3 4".to_string() })
///     .unwrap();
///
/// match response {
///     Response::Rref(res) => assert_eq!(res.matrix.to_rows(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    config: LinexConfig,
}

impl Explorer {
    /// Create an explorer with the given configuration.
    pub fn new(config: LinexConfig) -> Self {
        Self { config }
    }

    /// Compute the reduced row-echelon form of `matrix`.
    pub fn rref(&self, matrix: &Matrix) -> Result<RrefResponse, LinexError> {
        let res = linalg::rref(matrix, &self.config.rref);
        let precision = self.config.display.rref;
        Ok(RrefResponse {
            matrix: res.reduced.rounded(precision),
            pivots: res.pivots,
            precision,
        })
    }

    /// Compute the QR factorization of `matrix`.
    pub fn qr(&self, matrix: &Matrix) -> Result<QrResponse, LinexError> {
        let exact = linalg::qr(matrix, &self.config.qr)?;
        let precision = self.config.display.qr;
        Ok(QrResponse {
            q: exact.q.rounded(precision),
            r: exact.r.rounded(precision),
            precision,
            exact,
        })
    }

    /// Compute the real eigenvalues of `matrix`.
    pub fn eigenvalues(&self, matrix: &Matrix) -> Result<EigenResponse, LinexError> {
        let values = linalg::eigenvalues(matrix, &self.config.eigen)?;
        let precision = self.config.display.eigenvalues;
        Ok(EigenResponse {
            eigenvalues: values.into_iter().map(|v| precision.round(v)).collect(),
            precision,
        })
    }

    /// Compute the change-of-basis matrices between `basis_a` and `basis_b`.
    pub fn change_of_basis(
        &self,
        basis_a: &Matrix,
        basis_b: &Matrix,
    ) -> Result<ChangeOfBasisResponse, LinexError> {
        let res = linalg::change_of_basis(basis_a, basis_b, &self.config.change_of_basis)?;
        let precision = self.config.display.change_of_basis;
        Ok(ChangeOfBasisResponse {
            p: res.p.rounded(precision),
            q: res.q.rounded(precision),
            precision,
        })
    }

    /// Parse the text inputs of `request` and run the requested operation.
    ///
    /// # Errors
    ///
    /// Exactly one error is returned when any step fails; no partial result is produced.
    pub fn handle(&self, request: &Request) -> Result<Response, LinexError> {
        let res = match request {
            Request::Rref { input } => {
                let matrix = parse_input("matrix", input)?;
                self.rref(&matrix).map(Response::Rref)
            }
            Request::Qr { input } => {
                let matrix = parse_input("matrix", input)?;
                self.qr(&matrix).map(Response::Qr)
            }
            Request::Eigenvalues { input } => {
                let matrix = parse_input("matrix", input)?;
                self.eigenvalues(&matrix).map(Response::Eigenvalues)
            }
            Request::ChangeOfBasis { basis_a, basis_b } => {
                let a = parse_input("basis A", basis_a)?;
                let b = parse_input("basis B", basis_b)?;
                self.change_of_basis(&a, &b).map(Response::ChangeOfBasis)
            }
        };

        if let Err(err) = &res {
            log::debug!("request rejected ({:?}): {}", err.kind(), err);
        }

        res
    }
}

fn parse_input(field: &'static str, text: &str) -> Result<Matrix, LinexError> {
    parse_matrix(text).map_err(|source| LinexError::Input { field, source })
}

/// Compute the reduced row-echelon form with the default configuration.
pub fn compute_rref(matrix: &Matrix) -> Result<RrefResponse, LinexError> {
    Explorer::default().rref(matrix)
}

/// Compute the QR factorization with the default configuration.
pub fn compute_qr(matrix: &Matrix) -> Result<QrResponse, LinexError> {
    Explorer::default().qr(matrix)
}

/// Compute the real eigenvalues with the default configuration.
pub fn compute_eigenvalues(matrix: &Matrix) -> Result<EigenResponse, LinexError> {
    Explorer::default().eigenvalues(matrix)
}

/// Compute the change-of-basis matrices with the default configuration.
pub fn compute_change_of_basis(
    basis_a: &Matrix,
    basis_b: &Matrix,
) -> Result<ChangeOfBasisResponse, LinexError> {
    Explorer::default().change_of_basis(basis_a, basis_b)
}

/// Run a text request with the default configuration.
pub fn handle(request: &Request) -> Result<Response, LinexError> {
    Explorer::default().handle(request)
}

impl fmt::Display for RrefResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RREF:")?;
        write!(f, "{}", self.matrix.display(self.precision))
    }
}

impl fmt::Display for QrResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Q Matrix:")?;
        writeln!(f, "{}", self.q.display(self.precision))?;
        writeln!(f, "R Matrix:")?;
        write!(f, "{}", self.r.display(self.precision))
    }
}

impl fmt::Display for EigenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self
            .eigenvalues
            .iter()
            .map(|&v| self.precision.format(v))
            .collect();
        writeln!(f, "Eigenvalues:")?;
        write!(f, "{}", values.join(", "))
    }
}

impl fmt::Display for ChangeOfBasisResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "P = B^-1 A (maps A -> B):")?;
        writeln!(f, "{}", self.p.display(self.precision))?;
        writeln!(f, "Q = A^-1 B (maps B -> A):")?;
        write!(f, "{}", self.q.display(self.precision))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Rref(res) => res.fmt(f),
            Response::Qr(res) => res.fmt(f),
            Response::Eigenvalues(res) => res.fmt(f),
            Response::ChangeOfBasis(res) => res.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayPrecision;
    use crate::error::ErrorKind;

    #[test]
    fn test_rref_rounds_for_display() -> Result<(), Box<dyn std::error::Error>> {
        // x + 2y = 1, 3x + 4y = 1 -> x = -1, y = 1
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 1.0], vec![3.0, 4.0, 1.0]])?;
        let res = compute_rref(&m)?;
        assert_eq!(
            res.matrix.to_rows(),
            vec![vec![1.0, 0.0, -1.0], vec![0.0, 1.0, 1.0]]
        );
        assert_eq!(res.pivots, vec![0, 1]);
        assert_eq!(res.precision, Precision::Integer);
        Ok(())
    }

    #[test]
    fn test_qr_keeps_exact_factors() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(vec![vec![3.0, 0.0], vec![4.0, 5.0]])?;
        let res = compute_qr(&m)?;
        // q_1 = (0.6, 0.8): rounded to (1, 1)
        assert_eq!(res.q.col(0), vec![1.0, 1.0]);
        assert_eq!(res.exact.q.col(0), vec![0.6, 0.8]);
        assert_eq!(res.r[(0, 0)], 5.0);
        Ok(())
    }

    #[test]
    fn test_qr_display_ties_round_up() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(vec![vec![1.0], vec![-1.0], vec![1.0], vec![-1.0]])?;
        let res = compute_qr(&m)?;
        assert_eq!(res.exact.q.col(0), vec![0.5, -0.5, 0.5, -0.5]);
        assert_eq!(res.q.col(0), vec![1.0, 0.0, 1.0, 0.0]);
        assert_eq!(res.r.to_rows(), vec![vec![2.0]]);
        Ok(())
    }

    #[test]
    fn test_eigenvalue_ties_round_up() -> Result<(), Box<dyn std::error::Error>> {
        let res = compute_eigenvalues(&Matrix::from_rows(vec![vec![-1.125]])?)?;
        assert_eq!(res.eigenvalues, vec![-1.12]);
        assert_eq!(res.to_string(), "Eigenvalues:\n-1.12");
        Ok(())
    }

    #[test]
    fn test_eigenvalues_rounded_to_two_decimals() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 0.0]])?;
        let mut res = compute_eigenvalues(&m)?;
        res.eigenvalues.sort_by(f64::total_cmp);
        // golden ratio and its conjugate
        assert_eq!(res.eigenvalues, vec![-0.62, 1.62]);
        Ok(())
    }

    #[test]
    fn test_change_of_basis_six_decimals() -> Result<(), Box<dyn std::error::Error>> {
        let a = Matrix::identity(2);
        let b = Matrix::from_rows(vec![vec![3.0, 0.0], vec![0.0, 1.0]])?;
        let res = compute_change_of_basis(&a, &b)?;
        assert_eq!(res.p.to_rows(), vec![vec![0.333333, 0.0], vec![0.0, 1.0]]);
        assert_eq!(res.q.to_rows(), vec![vec![3.0, 0.0], vec![0.0, 1.0]]);
        Ok(())
    }

    #[test]
    fn test_custom_display_precision() -> Result<(), Box<dyn std::error::Error>> {
        let explorer = Explorer::new(LinexConfig {
            display: DisplayPrecision {
                eigenvalues: Precision::Decimals(4),
                ..Default::default()
            },
            ..Default::default()
        });
        let m = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 0.0]])?;
        let mut res = explorer.eigenvalues(&m)?;
        res.eigenvalues.sort_by(f64::total_cmp);
        assert_eq!(res.eigenvalues, vec![-0.618, 1.618]);
        Ok(())
    }

    #[test]
    fn test_handle_parse_error_names_the_field() {
        let err = handle(&Request::ChangeOfBasis {
            basis_a: "1 0\n0 1".to_string(),
            basis_b: "1 0\n0 one".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("basis B: "));
    }

    #[test]
    fn test_response_display() -> Result<(), Box<dyn std::error::Error>> {
        let res = handle(&Request::Eigenvalues {
            input: "2 0\n0 3".to_string(),
        })?;
        let text = res.to_string();
        assert!(text.starts_with("Eigenvalues:\n"));
        assert!(text.contains('2') && text.contains('3'));

        let res = handle(&Request::Rref {
            input: "2 4\n1 3".to_string(),
        })?;
        assert_eq!(res.to_string(), "RREF:\n1  0\n0  1");
        Ok(())
    }
}
