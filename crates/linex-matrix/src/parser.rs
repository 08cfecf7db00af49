use std::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Parse whitespace-separated text into rows of numbers.
///
/// One row per line; entries are separated by runs of whitespace. Lines that are empty after
/// trimming are skipped. The rows are returned as written and may differ in length: the
/// rectangular check is done by [`Matrix::from_rows`].
///
/// # Arguments
///
/// * `text` - The raw input text.
///
/// # Errors
///
/// * [`MatrixError::InvalidToken`] if a token is not a finite decimal number.
/// * [`MatrixError::EmptyInput`] if the text contains no entries.
///
/// # Example
///
/// ```
/// use linex_matrix::parser::parse_rows;
///
/// let rows = parse_rows("1 2 3\n  4\t5 6 \n").unwrap();
/// assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
/// ```
pub fn parse_rows(text: &str) -> Result<Vec<Vec<f64>>, MatrixError> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split_whitespace()
                .enumerate()
                .map(|(col, token)| parse_token(row, col, token))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(MatrixError::EmptyInput);
    }

    Ok(rows)
}

/// Parse text into a rectangular [`Matrix`].
///
/// Equivalent to [`parse_rows`] followed by [`Matrix::from_rows`].
///
/// # Errors
///
/// Any error of [`parse_rows`], or [`MatrixError::RaggedRows`].
pub fn parse_matrix(text: &str) -> Result<Matrix, MatrixError> {
    Matrix::from_rows(parse_rows(text)?)
}

fn parse_token(row: usize, col: usize, token: &str) -> Result<f64, MatrixError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MatrixError::InvalidToken {
            row,
            col,
            token: token.to_string(),
        }),
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}
