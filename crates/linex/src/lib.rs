#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `linex` backs a small linear algebra teaching tool. A user types a matrix as text, one row
//! per line, and asks for one of four computations:
//!
//! - the reduced row-echelon form,
//! - a QR factorization with Gram-Schmidt,
//! - the real eigenvalues,
//! - the change-of-basis matrices between two bases.
//!
//! Each computation is a pure function. The results are rounded for display only after the
//! arithmetic is done, and every failure is reported as a single [`LinexError`] with an
//! [`ErrorKind`] the caller can show.
//!
//! # Quick Start
//!
//! ```rust
//! use linex::{handle, ErrorKind, Request, Response};
//!
//! let res = handle(&Request::Eigenvalues { input: "0 -1\n1 0".to_string() });
//! assert_eq!(res.unwrap_err().kind(), ErrorKind::NonRealSpectrum);
//!
//! let res = handle(&Request::ChangeOfBasis {
//!     basis_a: "1 0\n0 1".to_string(),
//!     basis_b: "1 0\n0 1".to_string(),
//! })
//! .unwrap();
//! assert!(matches!(res, Response::ChangeOfBasis(_)));
//! ```

#[doc(inline)]
pub use linex_linalg as linalg;

#[doc(inline)]
pub use linex_matrix as matrix;

/// Settings of the explorer.
pub mod config;

/// Error types of the explorer.
pub mod error;

/// Request and response handling.
pub mod explorer;

pub use crate::config::{DisplayPrecision, LinexConfig};
pub use crate::error::{ErrorKind, LinexError};
pub use crate::explorer::{
    compute_change_of_basis, compute_eigenvalues, compute_qr, compute_rref, handle,
    ChangeOfBasisResponse, EigenResponse, Explorer, QrResponse, Request, Response, RrefResponse,
};
pub use linex_matrix::{Matrix, Precision};
