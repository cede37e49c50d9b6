//! matcalc-core: dense matrices and the linear algebra behind the matrix calculator.
//!
//! The crate provides a validated row-major `Matrix` container, a set of pure
//! operations over it (arithmetic, transpose, dot product, determinant,
//! inverse, integer power, trace), and an operation catalogue that dispatches
//! any of them from a single call.
//!
//! ```
//! use matcalc_core::math::Matrix;
//! use matcalc_core::ops;
//!
//! let a = Matrix::from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
//! let inv = ops::inverse(&a).unwrap();
//! let product = ops::multiply(&a, &inv).unwrap();
//! assert_eq!(product, Matrix::identity(2).unwrap());
//! ```
pub mod config;
pub mod error;
pub mod math;
pub mod operation;
pub mod ops;

pub use error::MatrixError;
