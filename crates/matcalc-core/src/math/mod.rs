//! Dense matrix storage.
//!
//! `Matrix` is a small row-major container of `f64` with validated
//! constructors and tolerance-based equality.
pub mod matrix;

pub use matrix::{Matrix, EPSILON};
