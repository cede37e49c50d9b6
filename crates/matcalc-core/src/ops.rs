//! Linear-algebra operations over [`Matrix`].
//!
//! Every function here is pure: operands are borrowed immutably and every
//! matrix result is freshly allocated.

use crate::error::{MatrixError, Result};
use crate::math::{Matrix, EPSILON};

fn require_same_shape(a: &Matrix, b: &Matrix, what: &str) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch(format!(
            "Matrix dimensions must match for {}",
            what
        )));
    }
    Ok(())
}

fn require_square(a: &Matrix, what: &str) -> Result<()> {
    if !a.is_square() {
        return Err(MatrixError::NonSquareMatrix(format!(
            "Matrix must be square {}",
            what
        )));
    }
    Ok(())
}

fn zip_with<F>(a: &Matrix, b: &Matrix, f: F) -> Matrix
where
    F: Fn(f64, f64) -> f64,
{
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| f(*x, *y))
        .collect();
    Matrix::from_raw(a.shape(), data)
}

pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    require_same_shape(a, b, "addition")?;
    Ok(zip_with(a, b, |x, y| x + y))
}

pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    require_same_shape(a, b, "subtraction")?;
    Ok(zip_with(a, b, |x, y| x - y))
}

/// Standard matrix product. The error message names both shapes.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch(format!(
            "Number of columns in A must equal number of rows in B. A: {}x{}, B: {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }

    let mut result = Matrix::new(a.nrows(), b.ncols())?;
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let mut sum = 0.0;
            for k in 0..a.ncols() {
                sum += a.at(i, k) * b.at(k, j);
            }
            *result.at_mut(i, j) = sum;
        }
    }
    Ok(result)
}

pub fn scalar_multiply(a: &Matrix, scalar: f64) -> Matrix {
    a.mapv(|x| x * scalar)
}

pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = a.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(a.at(i, j));
        }
    }
    Matrix::from_raw((cols, rows), data)
}

/// Sum of pairwise products of two vectors sharing the same orientation:
/// both `1 x n` or both `n x 1`.
pub fn dot_product(a: &Matrix, b: &Matrix) -> Result<f64> {
    let both_rows = a.nrows() == 1 && b.nrows() == 1 && a.ncols() == b.ncols();
    let both_cols = a.ncols() == 1 && b.ncols() == 1 && a.nrows() == b.nrows();
    if !(both_rows || both_cols) {
        return Err(MatrixError::IncompatibleVectors);
    }

    // Row and column vectors are both contiguous in row-major storage.
    Ok(a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x * y)
        .sum())
}

/// Submatrix of `a` with `row` and `col` removed.
fn minor(a: &Matrix, row: usize, col: usize) -> Matrix {
    let n = a.nrows() - 1;
    let mut data = Vec::with_capacity(n * (a.ncols() - 1));
    for i in (0..a.nrows()).filter(|&i| i != row) {
        for j in (0..a.ncols()).filter(|&j| j != col) {
            data.push(a.at(i, j));
        }
    }
    Matrix::from_raw((n, a.ncols() - 1), data)
}

fn cofactor_determinant(a: &Matrix) -> f64 {
    let n = a.nrows();
    if n == 1 {
        return a.at(0, 0);
    }
    if n == 2 {
        return a.at(0, 0) * a.at(1, 1) - a.at(0, 1) * a.at(1, 0);
    }

    let mut det = 0.0;
    for j in 0..n {
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * a.at(0, j) * cofactor_determinant(&minor(a, 0, j));
    }
    det
}

/// Determinant by recursive cofactor expansion along the first row.
///
/// This is O(n!). Use [`determinant_lu`] for anything beyond small matrices.
pub fn determinant(a: &Matrix) -> Result<f64> {
    require_square(a, "to calculate determinant")?;
    if a.nrows() > 8 {
        log::debug!(
            "cofactor determinant on a {}x{} matrix; this grows factorially",
            a.nrows(),
            a.ncols()
        );
    }
    Ok(cofactor_determinant(a))
}

/// Determinant from an LU factorisation with partial pivoting, O(n^3).
///
/// Agrees with [`determinant`] to within rounding on well-conditioned input
/// but follows a different floating-point path.
pub fn determinant_lu(a: &Matrix) -> Result<f64> {
    require_square(a, "to calculate determinant")?;
    let n = a.nrows();
    let mut lu = a.clone();
    let mut det = 1.0;

    for i in 0..n {
        let max_row = pivot_row(&lu, i, n);
        if max_row != i {
            lu.swap_rows(i, max_row);
            det = -det;
        }

        let pivot = lu.at(i, i);
        if pivot == 0.0 {
            return Ok(0.0);
        }
        det *= pivot;

        for k in (i + 1)..n {
            let factor = lu.at(k, i) / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in i..n {
                let value = lu.at(i, j);
                *lu.at_mut(k, j) -= factor * value;
            }
        }
    }
    Ok(det)
}

/// Row in `[col, end)` with the largest magnitude in column `col`. Ties keep
/// the earliest row.
fn pivot_row(m: &Matrix, col: usize, end: usize) -> usize {
    let mut max_row = col;
    for k in (col + 1)..end {
        if m.at(k, col).abs() > m.at(max_row, col).abs() {
            max_row = k;
        }
    }
    max_row
}

/// `[a | I]`, an `n x 2n` matrix.
fn augment_with_identity(a: &Matrix) -> Matrix {
    let n = a.nrows();
    let mut augmented = Matrix::from_raw((n, 2 * n), vec![0.0; 2 * n * n]);
    for i in 0..n {
        augmented.row_slice_mut(i)[..n].copy_from_slice(a.row_slice(i));
        *augmented.at_mut(i, i + n) = 1.0;
    }
    augmented
}

/// Inverse by Gauss-Jordan elimination with partial pivoting.
///
/// Singularity is checked twice: once on the cofactor determinant before
/// elimination starts, and again on each pivot.
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    require_square(a, "to calculate inverse")?;

    let det = determinant(a)?;
    if det.abs() < EPSILON {
        log::debug!("inverse rejected: determinant {} below tolerance", det);
        return Err(MatrixError::SingularMatrix(
            "Matrix is singular (determinant = 0), cannot compute inverse".to_string(),
        ));
    }

    let n = a.nrows();
    let width = 2 * n;
    let mut augmented = augment_with_identity(a);

    for i in 0..n {
        let max_row = pivot_row(&augmented, i, n);
        if max_row != i {
            log::trace!("inverse: swapping rows {} and {}", i, max_row);
            augmented.swap_rows(i, max_row);
        }

        let pivot = augmented.at(i, i);
        if pivot.abs() < EPSILON {
            log::debug!(
                "inverse rejected: pivot {} in column {} below tolerance",
                pivot,
                i
            );
            return Err(MatrixError::SingularMatrix("Matrix is singular".to_string()));
        }

        for value in augmented.row_slice_mut(i) {
            *value /= pivot;
        }

        for k in (0..n).filter(|&k| k != i) {
            let factor = augmented.at(k, i);
            for j in 0..width {
                let value = augmented.at(i, j);
                *augmented.at_mut(k, j) -= factor * value;
            }
        }
    }

    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        data.extend_from_slice(&augmented.row_slice(i)[n..]);
    }
    Ok(Matrix::from_raw((n, n), data))
}

/// Integer power by repeated multiplication. Negative exponents invert first.
pub fn power(a: &Matrix, exponent: i32) -> Result<Matrix> {
    require_square(a, "for exponentiation")?;
    if exponent < 0 {
        let base = inverse(a)?;
        return repeated_product(&base, exponent.unsigned_abs());
    }
    repeated_product(a, exponent.unsigned_abs())
}

fn repeated_product(a: &Matrix, exponent: u32) -> Result<Matrix> {
    match exponent {
        0 => Matrix::identity(a.nrows()),
        1 => Ok(a.copy()),
        _ => {
            log::trace!(
                "power: {} multiplications of a {}x{} matrix",
                exponent - 1,
                a.nrows(),
                a.ncols()
            );
            let mut result = a.copy();
            for _ in 1..exponent {
                result = multiply(&result, a)?;
            }
            Ok(result)
        }
    }
}

pub fn trace(a: &Matrix) -> Result<f64> {
    require_square(a, "to calculate trace")?;
    Ok((0..a.nrows()).map(|i| a.at(i, i)).sum())
}
