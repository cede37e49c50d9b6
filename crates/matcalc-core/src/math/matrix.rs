use std::fmt;
use std::ops::{Index, IndexMut};

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MatrixError, Result};

/// Absolute tolerance shared by equality, symmetry and singularity checks.
pub const EPSILON: f64 = 1e-10;

/// Dense, row-major matrix of `f64`.
///
/// A `Matrix` always has at least one row and one column and its buffer
/// always holds exactly `rows * cols` values. Cloning deep-copies the buffer.
#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Zero-initialised `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions(
                "Matrix dimensions must be positive".to_string(),
            ));
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions(
                "Matrix dimensions must be positive".to_string(),
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidDimensions(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Wraps a buffer whose shape the caller has already established.
    #[inline]
    pub(crate) fn from_raw(shape: (usize, usize), data: Vec<f64>) -> Self {
        debug_assert!(shape.0 > 0 && shape.1 > 0 && data.len() == shape.0 * shape.1);
        Self {
            data,
            rows: shape.0,
            cols: shape.1,
        }
    }

    /// Deep copy of a rectangular grid of rows.
    pub fn from_rows<R: AsRef<[f64]>>(grid: &[R]) -> Result<Self> {
        let first = grid
            .first()
            .ok_or_else(|| MatrixError::InvalidDimensions("Invalid matrix data".to_string()))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::InvalidDimensions(
                "Invalid matrix data".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::InvalidDimensions(
                    "All rows must have the same number of columns".to_string(),
                ));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: grid.len(),
            cols,
        })
    }

    pub fn identity(size: usize) -> Result<Self> {
        let mut result = Self::new(size, size)?;
        for i in 0..size {
            result[(i, i)] = 1.0;
        }
        Ok(result)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// Matrix whose elements are drawn independently and uniformly from
    /// `[min, max)` using the supplied random source.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
            return Err(MatrixError::InvalidRange { min, max });
        }
        let mut result = Self::new(rows, cols)?;
        let dist = Uniform::new(min, max);
        for value in result.data.iter_mut() {
            *value = rng.sample(&dist);
        }
        Ok(result)
    }

    /// Same as [`Matrix::random`] with a `StdRng` seeded from `seed`, so the
    /// output is reproducible.
    pub fn random_seeded(rows: usize, cols: usize, min: f64, max: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(rows, cols, min, max, &mut rng)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                if (self.at(i, j) - self.at(j, i)).abs() > EPSILON {
                    return false;
                }
            }
        }
        true
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.at(row, col))
    }

    /// Checked element write. This is the only in-place mutation a matrix
    /// offers outside of the engine.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        *self.at_mut(row, col) = value;
        Ok(())
    }

    /// Fast read for the engine's inner loops; bounds are the caller's
    /// responsibility.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[self.offset(row, col)]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        debug_assert!(row < self.rows && col < self.cols);
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [f64] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Owned copy of the grid, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|v| f(*v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise comparison with an explicit absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            if (a - b).abs() > tolerance {
                return false;
            }
        }
        true
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(&value)
    }
}

impl TryFrom<&[Vec<f64>]> for Matrix {
    type Error = MatrixError;

    fn try_from(value: &[Vec<f64>]) -> Result<Self> {
        Matrix::from_rows(value)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            write!(f, "[")?;
            for (idx, value) in row.iter().enumerate() {
                write!(f, "{:10.4}", value)?;
                if idx + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_rows_exchanges_whole_rows() {
        let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        m.swap_rows(2, 0);
        assert_eq!(m.row_slice(0), &[5.0, 6.0]);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
        assert_eq!(m.row_slice(2), &[1.0, 2.0]);

        m.swap_rows(1, 1);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    }

    #[test]
    fn row_slice_mut_writes_through() {
        let mut m = Matrix::zeros(2, 3).unwrap();
        m.row_slice_mut(1).copy_from_slice(&[7.0, 8.0, 9.0]);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_range() {
        let m = Matrix::zeros(2, 2).unwrap();
        let _ = m[(0, 2)];
    }
}
