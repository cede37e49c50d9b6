use thiserror::Error;

/// Failures raised while constructing matrices or evaluating operations on them.
///
/// Every variant is raised where the problem is detected and propagated
/// unchanged; the library never recovers locally.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatrixError {
    /// Zero rows or columns, an empty or ragged grid, or a buffer whose
    /// length does not match the requested shape.
    #[error("{0}")]
    InvalidDimensions(String),
    /// Operand shapes are incompatible for add, subtract or multiply.
    #[error("{0}")]
    DimensionMismatch(String),
    /// A square-only operation received a non-square matrix.
    #[error("{0}")]
    NonSquareMatrix(String),
    /// The determinant or a pivot fell below tolerance during inversion.
    #[error("{0}")]
    SingularMatrix(String),
    #[error("Both matrices must be vectors of the same dimension")]
    IncompatibleVectors,
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid random range [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },
    /// A two-operand operation was evaluated without a second matrix.
    #[error("{0} requires a second matrix")]
    MissingOperand(String),
}

impl MatrixError {
    /// Stable name of the error kind, independent of the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            MatrixError::InvalidDimensions(_) => "InvalidDimensions",
            MatrixError::DimensionMismatch(_) => "DimensionMismatch",
            MatrixError::NonSquareMatrix(_) => "NonSquareMatrix",
            MatrixError::SingularMatrix(_) => "SingularMatrix",
            MatrixError::IncompatibleVectors => "IncompatibleVectors",
            MatrixError::IndexOutOfRange { .. } => "IndexOutOfRange",
            MatrixError::InvalidRange { .. } => "InvalidRange",
            MatrixError::MissingOperand(_) => "MissingOperand",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
