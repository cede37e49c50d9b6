//! The calculator's operation catalogue and a single entry point to run any
//! of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{DeterminantMethod, OperationParams};
use crate::error::{MatrixError, Result};
use crate::math::Matrix;
use crate::ops;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    ScalarMultiply,
    Transpose,
    Inverse,
    DotProduct,
    Determinant,
    Power,
    Trace,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 10] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::ScalarMultiply,
        Operation::Transpose,
        Operation::Inverse,
        Operation::DotProduct,
        Operation::Determinant,
        Operation::Power,
        Operation::Trace,
    ];

    /// Whether the operation reads matrix B as well as matrix A.
    pub fn needs_second_operand(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::DotProduct
        )
    }

    /// Short machine name, accepted back by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::ScalarMultiply => "scalar_multiply",
            Operation::Transpose => "transpose",
            Operation::Inverse => "inverse",
            Operation::DotProduct => "dot_product",
            Operation::Determinant => "determinant",
            Operation::Power => "power",
            Operation::Trace => "trace",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Add => "Addition (A + B)",
            Operation::Subtract => "Subtraction (A - B)",
            Operation::Multiply => "Multiplication (A × B)",
            Operation::ScalarMultiply => "Scalar Multiplication",
            Operation::Transpose => "Transpose (Aᵀ)",
            Operation::Inverse => "Inverse (A⁻¹)",
            Operation::DotProduct => "Dot Product",
            Operation::Determinant => "Determinant (det(A))",
            Operation::Power => "Power (Aⁿ)",
            Operation::Trace => "Trace",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "add" | "addition" => Ok(Operation::Add),
            "subtract" | "subtraction" | "sub" => Ok(Operation::Subtract),
            "multiply" | "multiplication" | "mul" => Ok(Operation::Multiply),
            "scalar" | "scalar_multiply" | "scale" => Ok(Operation::ScalarMultiply),
            "transpose" => Ok(Operation::Transpose),
            "inverse" | "inv" => Ok(Operation::Inverse),
            "dot" | "dot_product" => Ok(Operation::DotProduct),
            "determinant" | "det" => Ok(Operation::Determinant),
            "power" | "pow" => Ok(Operation::Power),
            "trace" => Ok(Operation::Trace),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

/// Result of running an [`Operation`]: either a new matrix or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

impl Outcome {
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Outcome::Matrix(m) => Some(m),
            Outcome::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Matrix(_) => None,
            Outcome::Scalar(v) => Some(*v),
        }
    }
}

/// Run `operation` on `a` (and `b` for two-operand operations).
///
/// `b` is ignored by single-operand operations. A two-operand operation
/// without `b` fails with [`MatrixError::MissingOperand`].
pub fn evaluate(
    operation: Operation,
    a: &Matrix,
    b: Option<&Matrix>,
    params: &OperationParams,
) -> Result<Outcome> {
    log::debug!(
        "evaluating {} on A {}x{}{}",
        operation.name(),
        a.nrows(),
        a.ncols(),
        b.map(|b| format!(", B {}x{}", b.nrows(), b.ncols()))
            .unwrap_or_default()
    );

    let second = || b.ok_or_else(|| MatrixError::MissingOperand(operation.to_string()));

    let outcome = match operation {
        Operation::Add => Outcome::Matrix(ops::add(a, second()?)?),
        Operation::Subtract => Outcome::Matrix(ops::subtract(a, second()?)?),
        Operation::Multiply => Outcome::Matrix(ops::multiply(a, second()?)?),
        Operation::ScalarMultiply => Outcome::Matrix(ops::scalar_multiply(a, params.scalar)),
        Operation::Transpose => Outcome::Matrix(ops::transpose(a)),
        Operation::Inverse => Outcome::Matrix(ops::inverse(a)?),
        Operation::DotProduct => Outcome::Scalar(ops::dot_product(a, second()?)?),
        Operation::Determinant => Outcome::Scalar(match params.determinant {
            DeterminantMethod::Cofactor => ops::determinant(a)?,
            DeterminantMethod::Lu => ops::determinant_lu(a)?,
        }),
        Operation::Power => Outcome::Matrix(ops::power(a, params.exponent)?),
        Operation::Trace => Outcome::Scalar(ops::trace(a)?),
    };
    Ok(outcome)
}
