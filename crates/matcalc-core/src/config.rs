use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm used when a determinant is requested directly.
///
/// Inversion always uses the cofactor determinant for its singularity
/// pre-check, regardless of this setting.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeterminantMethod {
    /// Recursive Laplace expansion along the first row. Factorial cost.
    #[default]
    Cofactor,
    /// LU factorisation with partial pivoting. Cubic cost.
    Lu,
}

impl FromStr for DeterminantMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cofactor" | "laplace" => Ok(DeterminantMethod::Cofactor),
            "lu" => Ok(DeterminantMethod::Lu),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected 'cofactor' or 'lu'",
                s
            )),
        }
    }
}

impl fmt::Display for DeterminantMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeterminantMethod::Cofactor => write!(f, "cofactor"),
            DeterminantMethod::Lu => write!(f, "lu"),
        }
    }
}

/// Extra inputs some operations take besides their matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OperationParams {
    /// Multiplier for scalar multiplication.
    pub scalar: f64,
    /// Exponent for matrix power.
    pub exponent: i32,
    pub determinant: DeterminantMethod,
}

impl OperationParams {
    pub fn new(scalar: f64, exponent: i32, determinant: DeterminantMethod) -> Self {
        Self {
            scalar,
            exponent,
            determinant,
        }
    }
}

impl Default for OperationParams {
    fn default() -> Self {
        Self {
            scalar: 1.0,
            exponent: 2,
            determinant: DeterminantMethod::Cofactor,
        }
    }
}
