use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use matcalc_core::math::Matrix;
use matcalc_core::MatrixError;

/// Example operand pairs offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// A = I₂, B = [[2, 1], [1, 2]].
    Identity2x2,
    /// Two 3x3 matrices drawn uniformly from [-5, 5).
    Random3x3,
    /// The system 2x + y = 5, x + 2y = 4 as coefficients A and right-hand side B.
    System,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Identity2x2, Preset::Random3x3, Preset::System];

    /// Operands A and B. `seed` makes `Random3x3` reproducible; without it the
    /// thread-local generator is used.
    pub fn operands(&self, seed: Option<u64>) -> Result<(Matrix, Matrix), MatrixError> {
        match self {
            Preset::Identity2x2 => Ok((
                Matrix::identity(2)?,
                Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]])?,
            )),
            Preset::Random3x3 => match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    Ok((
                        Matrix::random(3, 3, -5.0, 5.0, &mut rng)?,
                        Matrix::random(3, 3, -5.0, 5.0, &mut rng)?,
                    ))
                }
                None => {
                    let mut rng = thread_rng();
                    Ok((
                        Matrix::random(3, 3, -5.0, 5.0, &mut rng)?,
                        Matrix::random(3, 3, -5.0, 5.0, &mut rng)?,
                    ))
                }
            },
            Preset::System => Ok((
                Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]])?,
                Matrix::from_rows(&[[5.0], [4.0]])?,
            )),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Identity2x2 => "identity2x2",
            Preset::Random3x3 => "random3x3",
            Preset::System => "system",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity2x2" | "identity" => Ok(Preset::Identity2x2),
            "random3x3" | "random" => Ok(Preset::Random3x3),
            "system" => Ok(Preset::System),
            _ => Err(format!(
                "Unknown example: {}. Expected one of identity2x2, random3x3, system",
                s
            )),
        }
    }
}
