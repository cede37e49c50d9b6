use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use matcalc_core::config::{DeterminantMethod, OperationParams};
use matcalc_core::math::Matrix;
use matcalc_core::operation::Operation;

use crate::grid::parse_grid;

/// Everything needed to run one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    pub version: String,
    pub operation: Operation,
    pub a: Vec<Vec<f64>>,
    pub b: Option<Vec<Vec<f64>>>,
    #[serde(flatten)]
    pub params: OperationParams,
    /// Largest row or column count accepted for either operand.
    pub max_dimension: usize,
    /// Largest `|exponent|` accepted for matrix power.
    pub max_exponent: u32,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        CalculationConfig {
            version: clap::crate_version!().to_string(),
            operation: Operation::Add,
            a: vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            b: Some(vec![vec![0.0, 0.0], vec![0.0, 0.0]]),
            params: OperationParams::default(),
            max_dimension: 10,
            max_exponent: 10,
        }
    }
}

/// Load a calculation configuration from a JSON file, strictly.
pub fn load_calculation_config<P: AsRef<Path>>(path: P) -> Result<CalculationConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CalculationConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl CalculationConfig {
    /// Read a JSON config leniently: missing or invalid fields keep their
    /// defaults with a warning. Command-line overrides are applied last.
    pub fn from_arguments(config_path: &PathBuf, matches: &ArgMatches) -> Result<Self> {
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        let mut config = CalculationConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(operation);
        load_or_default!(a);
        load_or_default!(b);
        load_or_default!(max_dimension);
        load_or_default!(max_exponent);

        match serde_json::from_value::<OperationParams>(partial.clone()) {
            Ok(params) => config.params = params,
            Err(e) => log::warn!(
                "Config Invalid operation parameters ({}), using default: {:?}",
                e,
                config.params
            ),
        }

        config.apply_overrides(matches)?;
        Ok(config)
    }

    /// Build a config entirely from the `calc` subcommand's arguments.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = CalculationConfig::default();
        if let Some(a) = matches.get_one::<String>("a") {
            config.a = parse_grid(a).context("Failed to read matrix A")?;
        }
        config.b = match matches.get_one::<String>("b") {
            Some(b) => Some(parse_grid(b).context("Failed to read matrix B")?),
            None => None,
        };
        config.apply_overrides(matches)?;
        Ok(config)
    }

    /// Apply the operation and parameter flags shared by every calculating
    /// subcommand.
    pub fn apply_overrides(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(operation) = matches.get_one::<String>("operation") {
            self.operation = Operation::from_str(operation).map_err(anyhow::Error::msg)?;
        }
        if let Some(scalar) = matches.get_one::<f64>("scalar") {
            self.params.scalar = *scalar;
        }
        if let Some(exponent) = matches.get_one::<i32>("exponent") {
            self.params.exponent = *exponent;
        }
        if let Some(method) = matches.get_one::<String>("det_method") {
            self.params.determinant =
                DeterminantMethod::from_str(method).map_err(anyhow::Error::msg)?;
        }
        Ok(())
    }

    /// Refuse inputs whose evaluation cost the calculator does not accept.
    pub fn check_limits(&self, a: &Matrix, b: Option<&Matrix>) -> Result<(), LimitExceeded> {
        for (name, m) in std::iter::once(("A", a)).chain(b.map(|b| ("B", b))) {
            if m.nrows() > self.max_dimension || m.ncols() > self.max_dimension {
                return Err(LimitExceeded(format!(
                    "Matrix {} is {}x{}; at most {}x{} is supported",
                    name,
                    m.nrows(),
                    m.ncols(),
                    self.max_dimension,
                    self.max_dimension
                )));
            }
        }
        if self.operation == Operation::Power
            && self.params.exponent.unsigned_abs() > self.max_exponent
        {
            return Err(LimitExceeded(format!(
                "Exponent {} is outside [-{}, {}]",
                self.params.exponent, self.max_exponent, self.max_exponent
            )));
        }
        Ok(())
    }
}

/// An input was rejected before evaluation because it exceeds a configured
/// limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitExceeded(pub String);

impl fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for LimitExceeded {}
