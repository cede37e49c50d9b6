use anyhow::Result;

use matcalc_core::math::Matrix;
use matcalc_core::operation::{evaluate, Operation, Outcome};
use matcalc_core::ops;

use crate::config::CalculationConfig;
use crate::display::{render_result, result_text};

/// Build the operands described by `config`, run its operation and return
/// the rendered result panel.
///
/// Matrix B is only read for operations that take two operands.
pub fn run_calculation(config: &CalculationConfig) -> Result<String> {
    let operation = config.operation;
    let a = Matrix::from_rows(&config.a)?;
    let b = if operation.needs_second_operand() {
        config
            .b
            .as_ref()
            .map(|grid| Matrix::from_rows(grid))
            .transpose()?
    } else {
        None
    };

    if let Err(limit) = config.check_limits(&a, b.as_ref()) {
        log::warn!("Refusing {}: {}", operation.name(), limit);
        return Err(limit.into());
    }

    let outcome = evaluate(operation, &a, b.as_ref(), &config.params)?;
    log::info!("[matcalc] {} completed", operation);

    let verification = match (&outcome, operation) {
        (Outcome::Matrix(inverse), Operation::Inverse) => Some(ops::multiply(&a, inverse)?),
        _ => None,
    };

    let body = result_text(operation, &a, &outcome, &config.params, verification.as_ref());
    Ok(render_result(operation, &body))
}

/// Operand listing for an example preset, rendered like the input tables.
pub fn describe_operands(a: &Matrix, b: &Matrix) -> String {
    format!("Matrix A:\n{}\nMatrix B:\n{}", a, b)
}
