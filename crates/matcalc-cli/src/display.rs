//! Text rendering of results and failures.

use matcalc_core::config::OperationParams;
use matcalc_core::math::Matrix;
use matcalc_core::operation::{Operation, Outcome};
use matcalc_core::MatrixError;

use crate::config::LimitExceeded;

const REMEDIATION_HINT: &str = "Please check:\n\
                                1. Matrix dimensions are compatible\n\
                                2. Matrix is not singular (for inverse)\n\
                                3. Input values are valid numbers";

/// Raw result text for an operation, before row tidying.
///
/// `verification` is `A × A⁻¹` and is only shown for inverses.
pub fn result_text(
    operation: Operation,
    a: &Matrix,
    outcome: &Outcome,
    params: &OperationParams,
    verification: Option<&Matrix>,
) -> String {
    match (operation, outcome) {
        (Operation::ScalarMultiply, Outcome::Matrix(result)) => {
            format!("Scalar: {:?}\n\nResult:\n{}", params.scalar, result)
        }
        (Operation::Transpose, Outcome::Matrix(result)) => {
            format!("Original:\n{}\nTranspose:\n{}", a, result)
        }
        (Operation::Inverse, Outcome::Matrix(result)) => {
            let mut text = format!("Original:\n{}\nInverse:\n{}", a, result);
            if let Some(check) = verification {
                text.push_str(&format!("\n\nVerification (A × A⁻¹):\n{}", check));
            }
            text
        }
        (Operation::Power, Outcome::Matrix(result)) => {
            format!("Exponent: {}\n\nResult:\n{}", params.exponent, result)
        }
        (Operation::DotProduct, Outcome::Scalar(v)) => format!("Dot Product: {:.4}", v),
        (Operation::Determinant, Outcome::Scalar(v)) => format!("Determinant: {:.4}", v),
        (Operation::Trace, Outcome::Scalar(v)) => format!("Trace: {:.4}", v),
        (_, Outcome::Matrix(result)) => result.to_string(),
        (_, Outcome::Scalar(v)) => format!("{:.4}", v),
    }
}

/// Re-align bracketed matrix rows: whole numbers print as 8-wide integers,
/// everything else as `{:10.4}`; other lines pass through trimmed.
pub fn tidy_matrix_text(text: &str) -> String {
    let mut formatted = String::new();
    for line in text.trim_end_matches('\n').split('\n') {
        let line = line.trim();
        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            let numbers = &line[1..line.len() - 1];
            let cells: Vec<String> = numbers.split(',').map(tidy_cell).collect();
            formatted.push('[');
            formatted.push_str(&cells.join("  "));
            formatted.push_str("]\n");
        } else {
            formatted.push_str(line);
            formatted.push('\n');
        }
    }
    formatted
}

fn tidy_cell(cell: &str) -> String {
    let cell = cell.trim();
    match cell.parse::<f64>() {
        Ok(d) if (d - d.round()).abs() < 0.000001 => format!("{:8}", d.round() as i64),
        Ok(d) => format!("{:10.4}", d),
        Err(_) => format!("{:>10}", cell),
    }
}

/// Full success panel: operation header followed by the result body.
pub fn render_result(operation: Operation, body: &str) -> String {
    let body = if body.contains('[') && body.contains(']') {
        tidy_matrix_text(body)
    } else {
        format!("{}\n", body)
    };
    format!("Operation: {}\n{}", operation, body)
}

/// Failure panel for an error message, with the remediation hint.
pub fn render_error(operation: Operation, message: &str) -> String {
    format!(
        "Operation: {} - ERROR\n❌ Error: {}\n\n{}\n",
        operation, message, REMEDIATION_HINT
    )
}

/// Failure panel for any error. Matrix and limit errors show their own
/// message; anything else is reported as unexpected.
pub fn render_failure(operation: Operation, err: &anyhow::Error) -> String {
    if let Some(matrix_err) = err.downcast_ref::<MatrixError>() {
        render_error(operation, &matrix_err.to_string())
    } else if let Some(limit) = err.downcast_ref::<LimitExceeded>() {
        render_error(operation, &limit.to_string())
    } else {
        log::error!("Unexpected failure during {}: {:#}", operation.name(), err);
        render_error(operation, &format!("Unexpected error: {:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tidy_cell_integers_and_fractions() {
        assert_eq!(tidy_cell("    6.0000"), "       6");
        assert_eq!(tidy_cell("-0.7000"), "   -0.7000");
        assert_eq!(tidy_cell("abc"), "       abc");
    }

    #[test]
    fn tidy_keeps_non_matrix_lines() {
        let text = "Scalar: 2.0\n\nResult:\n[    2.0000,     0.5000]\n";
        assert_eq!(
            tidy_matrix_text(text),
            "Scalar: 2.0\n\nResult:\n[       2      0.5000]\n"
        );
    }
}
