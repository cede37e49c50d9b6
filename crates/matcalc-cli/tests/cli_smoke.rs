//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `matcalc` binary to check argument parsing,
//! result panels and error panels end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("matcalc").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("example"))
        .stdout(predicate::str::contains("operations"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matcalc"));
}

#[test]
fn operations_lists_every_operation() {
    cmd()
        .arg("operations")
        .assert()
        .success()
        .stdout(predicate::str::contains("scalar_multiply"))
        .stdout(predicate::str::contains("Multiplication (A × B)"))
        .stdout(predicate::str::contains("Determinant (det(A))"));
}

// ---------------------------------------------------------------------------
// calc subcommand
// ---------------------------------------------------------------------------

#[test]
fn calc_add_prints_tidied_result() {
    cmd()
        .args(["calc", "add", "-a", "[[1,2],[3,4]]", "-b", "[[5,6],[7,8]]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation: Addition (A + B)"))
        .stdout(predicate::str::contains("[       6         8]"))
        .stdout(predicate::str::contains("[      10        12]"));
}

#[test]
fn calc_determinant() {
    cmd()
        .args(["calc", "det", "-a", "[[1,2],[3,4]]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Determinant: -2.0000"));
}

#[test]
fn calc_determinant_lu_method() {
    cmd()
        .args(["calc", "determinant", "-a", "[[2,0],[0,3]]", "--det-method", "lu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Determinant: 6.0000"));
}

#[test]
fn calc_inverse_shows_verification() {
    cmd()
        .args(["calc", "inverse", "-a", "[[4,7],[2,6]]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inverse:"))
        .stdout(predicate::str::contains("-0.7000"))
        .stdout(predicate::str::contains("Verification (A × A⁻¹):"));
}

#[test]
fn calc_inverse_of_singular_matrix_fails() {
    cmd()
        .args(["calc", "inverse", "-a", "[[1,2],[2,4]]"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Operation: Inverse (A⁻¹) - ERROR"))
        .stdout(predicate::str::contains(
            "❌ Error: Matrix is singular (determinant = 0), cannot compute inverse",
        ))
        .stdout(predicate::str::contains("Please check:"));
}

#[test]
fn calc_add_with_mismatched_shapes_fails() {
    cmd()
        .args(["calc", "add", "-a", "[[1,2],[3,4]]", "-b", "[[1,2,3]]"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Matrix dimensions must match for addition",
        ));
}

#[test]
fn calc_multiply_without_b_fails() {
    cmd()
        .args(["calc", "multiply", "-a", "[[1,2],[3,4]]"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("requires a second matrix"));
}

#[test]
fn calc_negative_scalar() {
    cmd()
        .args(["calc", "scalar", "-a", "[[1,2]]", "-s", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scalar: -2.0"))
        .stdout(predicate::str::contains("[      -2        -4]"));
}

#[test]
fn calc_dot_product() {
    cmd()
        .args(["calc", "dot", "-a", "[[1,2,3]]", "-b", "[[4,5,6]]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dot Product: 32.0000"));
}

#[test]
fn calc_power_beyond_limit_fails() {
    cmd()
        .args(["calc", "power", "-a", "[[1,1],[0,1]]", "-e", "11"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Exponent 11 is outside [-10, 10]"));
}

#[test]
fn calc_unknown_operation_errors() {
    cmd()
        .args(["calc", "frobnicate", "-a", "[[1]]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation"));
}

#[test]
fn calc_malformed_matrix_errors() {
    cmd()
        .args(["calc", "transpose", "-a", "[[1,2],[3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read matrix A"));
}

// ---------------------------------------------------------------------------
// run subcommand
// ---------------------------------------------------------------------------

#[test]
fn run_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.json");
    std::fs::write(
        &path,
        r#"{"operation": "trace", "a": [[1, 2], [3, 4]]}"#,
    )
    .unwrap();

    cmd()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation: Trace"))
        .stdout(predicate::str::contains("Trace: 5.0000"));
}

#[test]
fn run_operation_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.json");
    std::fs::write(
        &path,
        r#"{"operation": "trace", "a": [[1, 2], [3, 4]]}"#,
    )
    .unwrap();

    cmd()
        .args(["run", path.to_str().unwrap(), "-o", "transpose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transpose:"))
        .stdout(predicate::str::contains("[       1         3]"));
}

#[test]
fn run_nonexistent_config_errors() {
    cmd()
        .args(["run", "/nonexistent/calc.json"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// example & random subcommands
// ---------------------------------------------------------------------------

#[test]
fn example_without_operation_lists_operands() {
    cmd()
        .args(["example", "identity2x2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrix A:"))
        .stdout(predicate::str::contains("Matrix B:"));
}

#[test]
fn example_system_multiply() {
    // [[2,1],[1,2]] x [[5],[4]] = [[14],[13]]
    cmd()
        .args(["example", "system", "-o", "multiply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[      14]"))
        .stdout(predicate::str::contains("[      13]"));
}

#[test]
fn random_with_seed_is_reproducible() {
    let first = cmd()
        .args(["random", "-r", "2", "-c", "3", "--seed", "7"])
        .output()
        .unwrap();
    let second = cmd()
        .args(["random", "-r", "2", "-c", "3", "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 2);
}

#[test]
fn random_with_empty_range_errors() {
    cmd()
        .args(["random", "-r", "2", "-c", "2", "--min", "3", "--max", "3"])
        .assert()
        .failure();
}
