use std::fs;

use anyhow::{Context, Result};

/// Parse a numeric grid given as JSON (`[[1, 2], [3, 4]]`), or read it from
/// the file named after a leading `@`.
///
/// Only the JSON shape is checked here; rectangularity is validated when the
/// grid becomes a `Matrix`.
pub fn parse_grid(input: &str) -> Result<Vec<Vec<f64>>> {
    let text = match input.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read matrix file: {}", path))?,
        None => input.to_string(),
    };
    let grid: Vec<Vec<f64>> = serde_json::from_str(text.trim())
        .with_context(|| format!("Invalid matrix, expected a JSON array of rows: {}", text.trim()))?;
    Ok(grid)
}
