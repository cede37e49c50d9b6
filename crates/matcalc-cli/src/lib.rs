//! matcalc-cli: command-line front-end for the matcalc matrix calculator.
//!
//! Parses numeric grids and parameters, applies the calculator's input
//! limits, runs one operation and renders the result or the failure the way
//! the calculator's result panel does.
pub mod calculator;
pub mod config;
pub mod display;
pub mod grid;
pub mod presets;
