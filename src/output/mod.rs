//! Output formatting for comparison results.
//!
//! This module handles formatting and outputting batch results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{csv_row, print_csv};
pub use terminal::{format_field, print_terminal, terminal_row};

use crate::batch::{CaseResult, Summary};
use clap::ValueEnum;

/// How batch results are written to stdout.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Terminal,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.pad(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Print results in the requested format.
pub fn print_results(results: &[CaseResult], summary: &Summary, format: OutputFormat) {
    match format {
        OutputFormat::Csv => print_csv(results, summary),
        OutputFormat::Terminal => print_terminal(results, summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_names() {
        assert_eq!(
            OutputFormat::from_str("csv", true).unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_str("Terminal", true).unwrap(),
            OutputFormat::Terminal
        );
        assert!(OutputFormat::from_str("xml", true).is_err());
        assert_eq!(OutputFormat::Terminal.to_string(), "terminal");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
