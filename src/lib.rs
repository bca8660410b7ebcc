//! Comparison of IPv4 and IPv6 address specifications.
//!
//! Two `address[/mask]` strings and an [`Operation`] give a tri-state
//! [`Verdict`]. See [`compare_ipv4`] and [`compare_ipv6`].

pub mod batch;
pub mod compare;
pub mod config;
pub mod models;
pub mod output;

pub use compare::{compare, compare_ipv4, compare_ipv6, compare_named};
pub use models::{Family, Operation, Verdict};

use batch::{evaluate_cases, read_cases, Summary};
use output::{print_results, OutputFormat};
use std::error::Error;

/// Read a case file, evaluate it and print the results.
///
/// # Returns
/// * `Ok(Summary)` - Counts over all evaluated cases
/// * `Err` - If the case file can't be read or parsed
pub fn run_batch(case_file: &str, format: OutputFormat) -> Result<Summary, Box<dyn Error>> {
    let cases = read_cases(case_file)?;
    let results = evaluate_cases(&cases);
    let summary = Summary::from_results(&results);
    print_results(&results, &summary, format);

    if summary.mismatched > 0 {
        log::warn!("{} case(s) did not match their expected verdict", summary.mismatched);
    }
    Ok(summary)
}

/// Process exit status for a single verdict: 0 true, 1 false, 2 error.
pub fn verdict_exit_code(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::True => 0,
        Verdict::False => 1,
        Verdict::Error => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_exit_code() {
        assert_eq!(verdict_exit_code(Verdict::True), 0);
        assert_eq!(verdict_exit_code(Verdict::False), 1);
        assert_eq!(verdict_exit_code(Verdict::Error), 2);
    }

    #[test]
    fn test_run_batch() {
        let summary = run_batch("tests/test_data/cases_01.json", OutputFormat::Csv)
            .expect("Error running batch");
        assert_eq!(summary.total, 11);
        assert_eq!(summary.mismatched, 0);
        assert_eq!(summary.matched, 10);
        assert_eq!(summary.errors, 2);
    }

    #[test]
    fn test_run_batch_missing_file() {
        assert!(run_batch("tests/test_data/nope.json", OutputFormat::Terminal).is_err());
    }
}
