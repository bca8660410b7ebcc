//! Terminal output utilities.
//!
//! Provides formatting helpers and a coloured table for terminal output.

use crate::batch::{CaseResult, Summary};
use crate::models::Verdict;
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn colored_verdict(r: &CaseResult) -> ColoredString {
    let text = format!("{:>5}", r.verdict);
    match (r.matched(), r.verdict) {
        (Some(false), _) => text.on_red(),
        (_, Verdict::Error) => text.yellow(),
        (_, Verdict::True) => text.green(),
        (_, Verdict::False) => text.normal(),
    }
}

/// Format one result as a plain-text table row.
pub fn terminal_row(r: &CaseResult) -> String {
    let expected = match r.case.expected {
        Some(v) if r.matched() == Some(false) => format!(" (expected {v})"),
        _ => String::new(),
    };
    format!(
        "{j:>4} {family:<12} {spec1:>24} {operation:^23} {spec2:<24} => {verdict}{expected}",
        j = r.index,
        family = r.case.family,
        spec1 = r.case.spec1,
        operation = r.case.operation,
        spec2 = r.case.spec2,
        verdict = colored_verdict(r),
    )
}

/// Print results as a coloured table, mismatches highlighted.
pub fn print_terminal(results: &[CaseResult], summary: &Summary) {
    for r in results {
        println!("{}", terminal_row(r));
    }
    let mismatched = format!("mismatched={}", summary.mismatched);
    println!(
        "total={} matched={} {} errors={}",
        summary.total,
        summary.matched,
        if summary.mismatched > 0 {
            mismatched.on_red()
        } else {
            mismatched.normal()
        },
        summary.errors
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Case;
    use crate::models::Family;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("true", 10), "    \"true\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("false", 7), "\"false\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("192.168.1.0/24", 5), "\"192.168.1.0/24\"");
    }

    #[test]
    fn test_format_field_verdict() {
        assert_eq!(format_field(Verdict::Error, 9), "  \"error\"");
    }

    #[test]
    fn test_terminal_row_mismatch() {
        colored::control::set_override(false);
        let r = CaseResult {
            index: 1,
            case: Case {
                family: Family::Ipv4,
                spec1: "10.0.0.0/8".to_string(),
                operation: "superset of".to_string(),
                spec2: "10.1.0.0/16".to_string(),
                expected: Some(Verdict::False),
            },
            verdict: Verdict::True,
        };
        let row = terminal_row(&r);
        assert!(row.contains("=>  true (expected false)"), "row: {row}");
        assert!(row.starts_with("   1 ipv4_address"));
    }
}
