//! CSV output formatting for comparison results.

use crate::batch::{CaseResult, Summary};

use super::terminal::format_field;

/// Print results as CSV to stdout, followed by a summary comment line.
pub fn print_csv(results: &[CaseResult], summary: &Summary) {
    log::info!("#Start print_csv() rows = {}", results.len());

    println!(
        r#" "cnt",        "family",            "spec1",             "operation",            "spec2", "verdict", "expected""#
    );
    for r in results {
        println!("{}", csv_row(r));
    }
    println!(
        "# total={} matched={} mismatched={} errors={}",
        summary.total, summary.matched, summary.mismatched, summary.errors
    );
}

/// Format one result as a CSV row.
pub fn csv_row(r: &CaseResult) -> String {
    let expected = r
        .case
        .expected
        .map(|v| v.to_string())
        .unwrap_or_default();
    format!(
        r#"{j},{family},{spec1},{operation},{spec2},{verdict},{expected}"#,
        j = format_field(r.index, 6),
        family = format_field(r.case.family, 14),
        spec1 = format_field(&r.case.spec1, 24),
        operation = format_field(&r.case.operation, 23),
        spec2 = format_field(&r.case.spec2, 24),
        verdict = format_field(r.verdict, 9),
        expected = format_field(expected, 10),
    )
}
