//! Evaluation of a whole case file.

use super::{Case, CaseFile};
use crate::compare::compare_named;
use crate::models::Verdict;

/// Result of evaluating a single [`Case`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    /// Position of the case in its file.
    pub index: usize,
    pub case: Case,
    pub verdict: Verdict,
}

impl CaseResult {
    /// Whether the verdict matches the expected one; `None` if nothing was expected.
    pub fn matched(&self) -> Option<bool> {
        self.case.expected.map(|expected| expected == self.verdict)
    }
}

/// Counts over a batch of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub errors: usize,
}

impl Summary {
    pub fn from_results(results: &[CaseResult]) -> Summary {
        let mut summary = Summary {
            total: results.len(),
            ..Default::default()
        };
        for r in results {
            match r.matched() {
                Some(true) => summary.matched += 1,
                Some(false) => summary.mismatched += 1,
                None => {}
            }
            if r.verdict.is_error() {
                summary.errors += 1;
            }
        }
        summary
    }
}

/// Evaluate every case in order.
pub fn evaluate_cases(file: &CaseFile) -> Vec<CaseResult> {
    file.cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let verdict = compare_named(case.family, &case.spec1, &case.spec2, &case.operation);
            log::debug!(
                "case {index}: {} {} {} {} => {verdict}",
                case.family,
                case.spec1,
                case.operation,
                case.spec2
            );
            CaseResult {
                index,
                case: case.clone(),
                verdict,
            }
        })
        .collect()
}
