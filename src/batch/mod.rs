//! Batch evaluation of comparison cases.
//!
//! - [`cases`] - Reading case files
//! - [`run`] - Evaluating cases and summarising the outcome

mod cases;
mod run;

pub use cases::{parse_cases, read_cases, Case, CaseFile};
pub use run::{evaluate_cases, CaseResult, Summary};
