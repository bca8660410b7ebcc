//! Reading comparison cases from a JSON file.

use crate::models::{Family, Verdict};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// One comparison to evaluate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Case {
    /// Address family of both specifications.
    pub family: Family,
    /// First `address[/mask]` specification.
    pub spec1: String,
    /// Operation name; names outside the enumeration evaluate to `error`.
    pub operation: String,
    /// Second `address[/mask]` specification.
    pub spec2: String,
    /// Verdict the case should produce (if known).
    #[serde(default)]
    pub expected: Option<Verdict>,
}

/// Contents of a case file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CaseFile {
    pub cases: Vec<Case>,
}

/// Parse a case file from a JSON string.
///
/// Errors name the JSON path of the offending value (e.g. `cases[2].family`).
pub fn parse_cases(json: &str) -> Result<CaseFile, Box<dyn Error>> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let cases: CaseFile = serde_path_to_error::deserialize(de)
        .map_err(|e| format!("Error parsing cases JSON at {}: {}", e.path(), e.inner()))?;
    Ok(cases)
}

/// Read a case file from disk.
///
/// # Arguments
/// * `case_file` - Path to a JSON file holding `{ "cases": [...] }`
///
/// # Returns
/// * `Ok(CaseFile)` - The parsed cases
/// * `Err` - If the file doesn't exist or is not a valid case file
pub fn read_cases(case_file: &str) -> Result<CaseFile, Box<dyn Error>> {
    if !Path::new(case_file).exists() {
        return Err(format!("Case file does not exist: {case_file}").into());
    }
    log::info!("Reading cases from file: {case_file}");

    let json = std::fs::read_to_string(case_file)
        .map_err(|e| format!("Error reading case file {case_file}: {e}"))?;
    let cases = parse_cases(&json)?;

    log::info!("# Got case count = {}", cases.cases.len());
    Ok(cases)
}
