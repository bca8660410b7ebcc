//! Comparison operations and their tri-state outcome.

use super::NameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relational operation requested by the caller.
///
/// The enumeration carries every operation a definition may name. Address
/// comparison only recognizes the relational ones; the rest evaluate to
/// [`Verdict::Error`].
///
/// Serialized as its [`Operation::as_str`] name.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Operation {
    Equals,
    NotEqual,
    CaseInsensitiveEquals,
    CaseInsensitiveNotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    BitwiseAnd,
    BitwiseOr,
    PatternMatch,
    SubsetOf,
    SupersetOf,
}

impl Operation {
    /// All operations, in definition order.
    pub const ALL: [Operation; 13] = [
        Operation::Equals,
        Operation::NotEqual,
        Operation::CaseInsensitiveEquals,
        Operation::CaseInsensitiveNotEqual,
        Operation::GreaterThan,
        Operation::LessThan,
        Operation::GreaterThanOrEqual,
        Operation::LessThanOrEqual,
        Operation::BitwiseAnd,
        Operation::BitwiseOr,
        Operation::PatternMatch,
        Operation::SubsetOf,
        Operation::SupersetOf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Equals => "equals",
            Operation::NotEqual => "not equal",
            Operation::CaseInsensitiveEquals => "case insensitive equals",
            Operation::CaseInsensitiveNotEqual => "case insensitive not equal",
            Operation::GreaterThan => "greater than",
            Operation::LessThan => "less than",
            Operation::GreaterThanOrEqual => "greater than or equal",
            Operation::LessThanOrEqual => "less than or equal",
            Operation::BitwiseAnd => "bitwise and",
            Operation::BitwiseOr => "bitwise or",
            Operation::PatternMatch => "pattern match",
            Operation::SubsetOf => "subset of",
            Operation::SupersetOf => "superset of",
        }
    }
}

impl FromStr for Operation {
    type Err = NameError;

    /// Accepts the definition spelling (`"subset of"`) as well as the
    /// underscore form (`"subset_of"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', " ");
        Operation::ALL
            .iter()
            .find(|op| op.as_str() == wanted)
            .copied()
            .ok_or_else(|| NameError::UnknownOperation(s.to_string()))
    }
}

impl From<Operation> for &'static str {
    fn from(op: Operation) -> Self {
        op.as_str()
    }
}

impl TryFrom<String> for Operation {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome of a comparison.
///
/// `Error` means the test could not be evaluated; it is never a comparison result.
///
/// Serialized as its [`Verdict::as_str`] name.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Verdict {
    True,
    False,
    Error,
}

impl Verdict {
    pub fn is_error(&self) -> bool {
        matches!(self, Verdict::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
            Verdict::Error => "error",
        }
    }
}

impl From<bool> for Verdict {
    fn from(b: bool) -> Self {
        if b {
            Verdict::True
        } else {
            Verdict::False
        }
    }
}

impl FromStr for Verdict {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Verdict::True, Verdict::False, Verdict::Error]
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| NameError::UnknownVerdict(s.to_string()))
    }
}

impl From<Verdict> for &'static str {
    fn from(v: Verdict) -> Self {
        v.as_str()
    }
}

impl TryFrom<String> for Verdict {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, NameError> {
        s.parse()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
