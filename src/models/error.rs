//! Error types raised while reading address specifications and names.

use thiserror::Error;

/// Why an `address[/mask]` specification could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The address part is not a valid literal for the family.
    #[error("malformed address '{0}'")]
    MalformedAddress(String),

    /// The mask part is neither a prefix length nor (IPv4 only) a dotted netmask.
    #[error("malformed mask '{0}'")]
    MalformedMask(String),
}

/// A name that is not part of its enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("unknown address family '{0}'")]
    UnknownFamily(String),

    #[error("unknown verdict '{0}'")]
    UnknownVerdict(String),
}
