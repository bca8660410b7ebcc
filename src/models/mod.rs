//! Domain models for address comparison.
//!
//! This module contains the data structures a comparison works on:
//! - [`Ipv4Spec`] - IPv4 address with prefix or dotted netmask
//! - [`Ipv6Spec`] - IPv6 address with prefix length
//! - [`Operation`] and [`Verdict`] - requested test and its outcome
//! - [`Family`] - which of the two address families to compare

mod error;
mod ipv4;
mod ipv6;
mod operation;
mod spec;

// Re-export public types
pub use error::{NameError, SpecError};
pub use ipv4::{get_cidr_mask, parse_netmask, Ipv4Spec, HOST_MASK, MAX_LENGTH};
pub use ipv6::{mask_octets, parse_prefix, Ipv6Spec, MAX_LENGTH_V6};
pub use operation::{Operation, Verdict};
pub use spec::{split_spec, Family};
