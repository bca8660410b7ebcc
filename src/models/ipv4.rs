//! IPv4 address specifications with prefix or dotted netmask.
//!
//! Provides [`Ipv4Spec`] for an `address[/mask]` string, along with the
//! netmask helpers used when comparing IPv4 networks.

use super::{split_spec, SpecError};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Netmask used when a specification carries no mask.
pub const HOST_MASK: u32 = u32::MAX;

static NETMASK_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_netmask_regex() -> &'static Regex {
    NETMASK_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex")
    })
}

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^\d{1,3}$").expect("Invalid Regex"))
}

/// Convert a CIDR prefix length to a netmask as u32.
///
/// A prefix of 0 gives an all-zero mask.
///
/// # Examples
/// ```
/// use ip_address_compare::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SpecError> {
    if len > MAX_LENGTH {
        Err(SpecError::MalformedMask(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse the text after `/` as a dotted netmask or a prefix length.
pub fn parse_netmask(text: &str) -> Result<u32, SpecError> {
    let malformed = || SpecError::MalformedMask(text.to_string());

    if let Some(caps) = get_netmask_regex().captures(text) {
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = caps[i + 1].parse().map_err(|_| malformed())?;
        }
        return Ok(u32::from_be_bytes(octets));
    }

    if get_prefix_regex().is_match(text) {
        let len: u8 = text.parse().map_err(|_| malformed())?;
        return get_cidr_mask(len).map_err(|_| malformed());
    }

    Err(malformed())
}

/// IPv4 address together with the netmask it was qualified by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Spec {
    /// The address as written, not yet masked.
    pub addr: Ipv4Addr,
    /// Netmask, `0xFFFFFFFF` when the specification had none.
    pub netmask: u32,
}

impl Ipv4Spec {
    /// Parse an `address[/prefix]` or `address[/dotted-netmask]` string.
    pub fn new(spec: &str) -> Result<Ipv4Spec, SpecError> {
        let (addr_text, mask_text) = split_spec(spec);

        let netmask = match mask_text {
            Some(text) => parse_netmask(text)?,
            None => HOST_MASK,
        };
        let addr: Ipv4Addr = addr_text
            .parse()
            .map_err(|_| SpecError::MalformedAddress(addr_text.to_string()))?;

        Ok(Ipv4Spec { addr, netmask })
    }

    /// The address with every bit outside the netmask cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask)
    }
}

impl std::fmt::Display for Ipv4Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, Ipv4Addr::from(self.netmask))
    }
}
