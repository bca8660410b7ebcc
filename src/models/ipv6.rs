//! IPv6 address specifications with a prefix length.

use super::{split_spec, SpecError};
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Byte mask with the leading `bits` bits set (`bits` is clamped to 8).
fn leading_bits(bits: u8) -> u8 {
    match bits {
        0 => 0,
        b if b >= 8 => 0xFF,
        b => 0xFFu8 << (8 - b),
    }
}

/// Clear every bit at index `prefix` and beyond, most significant bit first.
pub fn mask_octets(octets: [u8; 16], prefix: u8) -> [u8; 16] {
    let mut masked = octets;
    for (i, octet) in masked.iter_mut().enumerate() {
        let kept = prefix.saturating_sub((i * 8) as u8);
        *octet &= leading_bits(kept);
    }
    masked
}

/// IPv6 address together with the prefix length it was qualified by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv6Spec {
    /// The address as written, not yet masked.
    pub addr: Ipv6Addr,
    /// Prefix length, 128 when the specification had none.
    pub prefix: u8,
}

impl Ipv6Spec {
    /// Parse an `address[/prefix]` string. There is no dotted-netmask form.
    pub fn new(spec: &str) -> Result<Ipv6Spec, SpecError> {
        let (addr_text, mask_text) = split_spec(spec);

        let prefix = match mask_text {
            Some(text) => parse_prefix(text)?,
            None => MAX_LENGTH_V6,
        };
        let addr: Ipv6Addr = addr_text
            .parse()
            .map_err(|_| SpecError::MalformedAddress(addr_text.to_string()))?;

        Ok(Ipv6Spec { addr, prefix })
    }

    /// The 16 octets with every bit past the prefix cleared.
    pub fn network(&self) -> [u8; 16] {
        mask_octets(self.addr.octets(), self.prefix)
    }
}

/// Parse a decimal prefix length in `0..=128`.
pub fn parse_prefix(text: &str) -> Result<u8, SpecError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpecError::MalformedMask(text.to_string()));
    }
    match text.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH_V6 => Ok(len),
        _ => Err(SpecError::MalformedMask(text.to_string())),
    }
}

impl std::fmt::Display for Ipv6Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
