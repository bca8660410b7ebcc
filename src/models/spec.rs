//! Address families and the `address[/mask]` specification grammar.

use super::NameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Address family of a comparison, named after its datatype.
///
/// Serialized as its [`Family::as_str`] name.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Ipv4 => "ipv4_address",
            Family::Ipv6 => "ipv6_address",
        }
    }
}

impl FromStr for Family {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4_address" | "ipv4" | "v4" => Ok(Family::Ipv4),
            "ipv6_address" | "ipv6" | "v6" => Ok(Family::Ipv6),
            _ => Err(NameError::UnknownFamily(s.to_string())),
        }
    }
}

impl From<Family> for &'static str {
    fn from(family: Family) -> Self {
        family.as_str()
    }
}

impl TryFrom<String> for Family {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Split `ADDR[/MASK]` at the first `/` into the address and optional mask text.
///
/// # Examples
/// ```
/// use ip_address_compare::models::split_spec;
/// assert_eq!(split_spec("10.0.0.0/8"), ("10.0.0.0", Some("8")));
/// assert_eq!(split_spec("10.0.0.1"), ("10.0.0.1", None));
/// ```
pub fn split_spec(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once('/') {
        Some((addr, mask)) => (addr, Some(mask)),
        None => (spec, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_spec() {
        assert_eq!(split_spec("192.168.1.0/24"), ("192.168.1.0", Some("24")));
        assert_eq!(
            split_spec("10.0.0.0/255.0.0.0"),
            ("10.0.0.0", Some("255.0.0.0"))
        );
        assert_eq!(split_spec("2001:db8::/32"), ("2001:db8::", Some("32")));
        assert_eq!(split_spec("::1"), ("::1", None));
        // Empty mask text is kept so the mask parser can reject it
        assert_eq!(split_spec("10.0.0.1/"), ("10.0.0.1", Some("")));
        // Only the first separator splits
        assert_eq!(split_spec("10.0.0.1/8/8"), ("10.0.0.1", Some("8/8")));
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("ipv4_address".parse::<Family>().unwrap(), Family::Ipv4);
        assert_eq!("IPv6".parse::<Family>().unwrap(), Family::Ipv6);
        assert_eq!(
            "ipx".parse::<Family>().unwrap_err(),
            NameError::UnknownFamily("ipx".to_string())
        );
        assert_eq!(Family::Ipv6.to_string(), "ipv6_address");
    }

    #[test]
    fn test_family_serde_follows_as_str() {
        for family in [Family::Ipv4, Family::Ipv6] {
            let json = serde_json::to_string(&family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.as_str()));
            assert_eq!(serde_json::from_str::<Family>(&json).unwrap(), family);
        }
        assert_eq!(
            serde_json::from_str::<Family>("\"ipx\"").unwrap_err().to_string(),
            "unknown address family 'ipx'"
        );
    }
}
