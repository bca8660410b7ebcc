//! IPv6 comparison.

use super::{evaluate, parse_both};
use crate::models::{Ipv6Spec, Operation, Verdict};

/// Compare two IPv6 `address[/prefix]` specifications.
///
/// Masked addresses are compared octet by octet, most significant first.
/// Either specification failing to parse gives [`Verdict::Error`].
///
/// # Examples
/// ```
/// use ip_address_compare::{compare_ipv6, Operation, Verdict};
/// assert_eq!(
///     compare_ipv6("2001:db8::/32", "2001:db8::1/128", Operation::Equals),
///     Verdict::False
/// );
/// ```
pub fn compare_ipv6(spec1: &str, spec2: &str, op: Operation) -> Verdict {
    let Some((first, second)) = parse_both(spec1, spec2, Ipv6Spec::new) else {
        return Verdict::Error;
    };
    log::debug!("compare_ipv6({first} {op} {second})");

    let equal = first == second;
    let mask_order = first.prefix.cmp(&second.prefix);
    evaluate(op, equal, mask_order, || first.network().cmp(&second.network()))
}
