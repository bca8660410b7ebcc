//! IPv4 comparison.

use super::{evaluate, parse_both};
use crate::models::{Ipv4Spec, Operation, Verdict};

/// Compare two IPv4 `address[/mask]` specifications.
///
/// The mask may be a prefix length or a dotted netmask; both forms of the
/// same mask give identical verdicts. Either specification failing to parse
/// gives [`Verdict::Error`].
///
/// # Examples
/// ```
/// use ip_address_compare::{compare_ipv4, Operation, Verdict};
/// assert_eq!(
///     compare_ipv4("192.168.1.128/25", "192.168.1.0/24", Operation::SubsetOf),
///     Verdict::True
/// );
/// ```
pub fn compare_ipv4(spec1: &str, spec2: &str, op: Operation) -> Verdict {
    let Some((first, second)) = parse_both(spec1, spec2, Ipv4Spec::new) else {
        return Verdict::Error;
    };
    log::debug!("compare_ipv4({first} {op} {second})");

    let equal = first == second;
    let mask_order = first.netmask.cmp(&second.netmask);
    evaluate(op, equal, mask_order, || {
        u32::from(first.network()).cmp(&u32::from(second.network()))
    })
}
