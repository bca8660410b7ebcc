//! Operator evaluation over parsed address specifications.
//!
//! - [`ipv4`] - comparison of dotted-quad specifications
//! - [`ipv6`] - comparison of colon-hex specifications
//!
//! Both families share the operator semantics implemented by [`evaluate`].

mod ipv4;
mod ipv6;

pub use ipv4::compare_ipv4;
pub use ipv6::compare_ipv6;

use crate::models::{Family, Operation, SpecError, Verdict};
use std::cmp::Ordering;

/// Compare two specifications of the given family.
pub fn compare(family: Family, spec1: &str, spec2: &str, op: Operation) -> Verdict {
    match family {
        Family::Ipv4 => compare_ipv4(spec1, spec2, op),
        Family::Ipv6 => compare_ipv6(spec1, spec2, op),
    }
}

/// Compare two specifications with the operation given by name.
///
/// An unknown operation name gives [`Verdict::Error`].
pub fn compare_named(family: Family, spec1: &str, spec2: &str, op_name: &str) -> Verdict {
    match op_name.parse::<Operation>() {
        Ok(op) => compare(family, spec1, spec2, op),
        Err(e) => {
            log::error!("{e}");
            Verdict::Error
        }
    }
}

/// Parse both specifications, logging every failure, before any comparison runs.
pub(crate) fn parse_both<T>(
    spec1: &str,
    spec2: &str,
    parse: impl Fn(&str) -> Result<T, SpecError>,
) -> Option<(T, T)> {
    let first = parse(spec1).map_err(|e| log::warn!("Can't parse '{spec1}': {e}"));
    let second = parse(spec2).map_err(|e| log::warn!("Can't parse '{spec2}': {e}"));
    match (first, second) {
        (Ok(a), Ok(b)) => Some((a, b)),
        _ => None,
    }
}

/// Apply `op` to two parsed operands.
///
/// * `equal` - unmasked addresses and masks both equal
/// * `mask_order` - first mask compared to second mask
/// * `network_order` - first masked address compared to second masked address
///
/// `SubsetOf` requires the first mask to be strictly greater and then behaves
/// as `GreaterThan`; `SupersetOf` requires it strictly smaller and then
/// behaves as `LessThan`.
pub(crate) fn evaluate(
    op: Operation,
    equal: bool,
    mask_order: Ordering,
    network_order: impl FnOnce() -> Ordering,
) -> Verdict {
    match op {
        Operation::Equals => Verdict::from(equal),
        Operation::NotEqual => Verdict::from(!equal),
        Operation::SubsetOf if mask_order != Ordering::Greater => Verdict::False,
        Operation::SupersetOf if mask_order != Ordering::Less => Verdict::False,
        Operation::SubsetOf | Operation::GreaterThan => {
            Verdict::from(network_order() == Ordering::Greater)
        }
        Operation::GreaterThanOrEqual => Verdict::from(network_order() != Ordering::Less),
        Operation::SupersetOf | Operation::LessThan => {
            Verdict::from(network_order() == Ordering::Less)
        }
        Operation::LessThanOrEqual => Verdict::from(network_order() != Ordering::Greater),
        other => {
            log::error!("Unexpected compare operation: {other}");
            Verdict::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::cmp::Ordering::{Equal, Greater, Less};

    #[test]
    fn test_parse_both_attempts_both_specs() {
        let seen = RefCell::new(Vec::new());
        let parse = |s: &str| -> Result<u8, SpecError> {
            seen.borrow_mut().push(s.to_string());
            s.parse().map_err(|_| SpecError::MalformedAddress(s.to_string()))
        };

        assert_eq!(parse_both("bad-one", "bad-two", parse), None);
        assert_eq!(*seen.borrow(), vec!["bad-one", "bad-two"]);

        seen.borrow_mut().clear();
        assert_eq!(parse_both("bad-one", "7", parse), None);
        assert_eq!(*seen.borrow(), vec!["bad-one", "7"]);

        seen.borrow_mut().clear();
        assert_eq!(parse_both("3", "7", parse), Some((3, 7)));
        assert_eq!(*seen.borrow(), vec!["3", "7"]);
    }

    #[test]
    fn test_evaluate_equality_ignores_order() {
        assert_eq!(evaluate(Operation::Equals, true, Less, || Less), Verdict::True);
        assert_eq!(evaluate(Operation::Equals, false, Equal, || Equal), Verdict::False);
        assert_eq!(evaluate(Operation::NotEqual, false, Equal, || Equal), Verdict::True);
        assert_eq!(evaluate(Operation::NotEqual, true, Equal, || Equal), Verdict::False);
    }

    #[test]
    fn test_evaluate_subset_precheck() {
        let unreachable = || -> Ordering { panic!("network compared after failed pre-check") };
        assert_eq!(evaluate(Operation::SubsetOf, false, Less, unreachable), Verdict::False);
        assert_eq!(evaluate(Operation::SubsetOf, false, Equal, unreachable), Verdict::False);
        assert_eq!(evaluate(Operation::SubsetOf, false, Greater, || Greater), Verdict::True);
        assert_eq!(evaluate(Operation::SubsetOf, false, Greater, || Equal), Verdict::False);
    }

    #[test]
    fn test_evaluate_superset_precheck() {
        let unreachable = || -> Ordering { panic!("network compared after failed pre-check") };
        assert_eq!(evaluate(Operation::SupersetOf, false, Greater, unreachable), Verdict::False);
        assert_eq!(evaluate(Operation::SupersetOf, false, Equal, unreachable), Verdict::False);
        assert_eq!(evaluate(Operation::SupersetOf, false, Less, || Less), Verdict::True);
        assert_eq!(evaluate(Operation::SupersetOf, false, Less, || Greater), Verdict::False);
    }

    #[test]
    fn test_evaluate_relational() {
        let cases = [
            (Operation::GreaterThan, [false, false, true]),
            (Operation::GreaterThanOrEqual, [false, true, true]),
            (Operation::LessThan, [true, false, false]),
            (Operation::LessThanOrEqual, [true, true, false]),
        ];
        for (op, expected) in cases {
            for (order, want) in [Less, Equal, Greater].into_iter().zip(expected) {
                assert_eq!(
                    evaluate(op, false, Equal, || order),
                    Verdict::from(want),
                    "{op} with {order:?}"
                );
            }
        }
    }

    #[test]
    fn test_evaluate_unrecognized() {
        for op in [
            Operation::CaseInsensitiveEquals,
            Operation::CaseInsensitiveNotEqual,
            Operation::BitwiseAnd,
            Operation::BitwiseOr,
            Operation::PatternMatch,
        ] {
            assert_eq!(evaluate(op, true, Equal, || Equal), Verdict::Error);
        }
    }

    #[test]
    fn test_compare_named() {
        assert_eq!(
            compare_named(Family::Ipv4, "10.0.0.1", "10.0.0.1", "equals"),
            Verdict::True
        );
        assert_eq!(
            compare_named(Family::Ipv6, "::1", "::2", "less than"),
            Verdict::True
        );
        assert_eq!(
            compare_named(Family::Ipv4, "10.0.0.1", "10.0.0.1", "resembles"),
            Verdict::Error
        );
    }

    #[test]
    fn test_compare_dispatches_on_family() {
        assert_eq!(
            compare(Family::Ipv4, "10.0.0.1", "10.0.0.1", Operation::Equals),
            Verdict::True
        );
        assert_eq!(
            compare(Family::Ipv6, "10.0.0.1", "10.0.0.1", Operation::Equals),
            Verdict::Error
        );
    }
}
