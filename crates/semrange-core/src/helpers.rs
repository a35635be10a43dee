//! Interval builders shared by the grammar crates.
//!
//! Every grammar desugars its caret, tilde, wildcard and comparator forms
//! into these few shapes.

use crate::constraint::Constraint;
use crate::interval::{BoundKind, Endpoint, Interval};
use crate::interval_set::IntervalSet;
use crate::operator::Operator;
use crate::version::{Bump, Version};

/// `[v, v.major.(v.minor+1).0)`: later patches of the same minor line.
///
/// ```
/// use semrange_core::{Version, patch_interval};
///
/// assert_eq!(patch_interval(&Version::new(1, 2, 3)).to_string(), "[1.2.3,1.3.0)");
/// ```
pub fn patch_interval(version: &Version) -> Interval {
    up_to(version, version.bumped(Bump::Minor, 1))
}

/// `[v, (v.major+1).0.0)`: later minors and patches of the same major line.
///
/// ```
/// use semrange_core::{Version, minor_interval};
///
/// assert_eq!(minor_interval(&Version::new(1, 2, 3)).to_string(), "[1.2.3,2.0.0)");
/// ```
pub fn minor_interval(version: &Version) -> Interval {
    up_to(version, version.bumped(Bump::Major, 1))
}

/// `[v, v.major.v.minor.(v.patch+1))`: exactly one patch, as `^0.0.3` means.
pub fn unit_patch_interval(version: &Version) -> Interval {
    up_to(version, version.bumped(Bump::Patch, 1))
}

/// The versions satisfying `op version`.
///
/// `!=` is the only operator producing two disjoint intervals.
///
/// ```
/// use semrange_core::{Operator, Version, comparator_interval};
///
/// let v = Version::new(1, 2, 3);
/// assert_eq!(comparator_interval(Operator::LessThanOrEqual, &v).to_string(), "[0.0.0,1.2.3]");
/// assert_eq!(comparator_interval(Operator::NotEqual, &v).to_string(), "[0.0.0,1.2.3) | (1.2.3,+inf)");
/// ```
pub fn comparator_interval(op: Operator, version: &Version) -> Constraint {
    match op {
        Operator::Equal => Interval::singleton(version.clone()).into(),
        Operator::LessThan => below(version, BoundKind::Open).into(),
        Operator::LessThanOrEqual => below(version, BoundKind::Closed).into(),
        Operator::GreaterThan => Interval::greater_than(version.clone()).into(),
        Operator::GreaterThanOrEqual => Interval::at_least(version.clone()).into(),
        Operator::NotEqual => IntervalSet::from_intervals([
            below(version, BoundKind::Open),
            Interval::greater_than(version.clone()),
        ])
        .into(),
    }
}

/// `[0.0.0, v)` or `[0.0.0, v]`. Empty when `v` sorts below `0.0.0`.
fn below(version: &Version, right: BoundKind) -> Interval {
    if *version < Version::FIRST {
        return Interval::empty_at(Version::FIRST);
    }
    Interval::from_parts(
        BoundKind::Closed,
        Version::FIRST,
        Endpoint::Finite(version.clone()),
        right,
    )
}

/// `[lower, upper)`, or `[lower, +inf)` when the bump saturated.
fn up_to(lower: &Version, upper: Version) -> Interval {
    if upper > *lower {
        Interval::from_parts(
            BoundKind::Closed,
            lower.clone(),
            Endpoint::Finite(upper),
            BoundKind::Open,
        )
    } else {
        Interval::at_least(lower.clone())
    }
}
