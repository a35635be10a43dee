//! Atomic intervals over [`Version`]s.
//!
//! An [`Interval`] is one contiguous range with independently open or closed
//! ends. Its upper end may be [`Endpoint::Infinity`]; its lower end is always
//! a concrete version because nothing sorts below [`Version::FIRST`] in the
//! domain.

use crate::constraint::Constraint;
use crate::error::{ConstraintError, Result};
use crate::interval_set::IntervalSet;
use crate::version::Version;
use std::cmp::Ordering;
use std::fmt;

/// Whether an interval end includes its boundary version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Open,
    Closed,
}

impl BoundKind {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }

    /// The more restrictive of two kinds at a shared boundary.
    fn stricter(self, other: Self) -> Self {
        if self.is_open() || other.is_open() {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// The more permissive of two kinds at a shared boundary.
    fn wider(self, other: Self) -> Self {
        if self.is_closed() || other.is_closed() {
            Self::Closed
        } else {
            Self::Open
        }
    }
}

/// Upper end of an interval: a version or the positive-infinity sentinel.
///
/// The derived order places every `Finite` value below `Infinity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Finite(Version),
    Infinity,
}

impl Endpoint {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    pub fn as_version(&self) -> Option<&Version> {
        match self {
            Self::Finite(version) => Some(version),
            Self::Infinity => None,
        }
    }

    /// Compares this endpoint against a concrete version.
    pub fn cmp_version(&self, version: &Version) -> Ordering {
        match self {
            Self::Finite(own) => own.cmp(version),
            Self::Infinity => Ordering::Greater,
        }
    }
}

impl From<Version> for Endpoint {
    fn from(version: Version) -> Self {
        Self::Finite(version)
    }
}

impl PartialEq<Version> for Endpoint {
    fn eq(&self, other: &Version) -> bool {
        self.as_version() == Some(other)
    }
}

impl PartialOrd<Version> for Endpoint {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        Some(self.cmp_version(other))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(version) => version.fmt(f),
            Self::Infinity => f.write_str("+inf"),
        }
    }
}

/// A contiguous range of versions.
///
/// Equality is structural: two differently written empty intervals are not
/// equal to each other.
///
/// # Examples
///
/// ```
/// use semrange_core::{Interval, Version};
///
/// let caret = Interval::closed_open(Version::new(1, 2, 3), Version::new(2, 0, 0)).unwrap();
/// assert!(caret.contains(&Version::new(1, 9, 0)));
/// assert!(!caret.contains(&Version::new(2, 0, 0)));
/// assert_eq!(caret.to_string(), "[1.2.3,2.0.0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    left: BoundKind,
    lower: Version,
    upper: Endpoint,
    right: BoundKind,
}

impl Interval {
    /// Builds an interval, rejecting `lower > upper`.
    ///
    /// An infinite upper end is always open.
    pub fn new(
        left: BoundKind,
        lower: Version,
        upper: impl Into<Endpoint>,
        right: BoundKind,
    ) -> Result<Self> {
        let upper = upper.into();
        if upper < lower {
            return Err(ConstraintError::InvalidBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self::from_parts(left, lower, upper, right))
    }

    pub fn open(lower: Version, upper: impl Into<Endpoint>) -> Result<Self> {
        Self::new(BoundKind::Open, lower, upper, BoundKind::Open)
    }

    pub fn closed(lower: Version, upper: impl Into<Endpoint>) -> Result<Self> {
        Self::new(BoundKind::Closed, lower, upper, BoundKind::Closed)
    }

    pub fn open_closed(lower: Version, upper: impl Into<Endpoint>) -> Result<Self> {
        Self::new(BoundKind::Open, lower, upper, BoundKind::Closed)
    }

    pub fn closed_open(lower: Version, upper: impl Into<Endpoint>) -> Result<Self> {
        Self::new(BoundKind::Closed, lower, upper, BoundKind::Open)
    }

    /// `[version]`
    pub fn singleton(version: Version) -> Self {
        let upper = Endpoint::Finite(version.clone());
        Self::from_parts(BoundKind::Closed, version, upper, BoundKind::Closed)
    }

    /// `[lower,+inf)`
    pub fn at_least(lower: Version) -> Self {
        Self::from_parts(BoundKind::Closed, lower, Endpoint::Infinity, BoundKind::Open)
    }

    /// `(lower,+inf)`
    pub fn greater_than(lower: Version) -> Self {
        Self::from_parts(BoundKind::Open, lower, Endpoint::Infinity, BoundKind::Open)
    }

    /// `[0.0.0,+inf)`, every version.
    pub fn unbounded() -> Self {
        Self::at_least(Version::FIRST)
    }

    /// The canonical empty interval `(v,v)` anchored at `lower`.
    pub fn empty_at(lower: Version) -> Self {
        let upper = Endpoint::Finite(lower.clone());
        Self::from_parts(BoundKind::Open, lower, upper, BoundKind::Open)
    }

    /// Builds from parts whose order the caller already guarantees.
    pub(crate) fn from_parts(
        left: BoundKind,
        lower: Version,
        upper: Endpoint,
        right: BoundKind,
    ) -> Self {
        debug_assert!(upper >= lower, "interval bounds out of order");
        let right = if upper.is_infinite() {
            BoundKind::Open
        } else {
            right
        };
        Self {
            left,
            lower,
            upper,
            right,
        }
    }

    pub fn left(&self) -> BoundKind {
        self.left
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn upper(&self) -> &Endpoint {
        &self.upper
    }

    pub fn right(&self) -> BoundKind {
        self.right
    }

    /// True iff both ends coincide and at least one of them is open.
    pub fn is_empty(&self) -> bool {
        self.upper == self.lower && (self.left.is_open() || self.right.is_open())
    }

    /// True iff the interval holds exactly one version.
    pub fn is_singleton(&self) -> bool {
        self.upper == self.lower && self.left.is_closed() && self.right.is_closed()
    }

    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = match version.cmp(&self.lower) {
            Ordering::Greater => true,
            Ordering::Equal => self.left.is_closed(),
            Ordering::Less => false,
        };
        let below_upper = match self.upper.cmp_version(version) {
            Ordering::Greater => true,
            Ordering::Equal => self.right.is_closed(),
            Ordering::Less => false,
        };
        above_lower && below_upper
    }

    /// Whether `other` lies entirely inside `self`.
    ///
    /// An empty interval is inside everything; nothing non-empty is inside an
    /// empty interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        let left = match other.lower.cmp(&self.lower) {
            Ordering::Greater => true,
            Ordering::Equal => other.left == self.left || self.left.is_closed(),
            Ordering::Less => false,
        };
        let right = match other.upper.cmp(&self.upper) {
            Ordering::Less => true,
            Ordering::Equal => other.right == self.right || self.right.is_closed(),
            Ordering::Greater => false,
        };
        left && right
    }

    /// Whether the two intervals share a version.
    ///
    /// With `contiguous`, intervals that only touch at a boundary closed on at
    /// least one side (`[1,2)` and `[2,3]`) also count, which is what union
    /// needs to decide mergeability.
    pub fn overlaps(&self, other: &Self, contiguous: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (first, second) = if cmp_lower(self, other) == Ordering::Greater {
            (other, self)
        } else {
            (self, other)
        };

        match first.upper.cmp_version(&second.lower) {
            Ordering::Equal if contiguous => first.right.is_closed() || second.left.is_closed(),
            Ordering::Equal => first.right.is_closed() && second.left.is_closed(),
            Ordering::Greater => true,
            Ordering::Less => false,
        }
    }

    /// The versions in both intervals.
    ///
    /// Never fails: disjoint or merely touching inputs yield the canonical
    /// empty interval anchored at the larger lower bound.
    pub fn intersect(&self, other: &Self) -> Self {
        let (left, lower) = match self.lower.cmp(&other.lower) {
            Ordering::Equal => (self.left.stricter(other.left), &self.lower),
            Ordering::Greater => (self.left, &self.lower),
            Ordering::Less => (other.left, &other.lower),
        };
        let (right, upper) = match self.upper.cmp(&other.upper) {
            Ordering::Equal => (self.right.stricter(other.right), &self.upper),
            Ordering::Less => (self.right, &self.upper),
            Ordering::Greater => (other.right, &other.upper),
        };

        let result = (*upper >= *lower)
            .then(|| Self::from_parts(left, lower.clone(), upper.clone(), right));
        match result {
            Some(interval) if !interval.is_empty() => interval,
            _ => Self::empty_at(lower.clone()),
        }
    }

    /// The versions in either interval.
    ///
    /// Overlapping or contiguous inputs collapse to the widest single
    /// interval; anything else stays a two-member [`IntervalSet`].
    pub fn union(&self, other: &Self) -> Constraint {
        match self.merge(other) {
            Some(merged) => Constraint::Interval(merged),
            None => Constraint::Set(IntervalSet::from_intervals([self.clone(), other.clone()])),
        }
    }

    /// Single-interval union, available only when the inputs overlap or touch.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        self.overlaps(other, true).then(|| self.hull(other))
    }

    /// The smallest interval spanning both inputs, closed at tied ends.
    ///
    /// A widening operation: versions between disjoint inputs are included.
    pub fn hull(&self, other: &Self) -> Self {
        let (left, lower) = match self.lower.cmp(&other.lower) {
            Ordering::Equal => (self.left.wider(other.left), &self.lower),
            Ordering::Less => (self.left, &self.lower),
            Ordering::Greater => (other.left, &other.lower),
        };
        let (right, upper) = match self.upper.cmp(&other.upper) {
            Ordering::Equal => (self.right.wider(other.right), &self.upper),
            Ordering::Greater => (self.right, &self.upper),
            Ordering::Less => (other.right, &other.upper),
        };
        Self::from_parts(left, lower.clone(), upper.clone(), right)
    }
}

/// Orders intervals by where they start: lower version first, and a closed
/// start before an open one at the same version.
pub(crate) fn cmp_lower(a: &Interval, b: &Interval) -> Ordering {
    a.lower.cmp(&b.lower).then_with(|| match (a.left, b.left) {
        (BoundKind::Closed, BoundKind::Open) => Ordering::Less,
        (BoundKind::Open, BoundKind::Closed) => Ordering::Greater,
        _ => Ordering::Equal,
    })
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("()");
        }
        if self.is_singleton() {
            return write!(f, "[{}]", self.lower);
        }

        let open = if self.left.is_closed() { '[' } else { '(' };
        let close = if self.right.is_closed() { ']' } else { ')' };
        write!(f, "{open}{},{}{close}", self.lower, self.upper)
    }
}
