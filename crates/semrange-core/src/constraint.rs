//! The parsed form of a constraint and its set operators.

use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::version::Version;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr};

/// The set of versions a constraint admits: one atomic interval or a
/// normalized union of them.
///
/// Grammar parsers return this, and every predicate matches on the variant
/// instead of inspecting types at runtime. Equality and hashing go through
/// the normalized set, so the variant a range is stored in does not matter
/// and every empty constraint equals [`Constraint::empty`].
///
/// # Examples
///
/// ```
/// use semrange_core::{Constraint, Interval, Version};
///
/// let below_two = Constraint::from(
///     Interval::closed_open(Version::FIRST, Version::new(2, 0, 0)).unwrap(),
/// );
/// let from_one = Constraint::from(Interval::at_least(Version::new(1, 0, 0)));
///
/// assert_eq!((&below_two & &from_one).to_string(), "[1.0.0,2.0.0)");
/// assert_eq!((&below_two | &from_one).to_string(), "[0.0.0,+inf)");
/// ```
#[derive(Debug, Clone)]
pub enum Constraint {
    Interval(Interval),
    Set(IntervalSet),
}

impl Constraint {
    /// Every version, `[0.0.0,+inf)`.
    pub fn unbounded() -> Self {
        Self::Interval(Interval::unbounded())
    }

    /// No version at all.
    pub fn empty() -> Self {
        Self::Set(IntervalSet::empty())
    }

    /// Atomic intervals making up the constraint, lowest first.
    pub fn intervals(&self) -> &[Interval] {
        match self {
            Self::Interval(interval) => std::slice::from_ref(interval),
            Self::Set(set) => set.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Interval(interval) => interval.is_empty(),
            Self::Set(set) => set.is_empty(),
        }
    }

    pub fn contains(&self, version: &Version) -> bool {
        match self {
            Self::Interval(interval) => interval.contains(version),
            Self::Set(set) => set.contains(version),
        }
    }

    /// The member reaching the most recent versions.
    pub fn latest(&self) -> Option<&Interval> {
        match self {
            Self::Interval(interval) => (!interval.is_empty()).then_some(interval),
            Self::Set(set) => set.latest(),
        }
    }

    /// The constraint as a normalized set.
    pub fn to_set(&self) -> IntervalSet {
        match self {
            Self::Interval(interval) => IntervalSet::from(interval.clone()),
            Self::Set(set) => set.clone(),
        }
    }

    /// The single interval spanning the whole constraint; `None` when empty.
    pub fn to_interval(&self) -> Option<Interval> {
        match self {
            Self::Interval(interval) if interval.is_empty() => None,
            Self::Interval(interval) => Some(interval.clone()),
            Self::Set(set) => set.to_interval(),
        }
    }

    /// Versions admitted by both constraints ("AND").
    pub fn intersect(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => Self::Interval(a.intersect(b)),
            _ => Self::Set(self.to_set().intersect(&other.to_set())),
        }
    }

    /// Versions admitted by either constraint ("OR").
    pub fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => a.union(b),
            _ => Self::Set(self.to_set().union(&other.to_set())),
        }
    }

    /// Whether every version admitted by `self` is admitted by `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.to_set().is_subset(&other.to_set())
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) if !a.is_empty() && !b.is_empty() => a == b,
            _ => self.to_set() == other.to_set(),
        }
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_set().hash(state);
    }
}

impl From<Interval> for Constraint {
    fn from(interval: Interval) -> Self {
        Self::Interval(interval)
    }
}

impl From<IntervalSet> for Constraint {
    fn from(set: IntervalSet) -> Self {
        Self::Set(set)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interval(interval) => interval.fmt(f),
            Self::Set(set) => set.fmt(f),
        }
    }
}

impl BitAnd for &Constraint {
    type Output = Constraint;

    fn bitand(self, rhs: Self) -> Constraint {
        self.intersect(rhs)
    }
}

impl BitOr for &Constraint {
    type Output = Constraint;

    fn bitor(self, rhs: Self) -> Constraint {
        self.union(rhs)
    }
}

impl BitAnd for &Interval {
    type Output = Interval;

    fn bitand(self, rhs: Self) -> Interval {
        self.intersect(rhs)
    }
}

impl BitOr for &Interval {
    type Output = Constraint;

    fn bitor(self, rhs: Self) -> Constraint {
        self.union(rhs)
    }
}

impl BitAnd for &IntervalSet {
    type Output = IntervalSet;

    fn bitand(self, rhs: Self) -> IntervalSet {
        self.intersect(rhs)
    }
}

impl BitOr for &IntervalSet {
    type Output = IntervalSet;

    fn bitor(self, rhs: Self) -> IntervalSet {
        self.union(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    fn closed_open(a: &str, b: &str) -> Constraint {
        Interval::closed_open(v(a), v(b)).unwrap().into()
    }

    #[test]
    fn test_interval_and_interval_stays_atomic() {
        let result = &closed_open("1.0.0", "3.0.0") & &closed_open("2.0.0", "4.0.0");
        assert!(matches!(result, Constraint::Interval(_)));
        assert_eq!(result.to_string(), "[2.0.0,3.0.0)");
    }

    #[test]
    fn test_disjoint_union_becomes_set() {
        let result = &closed_open("1.0.0", "2.0.0") | &closed_open("3.0.0", "4.0.0");
        assert!(matches!(result, Constraint::Set(_)));
        assert_eq!(result.intervals().len(), 2);
        assert_eq!(result.to_string(), "[1.0.0,2.0.0) | [3.0.0,4.0.0)");
    }

    #[test]
    fn test_mixed_operands() {
        let set = &closed_open("1.0.0", "2.0.0") | &closed_open("3.0.0", "4.0.0");
        let narrowed = &set & &closed_open("1.5.0", "3.5.0");
        assert_eq!(narrowed.to_string(), "[1.5.0,2.0.0) | [3.0.0,3.5.0)");
    }

    #[test]
    fn test_empty_constraints() {
        assert!(Constraint::empty().is_empty());
        assert_eq!(Constraint::empty().to_string(), "()");
        assert!(Constraint::empty().latest().is_none());
        assert!(Constraint::empty().to_interval().is_none());

        let disjoint = &closed_open("1.0.0", "2.0.0") & &closed_open("3.0.0", "4.0.0");
        assert!(disjoint.is_empty());
        assert!(disjoint.latest().is_none());
        assert!(disjoint.to_set().is_empty());
    }

    #[test]
    fn test_subset() {
        let narrow = closed_open("1.2.0", "1.3.0");
        let wide = closed_open("1.0.0", "2.0.0");
        assert!(narrow.is_subset(&wide));
        assert!(!wide.is_subset(&narrow));
        assert!(Constraint::empty().is_subset(&narrow));
    }

    #[test]
    fn test_equality_ignores_representation() {
        let interval = closed_open("1.0.0", "2.0.0");
        let set = Constraint::Set(interval.to_set());
        assert!(interval.is_subset(&set) && set.is_subset(&interval));
        assert_eq!(interval, set);
        assert_eq!(set, interval);
        assert_ne!(interval, closed_open("1.0.0", "3.0.0"));
    }

    #[test]
    fn test_every_empty_constraint_is_equal() {
        let disjoint = &closed_open("0.0.0", "1.0.0") & &Constraint::from(Interval::greater_than(v("2.0.0")));
        assert!(matches!(disjoint, Constraint::Interval(_)));
        assert_eq!(disjoint, Constraint::empty());
        assert_eq!(Constraint::from(Interval::empty_at(v("3.0.0"))), Constraint::empty());
        assert_ne!(Constraint::empty(), Constraint::unbounded());
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::collections::HashSet;

        let interval = closed_open("1.0.0", "2.0.0");
        let set = Constraint::Set(interval.to_set());
        let distinct: HashSet<Constraint> = [
            interval,
            set,
            Constraint::empty(),
            Constraint::from(Interval::empty_at(v("2.0.0"))),
        ]
        .into_iter()
        .collect();
        assert_eq!(distinct.len(), 2);
    }

    #[test]
    fn test_contains() {
        let set = &closed_open("1.0.0", "2.0.0") | &closed_open("3.0.0", "4.0.0");
        assert!(set.contains(&v("3.1.0")));
        assert!(!set.contains(&v("2.5.0")));
        assert!(Constraint::unbounded().contains(&v("0.0.0")));
    }
}
