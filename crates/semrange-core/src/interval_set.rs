//! Normalized unions of intervals.

use crate::interval::{Interval, cmp_lower};
use crate::version::Version;
use std::fmt;

/// A disjoint union of [`Interval`]s, the "OR" of several ranges.
///
/// Every constructor and operation returns a normalized set: no member is
/// empty, none contains another, and no two members overlap or touch at a
/// boundary closed on either side. Members are kept sorted by lower bound,
/// so derived equality is set equality.
///
/// # Examples
///
/// ```
/// use semrange_core::{Interval, IntervalSet, Version};
///
/// let set = IntervalSet::from_intervals([
///     Interval::closed_open(Version::new(1, 0, 0), Version::new(2, 0, 0)).unwrap(),
///     Interval::closed(Version::new(2, 0, 0), Version::new(2, 5, 0)).unwrap(),
///     Interval::singleton(Version::new(4, 0, 0)),
/// ]);
///
/// assert_eq!(set.to_string(), "[1.0.0,2.5.0] | [4.0.0]");
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// The set admitting no version.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
        Self {
            intervals: normalize(intervals.into_iter().collect()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// The member with the lowest versions.
    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    /// The member reaching the most recent versions.
    pub fn latest(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.intervals.iter().any(|i| i.contains(version))
    }

    /// Whether every version of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.intervals
            .iter()
            .all(|mine| other.intervals.iter().any(|theirs| theirs.contains_interval(mine)))
    }

    /// Pairwise intersection of all members, re-normalized.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_intervals(
            self.intervals
                .iter()
                .flat_map(|a| other.intervals.iter().map(move |b| a.intersect(b))),
        )
    }

    /// Members of both operands, re-normalized.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_intervals(self.intervals.iter().chain(&other.intervals).cloned())
    }

    /// The single interval spanning every member, or `None` when empty.
    ///
    /// Widening: gaps between members are filled in.
    pub fn to_interval(&self) -> Option<Interval> {
        let (first, rest) = self.intervals.split_first()?;
        Some(rest.iter().fold(first.clone(), |acc, next| acc.hull(next)))
    }
}

/// Restores the set invariant with an explicit worklist.
///
/// Each candidate is dropped if a kept member already covers it, merged with
/// the first kept member it overlaps or touches (the merge goes back on the
/// worklist, since it may now reach further members), or kept as is. Every
/// merge removes one interval, so the loop terminates.
fn normalize(intervals: Vec<Interval>) -> Vec<Interval> {
    let input_len = intervals.len();
    let mut pending: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
    let mut kept: Vec<Interval> = Vec::with_capacity(pending.len());

    while let Some(candidate) = pending.pop() {
        if kept.iter().any(|k| k.contains_interval(&candidate)) {
            continue;
        }

        if let Some(position) = kept.iter().position(|k| k.overlaps(&candidate, true)) {
            let absorbed = kept.swap_remove(position);
            pending.push(absorbed.hull(&candidate));
            continue;
        }

        kept.push(candidate);
    }

    kept.sort_by(cmp_lower);
    tracing::trace!(input = input_len, output = kept.len(), "normalized interval set");
    kept
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::from_intervals(iter)
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        Self::from_intervals([interval])
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return f.write_str("()");
        }
        for (index, interval) in self.intervals.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            interval.fmt(f)?;
        }
        Ok(())
    }
}
