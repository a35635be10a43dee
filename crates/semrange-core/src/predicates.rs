//! Compatibility predicates over parsed constraints.
//!
//! Every predicate takes a [`Constraint`] and matches on its variant. For the
//! bump predicates the question is "starting from the lowest admitted
//! version, is a release of the next major/minor/patch line still admitted?"
//!
//! # Soft and hard lookahead
//!
//! - [`Lookahead::Soft`] advances the component without limit: `[1.0.0,2.0.0)`
//!   allows minor bumps because `1.x.0` stays inside for every `x`.
//! - [`Lookahead::Hard`] only probes the adjacent candidate (two steps ahead
//!   when the lower bound is open): `[1.0.0,2.0.0]` allows a major bump
//!   because `2.0.0` itself is admitted.
//!
//! [`Scope`] picks which members of a disjoint set are examined. The
//! boolean-flag helpers such as [`allows_major`] pair soft lookahead with the
//! latest member, and hard lookahead with all members.

use crate::constraint::Constraint;
use crate::interval::{Endpoint, Interval};
use crate::version::{Bump, Version};
use serde::{Deserialize, Serialize};

/// How far past the lower bound a bump check looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookahead {
    Soft,
    Hard,
}

/// Which members of a disjoint set a bump check examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Only the member reaching the most recent versions.
    Latest,
    /// Every member; the check passes if any member passes.
    All,
}

/// Lookahead and scope of a bump check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BumpQuery {
    pub lookahead: Lookahead,
    pub scope: Scope,
}

impl BumpQuery {
    pub const SOFT: Self = Self {
        lookahead: Lookahead::Soft,
        scope: Scope::Latest,
    };

    pub const HARD: Self = Self {
        lookahead: Lookahead::Hard,
        scope: Scope::All,
    };

    /// [`BumpQuery::SOFT`] or [`BumpQuery::HARD`].
    pub fn from_soft(soft: bool) -> Self {
        if soft { Self::SOFT } else { Self::HARD }
    }

    pub fn with_scope(self, scope: Scope) -> Self {
        Self { scope, ..self }
    }
}

impl Default for BumpQuery {
    fn default() -> Self {
        Self::SOFT
    }
}

/// True unless some admitted version has no upper limit.
pub fn upper_bounded(constraint: &Constraint) -> bool {
    constraint
        .to_interval()
        .is_none_or(|hull| !hull.upper().is_infinite())
}

/// True unless the constraint reaches down to `0.0.0`.
pub fn lower_bounded(constraint: &Constraint) -> bool {
    constraint
        .to_interval()
        .is_none_or(|hull| *hull.lower() != Version::FIRST)
}

/// Whether the constraint pins a single release line so tightly that not
/// even the adjacent patch release is admitted.
///
/// For a set only the lowest member is examined; an empty constraint is
/// never strict.
///
/// ```
/// use semrange_core::{Constraint, Interval, Version, strict};
///
/// let pinned = Constraint::from(Interval::singleton(Version::new(1, 0, 0)));
/// assert!(strict(&pinned));
/// ```
pub fn strict(constraint: &Constraint) -> bool {
    constraint
        .intervals()
        .first()
        .is_some_and(|first| !first.is_empty() && !interval_allows(first, Bump::Patch, Lookahead::Hard))
}

/// Whether a `bump` release past the lower bound is still admitted.
pub fn allows(constraint: &Constraint, bump: Bump, query: BumpQuery) -> bool {
    match (constraint, query.scope) {
        (Constraint::Interval(interval), _) => interval_allows(interval, bump, query.lookahead),
        (Constraint::Set(set), Scope::Latest) => set
            .latest()
            .is_some_and(|latest| interval_allows(latest, bump, query.lookahead)),
        (Constraint::Set(set), Scope::All) => set
            .iter()
            .any(|interval| interval_allows(interval, bump, query.lookahead)),
    }
}

pub fn allows_major(constraint: &Constraint, soft: bool) -> bool {
    allows(constraint, Bump::Major, BumpQuery::from_soft(soft))
}

pub fn allows_minor(constraint: &Constraint, soft: bool) -> bool {
    allows(constraint, Bump::Minor, BumpQuery::from_soft(soft))
}

pub fn allows_patch(constraint: &Constraint, soft: bool) -> bool {
    allows(constraint, Bump::Patch, BumpQuery::from_soft(soft))
}

fn interval_allows(interval: &Interval, bump: Bump, lookahead: Lookahead) -> bool {
    if interval.is_empty() {
        return false;
    }

    match lookahead {
        Lookahead::Soft => admits_unbounded_bump(interval, bump),
        Lookahead::Hard => {
            let step = if interval.left().is_open() { 2 } else { 1 };
            interval.contains(&interval.lower().bumped(bump, step))
        }
    }
}

/// Whether versions with the bumped component arbitrarily far ahead of the
/// lower bound stay below the upper bound.
fn admits_unbounded_bump(interval: &Interval, bump: Bump) -> bool {
    let lower = interval.lower();
    match interval.upper() {
        Endpoint::Infinity => true,
        Endpoint::Finite(upper) => match bump {
            Bump::Major => false,
            Bump::Minor => upper.major() > lower.major(),
            Bump::Patch => (upper.major(), upper.minor()) > (lower.major(), lower.minor()),
        },
    }
}

/// Whether the constraint stays inside the pre-1.0 window `[0.0.0,1.0.0)`.
pub fn dev(constraint: &Constraint) -> bool {
    let window = crate::helpers::minor_interval(&Version::FIRST);
    constraint
        .intervals()
        .iter()
        .all(|interval| window.contains_interval(interval))
}

/// Every non-breaking bump is admitted.
///
/// Outside the dev window that means minor and patch bumps. Inside it, a
/// minor bump counts as breaking unless `semver` is set, in which case the
/// dev window makes no promise and the check passes trivially.
pub fn allows_all_compatible(constraint: &Constraint, semver: bool) -> bool {
    allows_all_compatible_with(constraint, BumpQuery::SOFT, semver)
}

/// At least one non-breaking bump is admitted.
pub fn allows_compatible(constraint: &Constraint, semver: bool) -> bool {
    allows_compatible_with(constraint, BumpQuery::SOFT, semver)
}

/// Some breaking bump is admitted.
pub fn allows_incompatible(constraint: &Constraint, semver: bool) -> bool {
    allows_incompatible_with(constraint, BumpQuery::SOFT, semver)
}

pub fn allows_compatible_only(constraint: &Constraint, semver: bool) -> bool {
    allows_compatible_only_with(constraint, BumpQuery::SOFT, semver)
}

pub fn allows_all_compatible_only(constraint: &Constraint, semver: bool) -> bool {
    allows_all_compatible_only_with(constraint, BumpQuery::SOFT, semver)
}

pub fn allows_all_compatible_with(constraint: &Constraint, query: BumpQuery, semver: bool) -> bool {
    if dev(constraint) {
        semver || allows(constraint, Bump::Patch, query)
    } else {
        allows(constraint, Bump::Minor, query) && allows(constraint, Bump::Patch, query)
    }
}

pub fn allows_compatible_with(constraint: &Constraint, query: BumpQuery, semver: bool) -> bool {
    if dev(constraint) {
        semver || allows(constraint, Bump::Patch, query)
    } else {
        allows(constraint, Bump::Minor, query) || allows(constraint, Bump::Patch, query)
    }
}

pub fn allows_incompatible_with(constraint: &Constraint, query: BumpQuery, semver: bool) -> bool {
    let major = allows(constraint, Bump::Major, query);
    if !dev(constraint) {
        return major;
    }

    let minor = allows(constraint, Bump::Minor, query);
    if semver {
        major || minor || allows(constraint, Bump::Patch, query)
    } else {
        major || minor
    }
}

pub fn allows_compatible_only_with(constraint: &Constraint, query: BumpQuery, semver: bool) -> bool {
    allows_compatible_with(constraint, query, semver)
        && !allows_incompatible_with(constraint, query, semver)
}

pub fn allows_all_compatible_only_with(
    constraint: &Constraint,
    query: BumpQuery,
    semver: bool,
) -> bool {
    allows_all_compatible_with(constraint, query, semver)
        && !allows_incompatible_with(constraint, query, semver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    fn closed(a: &str, b: &str) -> Constraint {
        Interval::closed(v(a), v(b)).unwrap().into()
    }

    fn closed_open(a: &str, b: &str) -> Constraint {
        Interval::closed_open(v(a), v(b)).unwrap().into()
    }

    fn open_closed(a: &str, b: &str) -> Constraint {
        Interval::open_closed(v(a), v(b)).unwrap().into()
    }

    fn open(a: &str, b: &str) -> Constraint {
        Interval::open(v(a), v(b)).unwrap().into()
    }

    fn bumps(constraint: &Constraint, soft: bool) -> (bool, bool, bool) {
        (
            allows_major(constraint, soft),
            allows_minor(constraint, soft),
            allows_patch(constraint, soft),
        )
    }

    #[test]
    fn test_strict() {
        assert!(strict(&closed("1.0.0", "1.0.0")));
        assert!(strict(&closed_open("1.0.0", "1.0.1")));

        assert!(!strict(&closed("1.0.0", "1.0.1")));
        assert!(!strict(&closed("1.0.0", "1.1.0")));
        assert!(!strict(&closed("1.0.0", "2.0.0")));
        assert!(!strict(&Interval::at_least(v("1.0.0")).into()));
        assert!(!strict(&Constraint::empty()));
        assert!(!strict(&open("1.0.0", "1.0.0")));
    }

    #[test]
    fn test_bounded() {
        assert!(upper_bounded(&closed("1.0.0", "2.0.0")));
        assert!(upper_bounded(&closed("1.0.0", "1.0.0")));
        assert!(upper_bounded(&closed_open("1.0.0", "1.0.1")));
        assert!(!upper_bounded(&Interval::at_least(v("1.0.0")).into()));

        assert!(lower_bounded(&closed("0.0.1", "2.0.0")));
        assert!(!lower_bounded(&closed("0.0.0", "2.0.0")));
    }

    #[test]
    fn test_soft_atomic() {
        for make in [closed, closed_open, open_closed, open] {
            assert_eq!(bumps(&make("1.0.0", "2.0.0"), true), (false, true, true));
            assert_eq!(bumps(&make("1.0.0", "1.1.0"), true), (false, false, true));
            assert_eq!(bumps(&make("1.0.0", "1.0.1"), true), (false, false, false));
        }
        assert_eq!(
            bumps(&Interval::at_least(v("1.0.0")).into(), true),
            (true, true, true)
        );
    }

    #[test]
    fn test_hard_atomic() {
        let cases = [
            (closed("1.0.0", "1.0.1"), (false, false, true)),
            (open("1.0.0", "1.0.1"), (false, false, false)),
            (closed("1.0.0", "1.1.0"), (false, true, true)),
            (open("1.0.0", "1.1.0"), (false, false, true)),
            (closed("1.0.0", "1.0.0"), (false, false, false)),
            (closed("1.0.0", "2.0.0"), (true, true, true)),
            (open("1.0.0", "2.0.0"), (false, true, true)),
            (open_closed("1.0.0", "1.0.1"), (false, false, false)),
            (closed_open("1.0.0", "1.0.1"), (false, false, false)),
            (Interval::greater_than(v("1.0.0")).into(), (true, true, true)),
            (closed("0.0.0", "1.0.0"), (true, true, true)),
            (open("0.0.0", "1.0.0"), (false, true, true)),
            (closed("0.0.0", "0.0.0"), (false, false, false)),
            (closed("0.0.0", "0.0.2"), (false, false, true)),
            (open("0.0.0", "0.0.2"), (false, false, false)),
            (closed("0.0.0", "0.1.0"), (false, true, true)),
            (open("0.0.0", "0.1.0"), (false, false, true)),
        ];
        for (constraint, expected) in cases {
            assert_eq!(bumps(&constraint, false), expected, "{constraint}");
        }
    }

    #[test]
    fn test_caret_range_major_checks() {
        let caret = closed_open("1.0.0", "2.0.0");
        assert!(!allows_major(&caret, true));
        // the adjacent major 2.0.0 is excluded by the open upper bound
        assert!(!allows_major(&caret, false));
        assert!(allows_major(&closed_open("1.0.0", "3.0.0"), false));
    }

    #[test]
    fn test_sets_soft_use_latest_member() {
        let cases = [
            (
                &closed_open("1.0.0", "3.0.0") | &Interval::singleton(v("4.0.0")).into(),
                (false, false, false),
            ),
            (
                &closed("1.0.0", "2.0.0") | &closed_open("3.0.0", "3.1.0"),
                (false, false, true),
            ),
            (
                &closed("1.0.0", "2.0.0") | &closed("3.0.0", "3.1.0"),
                (false, false, true),
            ),
        ];
        for (constraint, expected) in cases {
            assert!(matches!(constraint, Constraint::Set(_)));
            assert!(!strict(&constraint));
            assert!(lower_bounded(&constraint) && upper_bounded(&constraint));
            assert_eq!(bumps(&constraint, true), expected, "{constraint}");
            assert_eq!(bumps(&constraint, false), (true, true, true), "{constraint}");
        }
    }

    #[test]
    fn test_scope_override() {
        let set = &closed_open("1.0.0", "3.0.0") | &Interval::singleton(v("4.0.0")).into();
        let soft_all = BumpQuery::SOFT.with_scope(Scope::All);
        assert!(allows(&set, Bump::Minor, soft_all));
        assert!(!allows(&set, Bump::Minor, BumpQuery::SOFT));

        let hard_latest = BumpQuery::HARD.with_scope(Scope::Latest);
        assert!(!allows(&set, Bump::Patch, hard_latest));
    }

    #[test]
    fn test_empty_allows_nothing() {
        for soft in [true, false] {
            assert_eq!(bumps(&Constraint::empty(), soft), (false, false, false));
            assert_eq!(bumps(&open("1.0.0", "1.0.0"), soft), (false, false, false));
        }
    }

    #[test]
    fn test_dev() {
        assert!(dev(&closed_open("0.0.0", "1.0.0")));
        assert!(dev(&closed_open("0.2.3", "0.3.0")));
        assert!(!dev(&closed("0.0.0", "1.0.0")));
        assert!(!dev(&closed_open("1.0.0", "2.0.0")));
        assert!(!dev(&(&closed_open("0.1.0", "0.2.0") | &closed_open("1.0.0", "2.0.0"))));
        assert!(dev(&Constraint::empty()));
    }

    #[test]
    fn test_compatibility_stable_range() {
        let caret = closed_open("1.2.3", "2.0.0");
        assert!(allows_all_compatible(&caret, false));
        assert!(allows_compatible(&caret, false));
        assert!(!allows_incompatible(&caret, false));
        assert!(allows_compatible_only(&caret, false));
        assert!(allows_all_compatible_only(&caret, false));

        let tilde = closed_open("1.2.3", "1.3.0");
        assert!(!allows_all_compatible(&tilde, false));
        assert!(allows_compatible(&tilde, false));
        assert!(allows_compatible_only(&tilde, false));
        assert!(!allows_all_compatible_only(&tilde, false));

        let open_ended = Constraint::from(Interval::at_least(v("1.0.0")));
        assert!(allows_incompatible(&open_ended, false));
        assert!(!allows_compatible_only(&open_ended, false));
    }

    #[test]
    fn test_compatibility_dev_range() {
        let zero_caret = closed_open("0.2.3", "0.3.0");
        assert!(allows_compatible(&zero_caret, false));
        assert!(allows_all_compatible(&zero_caret, false));
        assert!(!allows_incompatible(&zero_caret, false));

        let zero_major = closed_open("0.0.0", "1.0.0");
        assert!(allows_incompatible(&zero_major, false));
        assert!(!allows_compatible_only(&zero_major, false));

        // under strict semver every 0.x bump may break
        assert!(allows_compatible(&zero_caret, true));
        assert!(allows_incompatible(&zero_caret, true));
        assert!(!allows_compatible_only(&zero_caret, true));

        let pinned = Constraint::from(Interval::singleton(v("0.1.0")));
        assert!(!allows_compatible(&pinned, false));
        assert!(!allows_incompatible(&pinned, true));
        assert!(allows_all_compatible_only(&pinned, true));
    }
}
