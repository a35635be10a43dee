//! Property-based tests for the interval algebra.

use proptest::prelude::*;
use semrange_core::{
    BoundKind, Bump, Constraint, Interval, IntervalSet, Version, allows_major, allows_minor,
    allows_patch, strict,
};

fn version() -> impl Strategy<Value = Version> {
    (0u64..6, 0u64..6, 0u64..6).prop_map(|(major, minor, patch)| Version::new(major, minor, patch))
}

fn bound() -> impl Strategy<Value = BoundKind> {
    prop_oneof![Just(BoundKind::Open), Just(BoundKind::Closed)]
}

fn interval() -> impl Strategy<Value = Interval> {
    (version(), version(), bound(), bound(), any::<bool>()).prop_map(
        |(a, b, left, right, unbounded)| {
            let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
            if unbounded {
                Interval::new(left, lower, semrange_core::Endpoint::Infinity, right)
            } else {
                Interval::new(left, lower, upper, right)
            }
            .expect("bounds are ordered")
        },
    )
}

fn interval_set() -> impl Strategy<Value = IntervalSet> {
    prop::collection::vec(interval(), 0..5).prop_map(IntervalSet::from_intervals)
}

fn assert_normalized(set: &IntervalSet) {
    let members = set.as_slice();
    for member in members {
        assert!(!member.is_empty(), "empty member in {set}");
    }
    for pair in members.windows(2) {
        assert!(pair[0].lower() <= pair[1].lower(), "unsorted {set}");
    }
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            assert!(!a.overlaps(b, true), "{a} and {b} should have merged in {set}");
        }
    }
}

proptest! {
    #[test]
    fn test_version_display_reparses(v in version()) {
        prop_assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn test_interval_intersection_membership(a in interval(), b in interval(), v in version()) {
        let both = a.intersect(&b);
        prop_assert_eq!(both.contains(&v), a.contains(&v) && b.contains(&v));
        prop_assert_eq!(both, b.intersect(&a));
    }

    #[test]
    fn test_interval_union_membership(a in interval(), b in interval(), v in version()) {
        let either = a.union(&b);
        prop_assert_eq!(either.contains(&v), a.contains(&v) || b.contains(&v));
        prop_assert_eq!(either, b.union(&a));
    }

    #[test]
    fn test_hull_covers_both(a in interval(), b in interval()) {
        let hull = a.hull(&b);
        prop_assert!(hull.contains_interval(&a));
        prop_assert!(hull.contains_interval(&b));
    }

    #[test]
    fn test_sets_stay_normalized(a in interval_set(), b in interval_set()) {
        assert_normalized(&a);
        assert_normalized(&a.union(&b));
        assert_normalized(&a.intersect(&b));
    }

    #[test]
    fn test_set_operations_membership(a in interval_set(), b in interval_set(), v in version()) {
        prop_assert_eq!(a.union(&b).contains(&v), a.contains(&v) || b.contains(&v));
        prop_assert_eq!(a.intersect(&b).contains(&v), a.contains(&v) && b.contains(&v));
    }

    #[test]
    fn test_set_operations_commute(a in interval_set(), b in interval_set()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
        prop_assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    #[test]
    fn test_normalization_is_idempotent(a in interval_set()) {
        let again = IntervalSet::from_intervals(a.iter().cloned());
        prop_assert_eq!(again, a);
    }

    #[test]
    fn test_intersection_is_subset(a in interval_set(), b in interval_set()) {
        let both = a.intersect(&b);
        prop_assert!(both.is_subset(&a));
        prop_assert!(both.is_subset(&b));
        prop_assert!(a.is_subset(&a.union(&b)));
    }

    #[test]
    fn test_hard_bump_witness_is_admitted(i in interval()) {
        let constraint = Constraint::from(i.clone());
        for (bump, allowed) in [
            (Bump::Major, allows_major(&constraint, false)),
            (Bump::Minor, allows_minor(&constraint, false)),
            (Bump::Patch, allows_patch(&constraint, false)),
        ] {
            if allowed {
                let step = if i.left().is_open() { 2 } else { 1 };
                prop_assert!(i.contains(&i.lower().bumped(bump, step)));
            }
        }
    }

    #[test]
    fn test_soft_major_implies_unbounded(i in interval()) {
        let constraint = Constraint::from(i.clone());
        prop_assert_eq!(allows_major(&constraint, true), !i.is_empty() && i.upper().is_infinite());
    }

    #[test]
    fn test_strict_excludes_patch(i in interval()) {
        let constraint = Constraint::from(i.clone());
        if strict(&constraint) {
            prop_assert!(!allows_patch(&constraint, false));
        }
    }
}
