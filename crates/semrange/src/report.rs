//! Per-constraint analysis reports.

use crate::config::PredicateConfig;
use semrange_core::{
    Bump, Constraint, allows, allows_all_compatible_only_with, allows_all_compatible_with,
    allows_compatible_only_with, allows_compatible_with, allows_incompatible_with, dev,
    lower_bounded, strict, upper_bounded,
};
use serde::Serialize;

/// Every predicate evaluated for one constraint.
///
/// # Examples
///
/// ```
/// use semrange::{ConstraintReport, Ecosystem, parse_constraint};
/// use semrange::config::PredicateConfig;
///
/// let constraint = parse_constraint(Ecosystem::Cargo, "^1.2.3");
/// let report = ConstraintReport::new("^1.2.3", &constraint, &PredicateConfig::default());
///
/// assert_eq!(report.interval, "[1.2.3,2.0.0)");
/// assert!(report.allows_minor);
/// assert!(!report.allows_major);
/// assert!(report.allows_compatible_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintReport {
    pub constraint: String,
    pub interval: String,
    pub empty: bool,
    pub dev: bool,
    pub strict: bool,
    pub upper_bounded: bool,
    pub lower_bounded: bool,
    pub allows_major: bool,
    pub allows_minor: bool,
    pub allows_patch: bool,
    pub allows_compatible: bool,
    pub allows_all_compatible: bool,
    pub allows_incompatible: bool,
    pub allows_compatible_only: bool,
    pub allows_all_compatible_only: bool,
}

impl ConstraintReport {
    pub fn new(text: &str, constraint: &Constraint, options: &PredicateConfig) -> Self {
        let query = options.query();
        let semver = options.semver;

        Self {
            constraint: text.to_string(),
            interval: constraint.to_string(),
            empty: constraint.is_empty(),
            dev: dev(constraint),
            strict: strict(constraint),
            upper_bounded: upper_bounded(constraint),
            lower_bounded: lower_bounded(constraint),
            allows_major: allows(constraint, Bump::Major, query),
            allows_minor: allows(constraint, Bump::Minor, query),
            allows_patch: allows(constraint, Bump::Patch, query),
            allows_compatible: allows_compatible_with(constraint, query, semver),
            allows_all_compatible: allows_all_compatible_with(constraint, query, semver),
            allows_incompatible: allows_incompatible_with(constraint, query, semver),
            allows_compatible_only: allows_compatible_only_with(constraint, query, semver),
            allows_all_compatible_only: allows_all_compatible_only_with(constraint, query, semver),
        }
    }

    /// Names of the predicates that hold, in declaration order.
    pub fn flags(&self) -> Vec<&'static str> {
        [
            ("empty", self.empty),
            ("dev", self.dev),
            ("strict", self.strict),
            ("upper_bounded", self.upper_bounded),
            ("lower_bounded", self.lower_bounded),
            ("allows_major", self.allows_major),
            ("allows_minor", self.allows_minor),
            ("allows_patch", self.allows_patch),
            ("allows_compatible", self.allows_compatible),
            ("allows_all_compatible", self.allows_all_compatible),
            ("allows_incompatible", self.allows_incompatible),
            ("allows_compatible_only", self.allows_compatible_only),
            ("allows_all_compatible_only", self.allows_all_compatible_only),
        ]
        .into_iter()
        .filter_map(|(name, holds)| holds.then_some(name))
        .collect()
    }

    /// `<constraint>\t<interval>\t<flags>`, with `-` when no flag holds.
    pub fn to_text_line(&self) -> String {
        let flags = self.flags();
        let flags = if flags.is_empty() {
            "-".to_string()
        } else {
            flags.join(",")
        };
        format!("{}\t{}\t{}", self.constraint, self.interval, flags)
    }
}
