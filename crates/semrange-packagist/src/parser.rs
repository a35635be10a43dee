//! Constraint parser for `composer.json` version constraints.
//!
//! Composer desugaring differs from Cargo and npm in two places: `~1.2` is
//! `[1.2.0,2.0.0)` (the last written component may grow), and `^0.3` keeps
//! the minor fixed even when written without a patch.

use crate::error::{PackagistError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use semrange_core::{
    Constraint, ConstraintParser, Interval, Operator, PartialVersion, comparator_interval,
    hyphen_range, minor_interval, patch_interval,
};

/// `[v]major[.minor[.patch]][-stability|@stability]`, capturing the three
/// components.
const VERSION_PATTERN: &str =
    r"[vV]?(\d+)(?:\.(\d+|\*)(?:\.(\d+|\*))?(?:[-@][0-9A-Za-z.-]+)?)?";

static OR_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\|\|?\s*").expect("or-split regex is valid"));

static AND_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("and-split regex is valid"));

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{VERSION_PATTERN}$")).expect("version regex is valid")
});

static TERM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(!=|==?|<=|<|>=|>|~|\^)?{VERSION_PATTERN}$"))
        .expect("term regex is valid")
});

const OPERATORS: &[&str] = &["!=", "=", "==", "<=", "<", ">=", ">", "~", "^"];

/// Composer constraint grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagistParser;

impl PackagistParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConstraintParser for PackagistParser {
    fn id(&self) -> &'static str {
        "packagist"
    }

    fn display_name(&self) -> &'static str {
        "Packagist"
    }

    fn parse(&self, text: &str) -> semrange_core::Result<Constraint> {
        Ok(parse_constraint(text)?)
    }
}

/// Parses a Composer constraint.
///
/// # Errors
///
/// Returns [`PackagistError::InvalidConstraint`] for text outside the
/// grammar, [`PackagistError::UnsupportedWildcard`] for wildcards inside a
/// hyphen range, and a core
/// [`InvalidBounds`](semrange_core::ConstraintError::InvalidBounds) error for
/// a backwards hyphen range.
pub fn parse_constraint(text: &str) -> Result<Constraint> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return Ok(Constraint::unbounded());
    }

    let constraint = OR_SPLIT_REGEX
        .split(trimmed)
        .map(|alternative| parse_conjunction(alternative, text))
        .reduce(|acc, next| Ok(acc?.union(&next?)))
        .unwrap_or_else(|| Ok(Constraint::unbounded()))?;

    tracing::trace!(constraint = text, interval = %constraint, "parsed composer constraint");
    Ok(constraint)
}

fn parse_conjunction(alternative: &str, full: &str) -> Result<Constraint> {
    if alternative.is_empty() {
        return Err(PackagistError::invalid_constraint(full, "empty alternative"));
    }

    let terms = glue_operators(AND_SPLIT_REGEX.split(alternative), full)?;
    let mut rest = terms.as_slice();
    let mut constraint = Constraint::unbounded();

    // `A - B` is one term of the conjunction
    while let [term, tail @ ..] = rest {
        let (next, after) = match tail {
            [dash, upper, after @ ..] if dash == "-" => (parse_hyphen(term, upper, full)?, after),
            _ => (parse_term(term, full)?, tail),
        };
        constraint = constraint.intersect(&next);
        rest = after;
    }

    Ok(constraint)
}

fn parse_hyphen(lower: &str, upper: &str, full: &str) -> Result<Constraint> {
    let lower = read_version(lower, full)?;
    let upper = read_version(upper, full)?;
    if lower.has_wildcard() || upper.has_wildcard() {
        return Err(PackagistError::unsupported_wildcard(full));
    }
    Ok(hyphen_range(&lower, &upper)?.into())
}

fn read_version(text: &str, full: &str) -> Result<PartialVersion> {
    let captures = VERSION_REGEX.captures(text).ok_or_else(|| {
        PackagistError::invalid_constraint(full, format!("unexpected version '{text}'"))
    })?;
    let group = |index: usize| captures.get(index).map(|m| m.as_str());
    Ok(PartialVersion::read(group(1), group(2), group(3))?)
}

/// Joins operators written apart from their version, as in `>= 1.0`.
fn glue_operators<'a>(tokens: impl Iterator<Item = &'a str>, full: &str) -> Result<Vec<String>> {
    let mut terms = Vec::new();
    let mut pending: Option<&str> = None;

    for token in tokens.filter(|t| !t.is_empty()) {
        match pending.take() {
            Some(op) => terms.push(format!("{op}{token}")),
            None if OPERATORS.contains(&token) => pending = Some(token),
            None => terms.push(token.to_string()),
        }
    }

    match pending {
        Some(op) => Err(PackagistError::invalid_constraint(
            full,
            format!("operator '{op}' without a version"),
        )),
        None => Ok(terms),
    }
}

fn parse_term(term: &str, full: &str) -> Result<Constraint> {
    if term == "*" {
        return Ok(Constraint::unbounded());
    }

    let captures = TERM_REGEX.captures(term).ok_or_else(|| {
        PackagistError::invalid_constraint(full, format!("unexpected term '{term}'"))
    })?;
    let version = PartialVersion::read(
        captures.get(2).map(|m| m.as_str()),
        captures.get(3).map(|m| m.as_str()),
        captures.get(4).map(|m| m.as_str()),
    )?;
    let op = captures.get(1).map(|m| m.as_str());

    // the wildcard decides the range, whatever the operator
    if version.has_wildcard() {
        return Ok(version.x_range().into());
    }

    let floor = version.floor();
    match op.unwrap_or("=") {
        "^" => Ok(caret(&floor).into()),
        "~" if version.patch.number().is_none() => Ok(minor_interval(&floor).into()),
        "~" => Ok(patch_interval(&floor).into()),
        op => {
            let op: Operator = op.parse()?;
            Ok(comparator_interval(op, &floor))
        }
    }
}

/// Composer's caret pins the major, or the minor for 0.x versions.
fn caret(floor: &semrange_core::Version) -> Interval {
    if floor.major() == 0 {
        patch_interval(floor)
    } else {
        minor_interval(floor)
    }
}
