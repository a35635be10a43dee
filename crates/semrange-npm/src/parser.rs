//! Range parser for `package.json` version ranges.
//!
//! A range set is a `||`-separated list of ranges; a range is either a
//! hyphen range or a space-separated list of comparators that must all hold.
//! Missing components and `x`, `X`, `*` are interchangeable.

use crate::error::{NpmError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use semrange_core::{
    Constraint, ConstraintParser, Interval, Operator, Part, PartialVersion, comparator_interval,
    hyphen_range, minor_interval, patch_interval, unit_patch_interval,
};

/// `[v]XR[.XR[.XR[-pre][+build]]]`, capturing the three components.
const PARTIAL_PATTERN: &str = r"[vV]?(\d+|[xX*])(?:\.(\d+|[xX*])(?:\.(\d+|[xX*])(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)?)?";

static OR_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\|\|\s*").expect("or-split regex is valid"));

static HYPHEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{PARTIAL_PATTERN}\s+-\s+{PARTIAL_PATTERN}$"))
        .expect("hyphen regex is valid")
});

static TERM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(<=|>=|<|>|=|~>|~|\^)?{PARTIAL_PATTERN}$"))
        .expect("term regex is valid")
});

const OPERATORS: &[&str] = &["<=", ">=", "<", ">", "=", "~>", "~", "^"];

/// npm range grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmParser;

impl NpmParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConstraintParser for NpmParser {
    fn id(&self) -> &'static str {
        "npm"
    }

    fn display_name(&self) -> &'static str {
        "npm"
    }

    fn parse(&self, text: &str) -> semrange_core::Result<Constraint> {
        Ok(parse_range(text)?)
    }
}

/// Parses an npm range set.
///
/// # Errors
///
/// Returns [`NpmError::InvalidConstraint`] for text outside the grammar,
/// [`NpmError::UnsupportedWildcard`] for `1.x.3`-style partials, and a core
/// [`InvalidBounds`](semrange_core::ConstraintError::InvalidBounds) error for
/// a backwards hyphen range.
pub fn parse_range(text: &str) -> Result<Constraint> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Constraint::unbounded());
    }

    let constraint = OR_SPLIT_REGEX
        .split(trimmed)
        .map(|range| parse_comparator_set(range, text))
        .reduce(|acc, next| Ok(acc?.union(&next?)))
        .unwrap_or_else(|| Ok(Constraint::unbounded()))?;

    tracing::trace!(range = text, interval = %constraint, "parsed npm range");
    Ok(constraint)
}

fn parse_comparator_set(range: &str, full: &str) -> Result<Constraint> {
    if range.is_empty() {
        return Err(NpmError::invalid_constraint(full, "empty range"));
    }

    if let Some(captures) = HYPHEN_REGEX.captures(range) {
        let group = |index: usize| captures.get(index).map(|m| m.as_str());
        let lower = read_partial(group(1), group(2), group(3), full)?;
        let upper = read_partial(group(4), group(5), group(6), full)?;
        return Ok(hyphen_range(&lower, &upper)?.into());
    }

    glue_operators(range.split_whitespace(), full)?
        .iter()
        .try_fold(Constraint::unbounded(), |acc, term| {
            parse_term(term, full).map(|constraint| acc.intersect(&constraint))
        })
}

/// Joins operators written apart from their version, as in `>= 1.2.3`.
fn glue_operators<'a>(tokens: impl Iterator<Item = &'a str>, full: &str) -> Result<Vec<String>> {
    let mut terms = Vec::new();
    let mut pending: Option<&str> = None;

    for token in tokens {
        match pending.take() {
            Some(op) => terms.push(format!("{op}{token}")),
            None if OPERATORS.contains(&token) => pending = Some(token),
            None => terms.push(token.to_string()),
        }
    }

    match pending {
        Some(op) => Err(NpmError::invalid_constraint(
            full,
            format!("operator '{op}' without a version"),
        )),
        None => Ok(terms),
    }
}

/// Reads a partial, rejecting numbers written after a wildcard.
fn read_partial(
    major: Option<&str>,
    minor: Option<&str>,
    patch: Option<&str>,
    full: &str,
) -> Result<PartialVersion> {
    let version = PartialVersion::read(major, minor, patch)?;
    let trailing_number = [version.major, version.minor, version.patch]
        .iter()
        .skip(version.precision())
        .any(|part| matches!(part, Part::Number(_)));
    if trailing_number {
        return Err(NpmError::UnsupportedWildcard {
            constraint: full.to_string(),
        });
    }
    Ok(version)
}

fn parse_term(term: &str, full: &str) -> Result<Constraint> {
    let captures = TERM_REGEX.captures(term).ok_or_else(|| {
        NpmError::invalid_constraint(full, format!("unexpected comparator '{term}'"))
    })?;
    let version = read_partial(
        captures.get(2).map(|m| m.as_str()),
        captures.get(3).map(|m| m.as_str()),
        captures.get(4).map(|m| m.as_str()),
        full,
    )?;

    match captures.get(1).map(|m| m.as_str()) {
        None => Ok(version.x_range().into()),
        Some("~" | "~>") => Ok(tilde(&version).into()),
        Some("^") => Ok(caret(&version).into()),
        Some(op) => {
            let op: Operator = op.parse()?;
            Ok(comparator(op, &version))
        }
    }
}

/// `~` allows patch-level changes, or minor-level ones when no minor is given.
fn tilde(version: &PartialVersion) -> Interval {
    let floor = version.floor();
    match version.precision() {
        0 => Interval::unbounded(),
        1 => minor_interval(&floor),
        _ => patch_interval(&floor),
    }
}

/// `^` allows changes that keep the left-most non-zero component.
fn caret(version: &PartialVersion) -> Interval {
    let floor = version.floor();
    match (version.precision(), floor.major(), floor.minor()) {
        (0, _, _) => Interval::unbounded(),
        (1, _, _) => minor_interval(&floor),
        (_, major, _) if major > 0 => minor_interval(&floor),
        (2, 0, _) => patch_interval(&floor),
        (_, 0, 0) => unit_patch_interval(&floor),
        _ => patch_interval(&floor),
    }
}

/// A comparator against a partial version compares with the whole line it
/// names: `>1.2` starts at `1.3.0` and `<=1.2` stops before it, while `<1.2`
/// and `>=1.2` stop or start at `1.2.0`. Against `*` it is either
/// everything or nothing.
fn comparator(op: Operator, version: &PartialVersion) -> Constraint {
    if version.precision() == 0 {
        return match op {
            Operator::GreaterThan | Operator::LessThan | Operator::NotEqual => Constraint::empty(),
            Operator::Equal | Operator::GreaterThanOrEqual | Operator::LessThanOrEqual => {
                Constraint::unbounded()
            }
        };
    }

    let floor = version.floor();
    let Some(next) = version.ceiling() else {
        return comparator_interval(op, &floor);
    };
    match op {
        Operator::Equal => version.x_range().into(),
        Operator::GreaterThan => comparator_interval(Operator::GreaterThanOrEqual, &next),
        Operator::LessThanOrEqual => comparator_interval(Operator::LessThan, &next),
        Operator::GreaterThanOrEqual | Operator::LessThan => comparator_interval(op, &floor),
        Operator::NotEqual => {
            &comparator_interval(Operator::LessThan, &floor)
                | &comparator_interval(Operator::GreaterThanOrEqual, &next)
        }
    }
}
