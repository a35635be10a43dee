//! Requirement parser for `Cargo.toml` version strings.
//!
//! Desugaring follows the Cargo reference:
//!
//! | Written | Interval |
//! |---|---|
//! | `^1.2.3`, `1.2.3` | `[1.2.3,2.0.0)` |
//! | `^0.2.3` | `[0.2.3,0.3.0)` |
//! | `^0.0.3` | `[0.0.3,0.0.4)` |
//! | `~1.2` | `[1.2.0,1.3.0)` |
//! | `1.*` | `[1.0.0,2.0.0)` |
//! | `>=1.2` | `[1.2.0,+inf)` |

use crate::error::{CargoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use semrange_core::{
    Constraint, ConstraintParser, Operator, PartialVersion, comparator_interval, minor_interval,
    patch_interval, unit_patch_interval,
};

static REQUIREMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(=|<=|<|>=|>|~|\^)?\s*(\d+|\*)(?:\.(\d+|\*)(?:\.(\d+|\*)(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)?)?$",
    )
    .expect("requirement regex is valid")
});

/// Prefix operators of a single Cargo requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Caret,
    Tilde,
    Compare(Operator),
}

/// Cargo requirement grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoParser;

impl CargoParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConstraintParser for CargoParser {
    fn id(&self) -> &'static str {
        "cargo"
    }

    fn display_name(&self) -> &'static str {
        "Cargo"
    }

    fn parse(&self, text: &str) -> semrange_core::Result<Constraint> {
        Ok(parse_requirement(text)?)
    }
}

/// Parses a full, possibly comma-separated, Cargo requirement.
///
/// # Errors
///
/// Returns [`CargoError::InvalidConstraint`] for text outside the grammar
/// (including an empty term such as in `1.0,`), and
/// [`CargoError::UnsupportedWildcard`] for `>=1.*` and the like.
pub fn parse_requirement(text: &str) -> Result<Constraint> {
    if text.trim().is_empty() {
        return Ok(Constraint::unbounded());
    }

    let constraint = text.split(',').try_fold(Constraint::unbounded(), |acc, term| {
        parse_term(term.trim(), text).map(|constraint| acc.intersect(&constraint))
    })?;
    tracing::trace!(requirement = text, interval = %constraint, "parsed cargo requirement");
    Ok(constraint)
}

fn parse_term(term: &str, full: &str) -> Result<Constraint> {
    let captures = REQUIREMENT_REGEX.captures(term).ok_or_else(|| {
        CargoError::invalid_constraint(full, format!("unexpected requirement '{term}'"))
    })?;

    let version = PartialVersion::read(
        captures.get(2).map(|m| m.as_str()),
        captures.get(3).map(|m| m.as_str()),
        captures.get(4).map(|m| m.as_str()),
    )?;

    let prefix = match captures.get(1).map(|m| m.as_str()) {
        None => None,
        Some("^") => Some(Prefix::Caret),
        Some("~") => Some(Prefix::Tilde),
        Some(op) => Some(Prefix::Compare(op.parse()?)),
    };

    match prefix {
        None if version.has_wildcard() => Ok(version.x_range().into()),
        Some(_) if version.has_wildcard() => Err(CargoError::unsupported_wildcard(full)),
        None | Some(Prefix::Caret) => Ok(caret(&version).into()),
        Some(Prefix::Tilde) => Ok(tilde(&version).into()),
        Some(Prefix::Compare(op)) => Ok(comparator_interval(op, &version.floor())),
    }
}

/// `^` keeps the left-most non-zero component fixed.
fn caret(version: &PartialVersion) -> semrange_core::Interval {
    let floor = version.floor();
    match (floor.major(), version.minor.number(), version.patch.number()) {
        (_, None, _) => minor_interval(&floor),
        (0, Some(_), None) => patch_interval(&floor),
        (0, Some(0), Some(_)) => unit_patch_interval(&floor),
        (0, Some(_), Some(_)) => patch_interval(&floor),
        _ => minor_interval(&floor),
    }
}

/// `~` allows patch updates, or minor updates when only a major is given.
fn tilde(version: &PartialVersion) -> semrange_core::Interval {
    let floor = version.floor();
    if version.minor.number().is_none() {
        minor_interval(&floor)
    } else {
        patch_interval(&floor)
    }
}
