//! Requirement parser for RubyGems.
//!
//! A requirement is a comma-separated list of `[op] version` terms, where a
//! missing operator means `=`. The pessimistic operator `~>` drops the last
//! written component: `~> 1.5` is `>= 1.5, < 2.0` and `~> 1.5.3` is
//! `>= 1.5.3, < 1.6`.

use crate::error::{Result, RubyGemsError};
use once_cell::sync::Lazy;
use regex::Regex;
use semrange_core::{
    Constraint, ConstraintParser, Operator, PartialVersion, comparator_interval, minor_interval,
    patch_interval,
};

static TERM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(!=|=|<=|<|>=|>|~>)?\s*(\d+)(?:\.(\d+)(?:\.(\d+)(?:-[0-9A-Za-z.-]+)?)?)?$")
        .expect("term regex is valid")
});

/// RubyGems requirement grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyGemsParser;

impl RubyGemsParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConstraintParser for RubyGemsParser {
    fn id(&self) -> &'static str {
        "rubygems"
    }

    fn display_name(&self) -> &'static str {
        "RubyGems"
    }

    fn parse(&self, text: &str) -> semrange_core::Result<Constraint> {
        Ok(parse_requirement(text)?)
    }
}

/// Parses a comma-separated RubyGems requirement.
///
/// # Errors
///
/// Returns [`RubyGemsError::InvalidConstraint`] for text outside the
/// grammar and [`RubyGemsError::UnsupportedWildcard`] for `1.*`-style terms.
pub fn parse_requirement(text: &str) -> Result<Constraint> {
    if text.trim().is_empty() {
        return Ok(Constraint::unbounded());
    }

    let constraint = text.split(',').try_fold(Constraint::unbounded(), |acc, term| {
        parse_term(term.trim(), text).map(|constraint| acc.intersect(&constraint))
    })?;
    tracing::trace!(requirement = text, interval = %constraint, "parsed rubygems requirement");
    Ok(constraint)
}

fn parse_term(term: &str, full: &str) -> Result<Constraint> {
    let Some(captures) = TERM_REGEX.captures(term) else {
        if term.contains(['*', 'x', 'X']) {
            return Err(RubyGemsError::UnsupportedWildcard {
                constraint: full.to_string(),
            });
        }
        return Err(RubyGemsError::invalid_constraint(
            full,
            format!("unexpected term '{term}'"),
        ));
    };

    let version = PartialVersion::read(
        captures.get(2).map(|m| m.as_str()),
        captures.get(3).map(|m| m.as_str()),
        captures.get(4).map(|m| m.as_str()),
    )?;
    let floor = version.floor();

    match captures.get(1).map_or("=", |m| m.as_str()) {
        "~>" if version.patch.number().is_none() => Ok(minor_interval(&floor).into()),
        "~>" => Ok(patch_interval(&floor).into()),
        op => {
            let op: Operator = op.parse()?;
            Ok(comparator_interval(op, &floor))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        parse_requirement(text).unwrap().to_string()
    }

    #[test]
    fn test_basic_operators() {
        assert_eq!(render(""), "[0.0.0,+inf)");
        assert_eq!(render("=1.2.3"), "[1.2.3]");
        assert_eq!(render(">1.2.3"), "(1.2.3,+inf)");
        assert_eq!(render(">=1.2.3"), "[1.2.3,+inf)");
        assert_eq!(render("<1.2.3"), "[0.0.0,1.2.3)");
        assert_eq!(render("<=1.2.3"), "[0.0.0,1.2.3]");
    }

    #[test]
    fn test_missing_operator_is_equality() {
        assert_eq!(render("1.2.3"), "[1.2.3]");
        assert_eq!(render("1.2"), "[1.2.0]");
    }

    #[test]
    fn test_pessimistic_operator() {
        insta::assert_snapshot!(
            ["~> 1.0", "~> 1.5", "~> 1.5.0", "~> 1.5.3", "~> 1", "~>0.4"]
                .map(render)
                .join("\n"),
            @r"
        [1.0.0,2.0.0)
        [1.5.0,2.0.0)
        [1.5.0,1.6.0)
        [1.5.3,1.6.0)
        [1.0.0,2.0.0)
        [0.4.0,1.0.0)
        "
        );
    }

    #[test]
    fn test_not_equal() {
        assert_eq!(render("!= 1.2.4"), "[0.0.0,1.2.4) | (1.2.4,+inf)");
        assert_eq!(render("~> 1.2, != 1.2.4"), "[1.2.0,1.2.4) | (1.2.4,2.0.0)");
    }

    #[test]
    fn test_conjunctions() {
        assert_eq!(render(">= 2.0, < 3"), "[2.0.0,3.0.0)");
        assert_eq!(render("~> 1.5, >= 1.5.3"), "[1.5.3,2.0.0)");
    }

    #[test]
    fn test_prerelease_tag_ignored() {
        assert_eq!(render("= 1.0.0-rc1"), "[1.0.0]");
    }

    #[test]
    fn test_invalid_requirements() {
        assert!(matches!(
            parse_requirement("~> 1.*"),
            Err(RubyGemsError::UnsupportedWildcard { .. })
        ));
        for input in ["~>", "1.0,", "^1.0", "a.b.c", "1.2.3.4"] {
            assert!(
                matches!(
                    parse_requirement(input),
                    Err(RubyGemsError::InvalidConstraint { .. })
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parser_identity() {
        let parser = RubyGemsParser::new();
        assert_eq!(parser.id(), "rubygems");
        assert_eq!(parser.display_name(), "RubyGems");
        assert!(parser.parse("~> nope").is_err());
    }
}
