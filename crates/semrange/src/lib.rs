//! Interval analysis of dependency version constraints.
//!
//! This crate ties the ecosystem grammars to the interval algebra of
//! [`semrange_core`]: pick an [`Ecosystem`], parse a constraint into a
//! [`Constraint`], and evaluate compatibility predicates on it, either one by
//! one or all at once as a [`ConstraintReport`].
//!
//! # Examples
//!
//! ```
//! use semrange::{Ecosystem, parse_constraint};
//! use semrange_core::{allows_major, allows_minor};
//!
//! let caret = parse_constraint(Ecosystem::Packagist, "^1.2");
//! assert_eq!(caret.to_string(), "[1.2.0,2.0.0)");
//! assert!(allows_minor(&caret, true));
//! assert!(!allows_major(&caret, true));
//!
//! // unreadable input degrades to the empty constraint
//! assert!(parse_constraint(Ecosystem::Npm, "not a range").is_empty());
//! ```

pub mod config;
pub mod error;
pub mod report;

use once_cell::sync::Lazy;
use semrange_cargo::CargoParser;
use semrange_core::{Constraint, ConstraintError, EcosystemRegistry};
use semrange_npm::NpmParser;
use semrange_packagist::PackagistParser;
use semrange_rubygems::RubyGemsParser;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// Re-export commonly used types
pub use config::{AnalysisConfig, OutputFormat, PredicateConfig};
pub use error::{AppError, Result};
pub use report::ConstraintReport;

static REGISTRY: Lazy<EcosystemRegistry> = Lazy::new(default_registry);

/// Package ecosystems with a constraint grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Cargo,
    Npm,
    Packagist,
    RubyGems,
}

impl Ecosystem {
    pub const ALL: [Self; 4] = [Self::Cargo, Self::Npm, Self::Packagist, Self::RubyGems];

    /// Registry identifier of the ecosystem's grammar.
    pub fn id(self) -> &'static str {
        match self {
            Self::Cargo => "cargo",
            Self::Npm => "npm",
            Self::Packagist => "packagist",
            Self::RubyGems => "rubygems",
        }
    }
}

impl FromStr for Ecosystem {
    type Err = ConstraintError;

    /// Case-insensitive, so registry spellings like `NPM` or `Rubygems` work.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ecosystem| ecosystem.id() == lowered)
            .ok_or_else(|| ConstraintError::UnsupportedEcosystem(s.to_string()))
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A registry holding the grammars of every [`Ecosystem`].
pub fn default_registry() -> EcosystemRegistry {
    let registry = EcosystemRegistry::new();
    registry.register(Arc::new(CargoParser::new()));
    registry.register(Arc::new(NpmParser::new()));
    registry.register(Arc::new(PackagistParser::new()));
    registry.register(Arc::new(RubyGemsParser::new()));
    registry
}

/// Parses `text` with the ecosystem's grammar, propagating failures.
pub fn try_parse_constraint(ecosystem: Ecosystem, text: &str) -> Result<Constraint> {
    Ok(REGISTRY.parse(ecosystem.id(), text)?)
}

/// Parses `text` with the ecosystem's grammar; unreadable text yields the
/// empty constraint.
pub fn parse_constraint(ecosystem: Ecosystem, text: &str) -> Constraint {
    REGISTRY
        .parse_or_empty(ecosystem.id(), text)
        .unwrap_or_else(|_| Constraint::empty())
}
