//! Composer constraint grammar for Packagist packages.
//!
//! This crate desugars the constraints written in `composer.json` into
//! [`semrange_core::Constraint`] values.
//!
//! # Features
//!
//! - Disjunctions with `||` (and the legacy single `|`)
//! - Conjunctions separated by spaces or commas
//! - Hyphen ranges (`1.0 - 2.0`), wildcards (`1.0.*`), tilde and caret
//! - `v` prefixes and stability suffixes (`-beta`, `@dev`), which are ignored
//!
//! # Examples
//!
//! ```
//! use semrange_core::ConstraintParser;
//! use semrange_packagist::PackagistParser;
//!
//! let parser = PackagistParser::new();
//! let constraint = parser.parse(">=1.0 <1.1 || >=1.2").unwrap();
//! assert_eq!(constraint.to_string(), "[1.0.0,1.1.0) | [1.2.0,+inf)");
//! ```

pub mod error;
pub mod parser;

// Re-export commonly used types
pub use error::{PackagistError, Result};
pub use parser::{PackagistParser, parse_constraint};
