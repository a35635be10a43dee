//! npm range grammar.
//!
//! This crate desugars the `node-semver` range syntax used in
//! `package.json` into [`semrange_core::Constraint`] values.
//!
//! # Features
//!
//! - Range sets joined with `||`, space-separated comparator sets
//! - Hyphen ranges (`1.2.3 - 2.3`), x-ranges (`1.x`, `1.2.*`, `*`)
//! - Tilde (`~1.2.3`, `~>1.2`) and caret (`^0.2.3`) ranges
//! - `v` prefixes, prerelease and build suffixes, which are ignored
//!
//! # Examples
//!
//! ```
//! use semrange_core::ConstraintParser;
//! use semrange_npm::NpmParser;
//!
//! let parser = NpmParser::new();
//! let constraint = parser.parse("1.2.7 || >=1.2.9 <2.0.0").unwrap();
//! assert_eq!(constraint.to_string(), "[1.2.7] | [1.2.9,2.0.0)");
//! ```

pub mod error;
pub mod parser;

// Re-export commonly used types
pub use error::{NpmError, Result};
pub use parser::{NpmParser, parse_range};
