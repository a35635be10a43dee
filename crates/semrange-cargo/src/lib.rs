//! Cargo version requirement grammar.
//!
//! This crate desugars the requirement syntax of `Cargo.toml` dependency
//! entries into [`semrange_core::Constraint`] values.
//!
//! # Features
//!
//! - Caret (`^1.2`), tilde (`~1.2.3`) and comparator (`>=1.0`) requirements
//! - Wildcards (`*`, `1.*`, `1.2.*`)
//! - Bare versions, read as caret requirements
//! - Comma-separated conjunctions (`>=1.2, <1.5`)
//!
//! # Examples
//!
//! ```
//! use semrange_cargo::CargoParser;
//! use semrange_core::ConstraintParser;
//!
//! let parser = CargoParser::new();
//! assert_eq!(parser.parse("0.2.3").unwrap().to_string(), "[0.2.3,0.3.0)");
//! assert_eq!(parser.parse(">=1.2, <1.5").unwrap().to_string(), "[1.2.0,1.5.0)");
//! ```

pub mod error;
pub mod parser;

// Re-export commonly used types
pub use error::{CargoError, Result};
pub use parser::{CargoParser, parse_requirement};
