//! RubyGems requirement grammar.
//!
//! Desugars `Gemfile` and gemspec requirements such as `~> 1.5`,
//! `>= 2.0, < 3` and `!= 1.2.4` into [`semrange_core::Constraint`] values.
//!
//! # Examples
//!
//! ```
//! use semrange_core::ConstraintParser;
//! use semrange_rubygems::RubyGemsParser;
//!
//! let parser = RubyGemsParser::new();
//! assert_eq!(parser.parse("~> 1.5").unwrap().to_string(), "[1.5.0,2.0.0)");
//! assert_eq!(parser.parse("~> 1.5.3").unwrap().to_string(), "[1.5.3,1.6.0)");
//! ```

pub mod error;
pub mod parser;

// Re-export commonly used types
pub use error::{Result, RubyGemsError};
pub use parser::{RubyGemsParser, parse_requirement};
