//! Core abstractions for semrange.
//!
//! This crate provides the version model, interval algebra and compatibility
//! predicates shared by every ecosystem grammar (Cargo, npm, Packagist,
//! RubyGems).
//!
//! # Architecture
//!
//! semrange-core defines:
//! - **Versions**: [`Version`] with a total order and [`Bump`] classification
//! - **Interval algebra**: [`Interval`], [`IntervalSet`] and the [`Constraint`] sum type
//! - **Predicates**: bump lookahead, dev-window and compatibility checks
//! - **Grammar seam**: the [`ConstraintParser`] trait, [`EcosystemRegistry`] and
//!   [`PartialVersion`] for versions written with missing or wildcard components
//! - **Error Types**: unified [`ConstraintError`] across all grammars
//!
//! # Examples
//!
//! ```
//! use semrange_core::{Constraint, Interval, Version, allows_minor, allows_major, minor_interval};
//!
//! // what `^1.2.3` desugars to in most grammars
//! let caret = Constraint::from(minor_interval(&Version::new(1, 2, 3)));
//! assert_eq!(caret.to_string(), "[1.2.3,2.0.0)");
//!
//! assert!(allows_minor(&caret, true));
//! assert!(!allows_major(&caret, true));
//! ```

pub mod constraint;
pub mod ecosystem_registry;
pub mod error;
pub mod helpers;
pub mod interval;
pub mod interval_set;
pub mod operator;
pub mod parser;
pub mod partial;
pub mod predicates;
pub mod version;

// Re-export commonly used types
pub use constraint::Constraint;
pub use ecosystem_registry::EcosystemRegistry;
pub use error::{ConstraintError, Result};
pub use helpers::{comparator_interval, minor_interval, patch_interval, unit_patch_interval};
pub use interval::{BoundKind, Endpoint, Interval};
pub use interval_set::IntervalSet;
pub use operator::Operator;
pub use parser::{ConstraintParser, parse_or_empty};
pub use partial::{Part, PartialVersion, hyphen_range};
pub use predicates::{
    BumpQuery, Lookahead, Scope, allows, allows_all_compatible, allows_all_compatible_only,
    allows_all_compatible_only_with, allows_all_compatible_with, allows_compatible,
    allows_compatible_only, allows_compatible_only_with, allows_compatible_with,
    allows_incompatible, allows_incompatible_with, allows_major, allows_minor, allows_patch, dev,
    lower_bounded, strict, upper_bounded,
};
pub use version::{Bump, Version};
