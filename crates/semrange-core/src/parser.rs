use crate::constraint::Constraint;
use crate::error::Result;

/// Generic constraint grammar interface.
///
/// Implementors desugar one ecosystem's constraint syntax (`^1.2`, `~> 1.5`,
/// `1.x || >=2.1 <3`, ...) into a [`Constraint`]. Parsers are stateless and
/// shared behind an `Arc` by the [`EcosystemRegistry`](crate::EcosystemRegistry).
pub trait ConstraintParser: Send + Sync {
    /// Unique ecosystem identifier (e.g., "cargo", "npm").
    fn id(&self) -> &'static str;

    /// Human-readable ecosystem name.
    fn display_name(&self) -> &'static str;

    /// Parses a constraint string.
    ///
    /// Empty or whitespace-only input admits every version.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ConstraintParse`](crate::ConstraintError::ConstraintParse)
    /// when the text does not follow the grammar, or
    /// [`ConstraintError::InvalidBounds`](crate::ConstraintError::InvalidBounds)
    /// when a range such as `2.0 - 1.0` runs backwards.
    fn parse(&self, text: &str) -> Result<Constraint>;
}

/// Parses `text`, degrading any failure to the empty constraint.
///
/// The failure is logged at debug level so batch analyses can still report
/// how many inputs were unreadable.
///
/// ```
/// use semrange_core::{Constraint, ConstraintParser, parse_or_empty};
/// use semrange_core::error::{ConstraintError, Result};
///
/// struct Rejecting;
///
/// impl ConstraintParser for Rejecting {
///     fn id(&self) -> &'static str { "rejecting" }
///     fn display_name(&self) -> &'static str { "Rejecting" }
///     fn parse(&self, text: &str) -> Result<Constraint> {
///         Err(ConstraintError::constraint_parse(self.id(), text, "never valid"))
///     }
/// }
///
/// assert!(parse_or_empty(&Rejecting, "1.0").is_empty());
/// ```
pub fn parse_or_empty(parser: &dyn ConstraintParser, text: &str) -> Constraint {
    match parser.parse(text) {
        Ok(constraint) => constraint,
        Err(error) => {
            tracing::debug!(
                ecosystem = parser.id(),
                constraint = text,
                error = %error,
                "constraint unreadable, treating as empty"
            );
            Constraint::empty()
        }
    }
}
