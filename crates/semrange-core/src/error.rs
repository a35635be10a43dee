use thiserror::Error;

/// Core error types for semrange.
///
/// Shared by every grammar crate. Grammar-specific errors convert into
/// [`ConstraintError::ConstraintParse`] at the [`ConstraintParser`](crate::ConstraintParser)
/// boundary, so callers only ever match on this enum.
///
/// # Examples
///
/// ```
/// use semrange_core::error::{ConstraintError, Result};
/// use semrange_core::Version;
///
/// fn major_of(text: &str) -> Result<u64> {
///     let version: Version = text.parse()?;
///     Ok(version.major())
/// }
///
/// assert_eq!(major_of("v2.1.0").unwrap(), 2);
/// assert!(matches!(
///     major_of("2.1"),
///     Err(ConstraintError::MalformedVersion { .. })
/// ));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("malformed version '{input}'")]
    MalformedVersion { input: String },

    #[error("invalid interval bounds: lower {lower} is greater than upper {upper}")]
    InvalidBounds { lower: String, upper: String },

    #[error("failed to parse {ecosystem} constraint '{input}': {message}")]
    ConstraintParse {
        ecosystem: String,
        input: String,
        message: String,
    },

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("unsupported ecosystem: {0}")]
    UnsupportedEcosystem(String),
}

impl ConstraintError {
    /// Create a malformed version error.
    pub fn malformed_version(input: impl Into<String>) -> Self {
        Self::MalformedVersion {
            input: input.into(),
        }
    }

    /// Create a constraint parse error.
    pub fn constraint_parse(
        ecosystem: impl Into<String>,
        input: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ConstraintParse {
            ecosystem: ecosystem.into(),
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for `Result<T, ConstraintError>`.
pub type Result<T> = std::result::Result<T, ConstraintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_version_display() {
        let error = ConstraintError::malformed_version("1.2");
        assert_eq!(error.to_string(), "malformed version '1.2'");
    }

    #[test]
    fn test_invalid_bounds_display() {
        let error = ConstraintError::InvalidBounds {
            lower: "2.0.0".into(),
            upper: "1.0.0".into(),
        };
        assert_eq!(
            error.to_string(),
            "invalid interval bounds: lower 2.0.0 is greater than upper 1.0.0"
        );
    }

    #[test]
    fn test_constraint_parse_display() {
        let error = ConstraintError::constraint_parse("npm", "not a range", "unexpected token");
        assert_eq!(
            error.to_string(),
            "failed to parse npm constraint 'not a range': unexpected token"
        );
    }

    #[test]
    fn test_unsupported_ecosystem() {
        let error = ConstraintError::UnsupportedEcosystem("pypi".into());
        assert_eq!(error.to_string(), "unsupported ecosystem: pypi");
    }
}
