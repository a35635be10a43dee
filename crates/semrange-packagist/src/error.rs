//! Errors specific to Composer constraint parsing.

use semrange_core::ConstraintError;
use thiserror::Error;

/// Errors specific to Composer constraint parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackagistError {
    /// Text that does not follow the constraint grammar
    #[error("Invalid Composer constraint '{constraint}': {message}")]
    InvalidConstraint { constraint: String, message: String },

    /// Wildcard used as an end of a hyphen range
    #[error("Wildcard not allowed here in '{constraint}'")]
    UnsupportedWildcard { constraint: String },

    #[error(transparent)]
    Core(#[from] ConstraintError),
}

/// Result type alias for Packagist operations.
pub type Result<T> = std::result::Result<T, PackagistError>;

impl PackagistError {
    /// Create an invalid constraint error.
    pub fn invalid_constraint(constraint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            constraint: constraint.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported wildcard error.
    pub fn unsupported_wildcard(constraint: impl Into<String>) -> Self {
        Self::UnsupportedWildcard {
            constraint: constraint.into(),
        }
    }
}

impl From<PackagistError> for ConstraintError {
    fn from(err: PackagistError) -> Self {
        match err {
            PackagistError::InvalidConstraint {
                constraint,
                message,
            } => Self::constraint_parse("packagist", constraint, message),
            PackagistError::UnsupportedWildcard { constraint } => Self::constraint_parse(
                "packagist",
                constraint,
                "wildcard cannot bound a hyphen range",
            ),
            PackagistError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PackagistError::unsupported_wildcard("1.* - 2.0");
        assert_eq!(err.to_string(), "Wildcard not allowed here in '1.* - 2.0'");

        let err = PackagistError::invalid_constraint(">=", "dangling operator");
        assert!(err.to_string().contains("dangling operator"));
    }

    #[test]
    fn test_conversion_to_constraint_error() {
        let err: ConstraintError = PackagistError::unsupported_wildcard("1.0 - 2.*").into();
        assert!(matches!(
            err,
            ConstraintError::ConstraintParse { ref ecosystem, .. } if ecosystem == "packagist"
        ));
    }
}
