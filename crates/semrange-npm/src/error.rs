//! Errors specific to npm range parsing.

use semrange_core::ConstraintError;
use thiserror::Error;

/// Errors specific to npm range parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NpmError {
    /// Text that does not follow the range grammar
    #[error("Invalid npm range '{constraint}': {message}")]
    InvalidConstraint { constraint: String, message: String },

    /// Number written after a wildcard, like `1.x.3`
    #[error("Unsupported wildcard in npm range '{constraint}'")]
    UnsupportedWildcard { constraint: String },

    /// Version or interval error from the core algebra
    #[error(transparent)]
    Core(#[from] ConstraintError),
}

/// Result type alias for npm operations.
pub type Result<T> = std::result::Result<T, NpmError>;

impl NpmError {
    /// Create an invalid constraint error.
    pub fn invalid_constraint(constraint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            constraint: constraint.into(),
            message: message.into(),
        }
    }
}

impl From<NpmError> for ConstraintError {
    fn from(err: NpmError) -> Self {
        match err {
            NpmError::InvalidConstraint {
                constraint,
                message,
            } => Self::constraint_parse("npm", constraint, message),
            NpmError::UnsupportedWildcard { constraint } => {
                Self::constraint_parse("npm", constraint, "unsupported wildcard")
            }
            NpmError::Core(e) => e,
        }
    }
}
