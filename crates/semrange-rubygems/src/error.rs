use semrange_core::ConstraintError;
use thiserror::Error;

/// Errors specific to RubyGems requirement parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RubyGemsError {
    #[error("Invalid RubyGems requirement '{constraint}': {message}")]
    InvalidConstraint { constraint: String, message: String },

    /// RubyGems has no wildcard syntax; kept for symmetry with the other grammars
    #[error("Wildcards are not part of RubyGems requirements: '{constraint}'")]
    UnsupportedWildcard { constraint: String },

    #[error(transparent)]
    Core(#[from] ConstraintError),
}

/// Result type alias for RubyGems operations.
pub type Result<T> = std::result::Result<T, RubyGemsError>;

impl RubyGemsError {
    pub fn invalid_constraint(constraint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            constraint: constraint.into(),
            message: message.into(),
        }
    }
}

impl From<RubyGemsError> for ConstraintError {
    fn from(err: RubyGemsError) -> Self {
        match err {
            RubyGemsError::InvalidConstraint {
                constraint,
                message,
            } => Self::constraint_parse("rubygems", constraint, message),
            RubyGemsError::UnsupportedWildcard { constraint } => {
                Self::constraint_parse("rubygems", constraint, "wildcards are not supported")
            }
            RubyGemsError::Core(e) => e,
        }
    }
}
