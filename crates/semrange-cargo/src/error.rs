//! Errors specific to Cargo requirement parsing.

use semrange_core::ConstraintError;
use thiserror::Error;

/// Errors specific to Cargo requirement parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CargoError {
    /// Text that does not follow the requirement grammar
    #[error("Invalid Cargo requirement '{constraint}': {message}")]
    InvalidConstraint { constraint: String, message: String },

    /// Wildcard combined with an operator, like `>=1.*`
    #[error("Wildcard cannot follow an operator in '{constraint}'")]
    UnsupportedWildcard { constraint: String },

    /// Version or interval error from the core algebra
    #[error(transparent)]
    Core(#[from] ConstraintError),
}

/// Result type alias for Cargo operations.
pub type Result<T> = std::result::Result<T, CargoError>;

impl CargoError {
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

/// Convert to semrange_core::ConstraintError at the parser trait boundary
impl From<CargoError> for ConstraintError {
    fn from(err: CargoError) -> Self {
        match err {
            CargoError::InvalidConstraint {
                constraint,
                message,
            } => Self::constraint_parse("cargo", constraint, message),
            CargoError::UnsupportedWildcard { constraint } => {
                Self::constraint_parse("cargo", constraint, "wildcard cannot follow an operator")
            }
            CargoError::Core(e) => e,
        }
    }
}
