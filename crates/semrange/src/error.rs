use semrange_core::ConstraintError;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the semrange application layer.
///
/// # Examples
///
/// ```
/// use semrange::error::{AppError, Result};
/// use semrange::Ecosystem;
///
/// fn ecosystem_of(name: &str) -> Result<Ecosystem> {
///     Ok(name.parse()?)
/// }
///
/// assert!(matches!(ecosystem_of("pypi"), Err(AppError::Constraint(_))));
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
