use crate::error::{AppError, Result};
use semrange_core::{BumpQuery, Scope};
use serde::Deserialize;
use std::path::Path;

/// Root configuration for a constraint analysis run.
///
/// Loaded from a JSON file; every field has a default, and unknown fields
/// are ignored. Command-line flags override file values.
///
/// # Examples
///
/// ```
/// use semrange::config::{AnalysisConfig, OutputFormat};
///
/// let json = r#"{
///     "predicates": { "soft": false },
///     "output": { "format": "json" }
/// }"#;
///
/// let config: AnalysisConfig = serde_json::from_str(json).unwrap();
/// assert!(!config.predicates.soft);
/// assert!(!config.predicates.semver);
/// assert_eq!(config.output.format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub predicates: PredicateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AnalysisConfig {
    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded analysis config");
        Ok(config)
    }
}

/// How bump and compatibility predicates are evaluated.
///
/// # Defaults
///
/// - `soft`: `true`
/// - `semver`: `false`
/// - `scope`: derived from `soft` (latest member when soft, all members when hard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PredicateConfig {
    #[serde(default = "default_true")]
    pub soft: bool,
    #[serde(default)]
    pub semver: bool,
    #[serde(default)]
    pub scope: Option<Scope>,
}

impl PredicateConfig {
    pub fn query(&self) -> BumpQuery {
        let query = BumpQuery::from_soft(self.soft);
        self.scope.map_or(query, |scope| query.with_scope(scope))
    }
}

impl Default for PredicateConfig {
    fn default() -> Self {
        Self {
            soft: true,
            semver: false,
            scope: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<constraint>\t<interval>\t<flags>`
    #[default]
    Text,
    /// One JSON report object per line
    Json,
}

const fn default_true() -> bool {
    true
}
