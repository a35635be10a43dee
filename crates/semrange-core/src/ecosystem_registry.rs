use dashmap::DashMap;
use std::sync::Arc;

use crate::constraint::Constraint;
use crate::error::{ConstraintError, Result};
use crate::parser::{ConstraintParser, parse_or_empty};

/// Registry for all available constraint grammars.
///
/// Manages parser implementations and provides lookup by ecosystem ID.
/// It's designed for thread-safe concurrent access using DashMap.
///
/// # Examples
///
/// ```no_run
/// use semrange_core::EcosystemRegistry;
/// use std::sync::Arc;
///
/// let registry = EcosystemRegistry::new();
///
/// // Register grammars (would be actual implementations)
/// // registry.register(Arc::new(CargoParser::new()));
/// // registry.register(Arc::new(NpmParser::new()));
///
/// for id in registry.ecosystem_ids() {
///     println!("Registered: {}", id);
/// }
/// ```
pub struct EcosystemRegistry {
    parsers: DashMap<&'static str, Arc<dyn ConstraintParser>>,
}

impl EcosystemRegistry {
    /// Create a new empty registry
    ///
    /// ```
    /// use semrange_core::EcosystemRegistry;
    ///
    /// let registry = EcosystemRegistry::new();
    /// assert_eq!(registry.ecosystem_ids().len(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            parsers: DashMap::new(),
        }
    }

    /// Register a grammar, replacing any parser with the same ID.
    pub fn register(&self, parser: Arc<dyn ConstraintParser>) {
        let id = parser.id();
        if self.parsers.insert(id, parser).is_some() {
            tracing::debug!(ecosystem = id, "replaced registered constraint parser");
        }
    }

    /// Get parser by ecosystem ID (e.g., "cargo", "npm", "packagist").
    pub fn get(&self, id: &str) -> Option<Arc<dyn ConstraintParser>> {
        self.parsers.get(id).map(|p| Arc::clone(&p))
    }

    /// Parse `text` with the grammar registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::UnsupportedEcosystem`] for an unknown ID,
    /// or whatever the grammar reports.
    pub fn parse(&self, id: &str, text: &str) -> Result<Constraint> {
        self.require(id)?.parse(text)
    }

    /// Parse `text`, degrading grammar failures to the empty constraint.
    ///
    /// # Errors
    ///
    /// Only an unknown ecosystem ID is an error here.
    pub fn parse_or_empty(&self, id: &str, text: &str) -> Result<Constraint> {
        let parser = self.require(id)?;
        Ok(parse_or_empty(parser.as_ref(), text))
    }

    /// Get all registered ecosystem IDs, sorted.
    pub fn ecosystem_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.parsers.iter().map(|p| *p.key()).collect();
        ids.sort_unstable();
        ids
    }

    fn require(&self, id: &str) -> Result<Arc<dyn ConstraintParser>> {
        self.get(id)
            .ok_or_else(|| ConstraintError::UnsupportedEcosystem(id.to_string()))
    }
}

impl Default for EcosystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::version::Version;

    // Mock grammar for testing
    struct MockParser {
        id: &'static str,
        display_name: &'static str,
    }

    impl ConstraintParser for MockParser {
        fn id(&self) -> &'static str {
            self.id
        }

        fn display_name(&self) -> &'static str {
            self.display_name
        }

        fn parse(&self, text: &str) -> Result<Constraint> {
            let version = Version::parse(text)
                .map_err(|e| ConstraintError::constraint_parse(self.id, text, e.to_string()))?;
            Ok(Interval::at_least(version).into())
        }
    }

    fn mock(id: &'static str, display_name: &'static str) -> Arc<MockParser> {
        Arc::new(MockParser { id, display_name })
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = EcosystemRegistry::new();
        assert_eq!(registry.ecosystem_ids().len(), 0);
        assert!(registry.get("cargo").is_none());
    }

    #[test]
    fn test_register_and_get() {
        let registry = EcosystemRegistry::new();
        registry.register(mock("test", "Test Ecosystem"));

        let retrieved = registry.get("test").unwrap();
        assert_eq!(retrieved.id(), "test");
        assert_eq!(retrieved.display_name(), "Test Ecosystem");
    }

    #[test]
    fn test_multiple_ecosystems_sorted() {
        let registry = EcosystemRegistry::new();
        registry.register(mock("npm", "npm"));
        registry.register(mock("cargo", "Cargo"));

        assert_eq!(registry.ecosystem_ids(), vec!["cargo", "npm"]);
    }

    #[test]
    fn test_register_replaces() {
        let registry = EcosystemRegistry::new();
        registry.register(mock("cargo", "Old"));
        registry.register(mock("cargo", "New"));

        assert_eq!(registry.ecosystem_ids().len(), 1);
        assert_eq!(registry.get("cargo").unwrap().display_name(), "New");
    }

    #[test]
    fn test_parse_dispatch() {
        let registry = EcosystemRegistry::new();
        registry.register(mock("test", "Test"));

        assert_eq!(
            registry.parse("test", "1.0.0").unwrap().to_string(),
            "[1.0.0,+inf)"
        );
        assert!(matches!(
            registry.parse("test", "nope"),
            Err(ConstraintError::ConstraintParse { .. })
        ));
        assert!(matches!(
            registry.parse("missing", "1.0.0"),
            Err(ConstraintError::UnsupportedEcosystem(_))
        ));
    }

    #[test]
    fn test_parse_or_empty_dispatch() {
        let registry = EcosystemRegistry::new();
        registry.register(mock("test", "Test"));

        assert!(registry.parse_or_empty("test", "nope").unwrap().is_empty());
        assert!(registry.parse_or_empty("missing", "nope").is_err());
    }
}
