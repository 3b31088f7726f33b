//! Corpus name registry
//!
//! Maps corpus names to sources. New corpora are added with `register`,
//! dispatch never changes.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::{CorpusSource, LocalCorpus};
use crate::error::{CorpusError, Result};

/// Corpora registered by default: general, literary, web, news and
/// government text.
pub const DEFAULT_CORPORA: &[&str] = &["brown", "gutenberg", "inaugural", "reuters", "webtext"];

/// Registry of supported corpora
#[derive(Default)]
pub struct CorpusRegistry {
    sources: BTreeMap<String, Box<dyn CorpusSource>>,
}

impl CorpusRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the default corpora read from `<data_dir>/corpora/<name>`
    pub fn with_defaults<P: AsRef<Path>>(data_dir: P) -> Self {
        let root = data_dir.as_ref().join("corpora");
        let mut registry = Self::new();
        for &name in DEFAULT_CORPORA {
            registry.register(LocalCorpus::new(name, root.join(name)));
        }
        registry
    }

    /// Register a source under its own name, replacing any previous one
    pub fn register<S: CorpusSource + 'static>(&mut self, source: S) {
        let name = source.name().to_string();
        debug!("Registering corpus '{}'", name);
        self.sources.insert(name, Box::new(source));
    }

    /// Look up the source for a name
    pub fn resolve(&self, name: &str) -> Result<&dyn CorpusSource> {
        match self.sources.get(name) {
            Some(source) => Ok(source.as_ref()),
            None => Err(CorpusError::UnsupportedCorpus(name.to_string())),
        }
    }

    /// Whether a name is supported
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Supported names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    /// Number of registered corpora
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for CorpusRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::InMemoryCorpus;

    #[test]
    fn test_default_names() {
        let registry = CorpusRegistry::with_defaults("/data");
        assert_eq!(
            registry.names(),
            vec!["brown", "gutenberg", "inaugural", "reuters", "webtext"]
        );
        assert!(registry.contains("reuters"));
    }

    #[test]
    fn test_unsupported_name() {
        let registry = CorpusRegistry::with_defaults("/data");
        let err = registry.resolve("klingon").err().unwrap();
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported corpus name: klingon");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let registry = CorpusRegistry::with_defaults("/data");
        assert!(registry.resolve("Brown").is_err());
    }

    #[test]
    fn test_register_custom_source() {
        let mut registry = CorpusRegistry::new();
        assert!(registry.is_empty());
        registry.register(InMemoryCorpus::from_tokens("toy", &[&["Hi"]]));

        let source = registry.resolve("toy").unwrap();
        assert_eq!(source.name(), "toy");
        assert_eq!(source.sentences().unwrap(), vec![vec!["Hi".to_string()]]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CorpusRegistry::new();
        registry.register(InMemoryCorpus::from_tokens("toy", &[&["old"]]));
        registry.register(InMemoryCorpus::from_tokens("toy", &[&["new"]]));
        let sentences = registry.resolve("toy").unwrap().sentences().unwrap();
        assert_eq!(sentences, vec![vec!["new".to_string()]]);
    }
}
