//! Error types for corpus-sents.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for corpus operations.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The requested name is not in the registry.
    #[error("unsupported corpus name: {0}")]
    UnsupportedCorpus(String),

    /// The corpus source could not retrieve or read its data.
    #[error("failed to acquire corpus data from {}: {source}", .path.display())]
    Acquisition {
        /// Corpus file or directory being read
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML config parse error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CorpusError {
    /// Whether this is the recoverable "unknown corpus name" condition
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedCorpus(_))
    }
}

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = CorpusError::UnsupportedCorpus("klingon".to_string());
        assert_eq!(err.to_string(), "unsupported corpus name: klingon");
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_acquisition_message_names_path() {
        let err = CorpusError::Acquisition {
            path: PathBuf::from("/data/corpora/brown"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/corpora/brown"));
        assert!(msg.contains("not found"));
        assert!(!err.is_unsupported());
    }
}
