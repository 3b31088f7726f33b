//! Corpus acquisition
//!
//! - `CorpusSource`: capability producing a corpus's tokenized sentences
//! - Local cache reader for pre-tokenized sentence files
//! - Name registry dispatching to sources

mod local;
mod registry;

pub use local::LocalCorpus;
pub use registry::{CorpusRegistry, DEFAULT_CORPORA};

use crate::error::Result;

/// One tokenized sentence, tokens in reading order
pub type Sentence = Vec<String>;

/// Fully materialized collection of sentences, tagged by corpus name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Corpus name, also the artifact's file stem
    pub name: String,
    /// Sentences in source order
    pub sentences: Vec<Sentence>,
}

impl Corpus {
    /// Create a corpus from its name and sentences
    pub fn new(name: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            name: name.into(),
            sentences,
        }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the corpus has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}

/// Capability producing the sentences of one named corpus.
///
/// Implementations may download, read a cache or build data in memory; the
/// pipeline only sees the returned sentences.
pub trait CorpusSource {
    /// Registry name of the corpus
    fn name(&self) -> &str;

    /// Produce every sentence of the corpus
    fn sentences(&self) -> Result<Vec<Sentence>>;

    /// Produce the corpus tagged with its name
    fn load(&self) -> Result<Corpus> {
        Ok(Corpus::new(self.name(), self.sentences()?))
    }
}

/// Source backed by sentences already held in memory
#[derive(Debug, Clone)]
pub struct InMemoryCorpus {
    name: String,
    sentences: Vec<Sentence>,
}

impl InMemoryCorpus {
    /// Create an in-memory source
    pub fn new(name: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            name: name.into(),
            sentences,
        }
    }

    /// Build sentences from string slices
    pub fn from_tokens(name: impl Into<String>, sentences: &[&[&str]]) -> Self {
        let sentences = sentences
            .iter()
            .map(|s| s.iter().map(|t| t.to_string()).collect())
            .collect();
        Self::new(name, sentences)
    }
}

impl CorpusSource for InMemoryCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn sentences(&self) -> Result<Vec<Sentence>> {
        Ok(self.sentences.clone())
    }
}
