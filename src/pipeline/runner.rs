//! Registry-driven pipeline runner

use std::path::PathBuf;
use tracing::{debug, info};

use super::writer::normalize_and_write_in;
use crate::config::Config;
use crate::corpus::{Corpus, CorpusRegistry};
use crate::error::Result;
use crate::text::LineOrder;

/// Summary of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Corpus name
    pub corpus: String,
    /// Written artifact
    pub path: PathBuf,
    /// Sentences read from the source
    pub sentences: usize,
    /// Unique lines written
    pub lines: usize,
    /// Sentences dropped as duplicates after normalization
    pub duplicates: usize,
}

/// Resolves a corpus by name and writes its normalized artifact
#[derive(Debug)]
pub struct CorpusPipeline {
    registry: CorpusRegistry,
    output_dir: PathBuf,
    order: LineOrder,
}

impl CorpusPipeline {
    /// Create a pipeline over an explicit registry
    pub fn new(registry: CorpusRegistry, output_dir: impl Into<PathBuf>, order: LineOrder) -> Self {
        Self {
            registry,
            output_dir: output_dir.into(),
            order,
        }
    }

    /// Pipeline over the default corpora, as described by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CorpusRegistry::with_defaults(&config.data_dir),
            config.output_dir.clone(),
            config.order,
        )
    }

    /// Registry used for dispatch
    pub fn registry(&self) -> &CorpusRegistry {
        &self.registry
    }

    /// Fetch the corpus registered under `name`.
    ///
    /// An unknown name fails before any source is touched.
    pub fn acquire(&self, name: &str) -> Result<Corpus> {
        let source = self.registry.resolve(name).map_err(|e| {
            debug!("{} (supported: {})", e, self.registry.names().join(", "));
            e
        })?;
        let corpus = source.load()?;
        debug!(
            "Loaded corpus '{}': {} sentences, {} tokens",
            corpus.name,
            corpus.len(),
            corpus.num_tokens()
        );
        Ok(corpus)
    }

    /// Normalize, deduplicate and write an acquired corpus
    pub fn write(&self, corpus: &Corpus) -> Result<PipelineReport> {
        let report = normalize_and_write_in(
            &self.output_dir,
            &corpus.name,
            &corpus.sentences,
            self.order,
        )?;
        info!(
            "Wrote {} unique lines from {} sentences to {:?} ({} duplicates dropped)",
            report.lines, report.sentences, report.path, report.duplicates
        );
        Ok(report)
    }

    /// Acquire and write in one step
    pub fn run(&self, name: &str) -> Result<PipelineReport> {
        let corpus = self.acquire(name)?;
        self.write(&corpus)
    }
}
