//! # corpus-sents
//!
//! Turns named text corpora into flat training files: one sentence per line,
//! lowercase, with duplicate lines removed.
//!
//! ## Features
//!
//! - Pluggable corpus sources behind a name registry
//! - Deterministic line order (sorted or first-seen)
//! - Local cache reader for pre-tokenized sentence files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use corpus_sents::pipeline::normalize_and_write;
//!
//! let sentences = vec![
//!     vec!["The".to_string(), "Cat".to_string()],
//!     vec!["the".to_string(), "cat".to_string()],
//! ];
//! // Writes `pets.txt` containing the single line "the cat"
//! normalize_and_write("pets", &sentences)?;
//! ```

// Require docs for public items
#![warn(missing_docs)]
#![allow(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod text;

// Re-exports for convenience
pub use config::Config;
pub use corpus::{
    Corpus, CorpusRegistry, CorpusSource, InMemoryCorpus, LocalCorpus, Sentence, DEFAULT_CORPORA,
};
pub use error::{CorpusError, Result};
pub use pipeline::{normalize_and_write, CorpusPipeline, PipelineReport};
pub use text::{LineOrder, LineSet, SentenceNormalizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension of the written artifact
pub const OUTPUT_EXTENSION: &str = "txt";
