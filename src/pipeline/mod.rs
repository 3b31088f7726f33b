//! Normalization-dedup pipeline
//!
//! 1. Acquire a corpus through the registry
//! 2. Normalize each sentence to a lowercase line
//! 3. Deduplicate lines
//! 4. Write `<name>.txt`, one line per unique sentence

mod runner;
mod writer;

pub use runner::{CorpusPipeline, PipelineReport};
pub use writer::{artifact_path, normalize_and_write, normalize_and_write_in, write_lines};
