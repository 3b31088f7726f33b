//! Text processing modules
//!
//! - Sentence normalization (token joining, case folding)
//! - Line deduplication with a deterministic output order

mod dedup;
mod normalizer;

pub use dedup::{LineOrder, LineSet};
pub use normalizer::SentenceNormalizer;
