//! Sentence normalization
//!
//! Turns a tokenized sentence into its canonical line:
//! - Tokens joined by a single space
//! - Whole line case folded to lowercase

/// Token separator inside a normalized line
pub const TOKEN_SEPARATOR: &str = " ";

/// Maps a sentence to its normalized line.
///
/// Lowercasing is applied to the joined string, not per token. The separator
/// has no case mapping, so both orders give the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceNormalizer;

impl SentenceNormalizer {
    /// Create a new SentenceNormalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize one sentence
    pub fn normalize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let capacity = tokens.iter().map(|t| t.as_ref().len() + 1).sum();
        let mut joined = String::with_capacity(capacity);
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                joined.push_str(TOKEN_SEPARATOR);
            }
            joined.push_str(token.as_ref());
        }
        joined.to_lowercase()
    }

    /// Normalize every sentence, keeping input order and duplicates
    pub fn normalize_all<'a, S: AsRef<str> + 'a>(
        &'a self,
        sentences: &'a [Vec<S>],
    ) -> impl Iterator<Item = String> + 'a {
        sentences.iter().map(move |s| self.normalize(s))
    }
}
