//! Local corpus cache
//!
//! Reads pre-tokenized sentence files from `<data_dir>/corpora/<name>/`:
//! one sentence per line, tokens separated by whitespace.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{CorpusSource, Sentence};
use crate::error::{CorpusError, Result};

/// Corpus read from a directory of pre-tokenized files
#[derive(Debug, Clone)]
pub struct LocalCorpus {
    name: String,
    dir: PathBuf,
}

impl LocalCorpus {
    /// Create a source reading `dir`
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Directory this source reads
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Regular, non-hidden files directly inside the corpus directory, sorted
    fn files(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(acquisition(
                &self.dir,
                io::Error::new(io::ErrorKind::NotFound, "corpus directory not found"),
            ));
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| acquisition(&self.dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| acquisition(&self.dir, e))?;
            let path = entry.path();
            let hidden = path
                .file_name()
                .map_or(true, |n| n.to_string_lossy().starts_with('.'));
            if !hidden && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CorpusSource for LocalCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn sentences(&self) -> Result<Vec<Sentence>> {
        debug!("Reading corpus '{}' from {:?}", self.name, self.dir());
        let mut sentences = Vec::new();
        for path in self.files()? {
            let content = std::fs::read_to_string(&path).map_err(|e| acquisition(&path, e))?;
            let before = sentences.len();
            sentences.extend(parse_sentences(&content));
            debug!("Read {} sentences from {:?}", sentences.len() - before, path);
        }
        Ok(sentences)
    }
}

/// Split pre-tokenized text into sentences. Blank lines are skipped.
pub(crate) fn parse_sentences(content: &str) -> impl Iterator<Item = Sentence> + '_ {
    content
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Sentence>()
        })
        .filter(|tokens| !tokens.is_empty())
}

fn acquisition(path: &Path, source: io::Error) -> CorpusError {
    CorpusError::Acquisition {
        path: path.to_path_buf(),
        source,
    }
}
