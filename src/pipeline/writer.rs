//! Artifact writing

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::PipelineReport;
use crate::text::{LineOrder, LineSet, SentenceNormalizer};
use crate::OUTPUT_EXTENSION;

/// Path of the artifact for `corpus_name` inside `dir`
pub fn artifact_path<P: AsRef<Path>>(dir: P, corpus_name: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", corpus_name, OUTPUT_EXTENSION))
}

/// Write lines to `path`, each followed by `\n`, truncating any existing file.
///
/// The file is flushed before returning. On error the handle is dropped, and
/// thereby closed, before the error reaches the caller. Returns the number
/// of lines written.
pub fn write_lines<P, I, S>(path: P, lines: I) -> io::Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    debug!("Wrote {} lines to {:?}", count, path.as_ref());
    Ok(count)
}

/// Normalize, deduplicate and write sentences to `<corpus_name>.txt` in the
/// current working directory, in sorted order.
pub fn normalize_and_write<S: AsRef<str>>(
    corpus_name: &str,
    sentences: &[Vec<S>],
) -> io::Result<()> {
    normalize_and_write_in(".", corpus_name, sentences, LineOrder::default())?;
    Ok(())
}

/// Normalize, deduplicate and write sentences to `<dir>/<corpus_name>.txt`
pub fn normalize_and_write_in<P, S>(
    dir: P,
    corpus_name: &str,
    sentences: &[Vec<S>],
    order: LineOrder,
) -> io::Result<PipelineReport>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    validate_name(corpus_name)?;

    let normalizer = SentenceNormalizer::new();
    let mut lines = LineSet::new(order);
    lines.extend(normalizer.normalize_all(sentences));
    let duplicates = lines.duplicates();

    let path = artifact_path(dir, corpus_name);
    let written = write_lines(&path, lines.iter())?;

    Ok(PipelineReport {
        corpus: corpus_name.to_string(),
        path,
        sentences: sentences.len(),
        lines: written,
        duplicates,
    })
}

/// The name becomes a file stem, so it must be a single path component
fn validate_name(corpus_name: &str) -> io::Result<()> {
    let invalid = corpus_name.is_empty()
        || corpus_name == "."
        || corpus_name == ".."
        || corpus_name.contains(['/', '\\']);
    if invalid {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid corpus name for an output file: {:?}", corpus_name),
        ));
    }
    Ok(())
}
