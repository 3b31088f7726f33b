//! Runtime configuration
//!
//! Loaded from an optional YAML file, then overridden by environment
//! variables. The CLI itself takes no flags besides the corpus name.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{CorpusError, Result};
use crate::text::LineOrder;

/// Path to a YAML config file
pub const CONFIG_ENV: &str = "CORPUS_SENTS_CONFIG";
/// Corpus cache root, same variable NLTK uses
pub const DATA_DIR_ENV: &str = "NLTK_DATA";
/// Directory the artifact is written into
pub const OUTPUT_DIR_ENV: &str = "CORPUS_SENTS_OUTPUT_DIR";
/// Output line order (`sorted` or `first-seen`)
pub const ORDER_ENV: &str = "CORPUS_SENTS_ORDER";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the corpus cache; corpora live under `<data_dir>/corpora/<name>`
    pub data_dir: PathBuf,
    /// Directory receiving `<name>.txt`
    pub output_dir: PathBuf,
    /// Order of lines in the written artifact
    pub order: LineOrder,
}

/// Config file contents; unset keys are resolved after loading
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    order: Option<LineOrder>,
}

impl RawConfig {
    fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn resolve(self, home: Option<String>) -> Config {
        Config {
            data_dir: self.data_dir.unwrap_or_else(|| default_data_dir(home)),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            order: self.order.unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().resolve(std::env::var("HOME").ok())
    }
}

impl Config {
    /// Load config from a YAML file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(RawConfig::read(path)?.resolve(std::env::var("HOME").ok()))
    }

    /// Build config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = match lookup(CONFIG_ENV).filter(|v| !v.is_empty()) {
            Some(path) => RawConfig::read(&path)?,
            None => RawConfig::default(),
        };
        let mut config = raw.resolve(lookup("HOME"));

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(order) = lookup(ORDER_ENV).filter(|v| !v.is_empty()) {
            config.order = order.parse()?;
        }

        Ok(config)
    }

    /// Directory holding the cached files of one corpus
    pub fn corpus_dir(&self, name: &str) -> PathBuf {
        self.data_dir.join("corpora").join(name)
    }
}

fn default_data_dir(home: Option<String>) -> PathBuf {
    match home {
        Some(home) if !home.is_empty() => Path::new(&home).join("nltk_data"),
        _ => PathBuf::from("nltk_data"),
    }
}

impl std::str::FromStr for LineOrder {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" => Ok(Self::Sorted),
            "first-seen" | "first_seen" => Ok(Self::FirstSeen),
            other => Err(CorpusError::Config(format!(
                "unknown line order '{}', expected 'sorted' or 'first-seen'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_from_home() {
        let env = vars(&[("HOME", "/home/ada")]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/home/ada/nltk_data"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.order, LineOrder::Sorted);
    }

    #[test]
    fn test_env_overrides() {
        let env = vars(&[
            ("NLTK_DATA", "/srv/nltk"),
            ("CORPUS_SENTS_OUTPUT_DIR", "/tmp/out"),
            ("CORPUS_SENTS_ORDER", "first-seen"),
        ]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/nltk"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.order, LineOrder::FirstSeen);
        assert_eq!(
            config.corpus_dir("brown"),
            PathBuf::from("/srv/nltk/corpora/brown")
        );
    }

    #[test]
    fn test_bad_order_is_config_error() {
        let env = vars(&[("CORPUS_SENTS_ORDER", "random")]);
        let err = Config::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, CorpusError::Config(_)));
    }

    #[test]
    fn test_load_yaml_with_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "data_dir: /mnt/corpora\norder: first-seen\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/mnt/corpora"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.order, LineOrder::FirstSeen);
    }

    #[test]
    fn test_yaml_without_data_dir_uses_home() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "order: first-seen\n").unwrap();

        let path_str = path.to_string_lossy().to_string();
        let env = vars(&[("HOME", "/home/ada"), ("CORPUS_SENTS_CONFIG", path_str.as_str())]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/home/ada/nltk_data"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.order, LineOrder::FirstSeen);
    }

    #[test]
    fn test_empty_order_keeps_default() {
        let env = vars(&[("CORPUS_SENTS_ORDER", "")]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.order, LineOrder::Sorted);
    }

    #[test]
    fn test_env_wins_over_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output_dir: /from/yaml\n").unwrap();

        let path_str = path.to_string_lossy().to_string();
        let env = vars(&[
            ("CORPUS_SENTS_CONFIG", path_str.as_str()),
            ("CORPUS_SENTS_OUTPUT_DIR", "/from/env"),
        ]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/from/env"));
    }
}
