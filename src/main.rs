//! corpus-sents CLI - write a corpus as deduplicated lowercase sentences

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use corpus_sents::{Config, CorpusPipeline, DEFAULT_CORPORA};

/// Write `<name>.txt`: one lowercase sentence per line, duplicates removed
#[derive(Parser, Debug)]
#[command(name = "corpus-sents")]
#[command(author, version, about, long_about = None)]
#[command(after_help = after_help())]
struct Cli {
    /// Corpus name
    name: String,
}

fn after_help() -> String {
    format!("Supported corpora: {}", DEFAULT_CORPORA.join(", "))
}

fn setup_logging() {
    // Quiet unless RUST_LOG asks otherwise; a successful run prints nothing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}

fn report_unsupported(name: &str) {
    eprintln!("unsupported corpus name: {}", name);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    // Unknown names are reported before config is read, so they never fail
    if !DEFAULT_CORPORA.contains(&cli.name.as_str()) {
        report_unsupported(&cli.name);
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("Config: {:?}", config);
    let pipeline = CorpusPipeline::from_config(&config);

    let pb = create_spinner(&format!("Loading corpus {}...", cli.name));
    let corpus = match pipeline.acquire(&cli.name) {
        Ok(corpus) => corpus,
        Err(e) if e.is_unsupported() => {
            pb.finish_and_clear();
            report_unsupported(&cli.name);
            return Ok(());
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e).with_context(|| format!("Failed to load corpus '{}'", cli.name));
        }
    };

    pb.set_message(format!("Writing {} sentences...", corpus.len()));
    let result = pipeline.write(&corpus);
    pb.finish_and_clear();

    result.with_context(|| format!("Failed to write corpus '{}'", corpus.name))?;
    Ok(())
}
