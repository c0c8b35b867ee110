//! Train the CRFsuite address model from labeled XML training files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use usaddr_core::Corpus;
use usaddr_trainer::{CrfSuiteTrainer, TrainerParams, train_model_with, write_jsonl_file};

/// CLI arguments
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train a CRFsuite address-parsing model from labeled XML")]
#[command(version)]
struct Cli {
    /// Directory to scan for *.xml training files (repeatable)
    #[arg(short = 'd', long = "data-dir", default_value = "training_data")]
    data_dirs: Vec<PathBuf>,

    /// Where to write the trained model
    #[arg(
        short,
        long,
        env = "USADDR_MODEL_PATH",
        default_value = "include/usaddr.crfsuite"
    )]
    output: PathBuf,

    /// Also write the extracted features as JSON Lines
    #[arg(long)]
    dump_features: Option<PathBuf>,

    /// Debug logging and CRFsuite optimizer progress
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let corpus = Corpus::from_dirs(&cli.data_dirs).context("failed to scan training data")?;

    let failed = corpus.reports().iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        warn!(failed, "Some training files were skipped");
    }
    for (label, count) in corpus.label_counts() {
        info!(label, count, "Label frequency");
    }

    if let Some(path) = &cli.dump_features {
        let lines = write_jsonl_file(&corpus, path)
            .with_context(|| format!("failed to export features to {}", path.display()))?;
        info!(lines, path = %path.display(), "Exported training features");
    }

    let verbose = cli.verbose;
    let report = train_model_with(
        &corpus,
        || CrfSuiteTrainer::new(verbose),
        &TrainerParams::default(),
        &cli.output,
    )
    .context("training failed")?;

    info!(
        sequences = report.sequences,
        tokens = report.tokens,
        bytes = report.model_bytes,
        path = %report.model_path.display(),
        "Training complete"
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(cli) {
        eprintln!("Training failed: {e:#}");
        std::process::exit(1);
    }
}
