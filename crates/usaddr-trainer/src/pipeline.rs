//! Training run: corpus → features → trainer → model file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use usaddr_core::{Corpus, TrainingSet};

use crate::backend::SequenceTrainer;
use crate::error::{Result, TrainError};
use crate::params::TrainerParams;

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingReport {
    /// Number of sequences appended to the trainer.
    pub sequences: usize,
    /// Number of tokens across those sequences.
    pub tokens: usize,
    /// Where the model was written.
    pub model_path: PathBuf,
    /// Size of the written model file.
    pub model_bytes: u64,
}

/// Feed the whole corpus to `trainer`, apply `params` and write the model.
///
/// An empty corpus fails with `UsaddrError::EmptyCorpus` before the trainer
/// is touched. Any trainer failure, or a missing model file afterwards,
/// fails the run.
pub fn train_model<T>(
    corpus: &Corpus,
    trainer: &mut T,
    params: &TrainerParams,
    output: &Path,
) -> Result<TrainingReport>
where
    T: SequenceTrainer + ?Sized,
{
    let training = check_inputs(corpus, params)?;
    run(corpus, &training, trainer, params, output)
}

/// Like [`train_model`], but `make_trainer` is only called once the corpus
/// and `params` have been checked, so a backend is never set up for a run
/// that cannot happen.
pub fn train_model_with<T, F>(
    corpus: &Corpus,
    make_trainer: F,
    params: &TrainerParams,
    output: &Path,
) -> Result<TrainingReport>
where
    T: SequenceTrainer,
    F: FnOnce() -> Result<T>,
{
    let training = check_inputs(corpus, params)?;
    let mut trainer = make_trainer()?;
    run(corpus, &training, &mut trainer, params, output)
}

fn check_inputs(corpus: &Corpus, params: &TrainerParams) -> Result<TrainingSet> {
    info!(total = corpus.len(), "Total sequences");
    let training = corpus.training_set()?;
    params.validate()?;
    Ok(training)
}

fn run<T>(
    corpus: &Corpus,
    training: &TrainingSet,
    trainer: &mut T,
    params: &TrainerParams,
    output: &Path,
) -> Result<TrainingReport>
where
    T: SequenceTrainer + ?Sized,
{
    for (xseq, yseq) in training.iter() {
        trainer.append(xseq, yseq)?;
    }
    debug!(sequences = training.len(), "Appended training sequences");

    for (name, value) in params.to_pairs() {
        trainer.set(name, &value)?;
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(TrainError::io(parent))?;
    }

    info!(output = %output.display(), "Training CRF model...");
    trainer.train(output)?;

    let model_bytes = fs::metadata(output).map_err(TrainError::io(output))?.len();
    info!(output = %output.display(), bytes = model_bytes, "Model saved");

    Ok(TrainingReport {
        sequences: training.len(),
        tokens: corpus.token_count(),
        model_path: output.to_path_buf(),
        model_bytes,
    })
}
