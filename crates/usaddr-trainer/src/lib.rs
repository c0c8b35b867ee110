//! # usaddr Trainer
//!
//! Drives an external CRF trainer with the corpus and features built by
//! `usaddr-core`, using the hyperparameters of the deployed address model.
//! The CRFsuite backend is enabled by the default `crfsuite` feature.

pub mod backend;
pub mod error;
pub mod export;
pub mod params;
pub mod pipeline;

#[cfg(feature = "crfsuite")]
pub use backend::CrfSuiteTrainer;
pub use backend::SequenceTrainer;
pub use error::{Result, TrainError};
pub use export::{write_jsonl, write_jsonl_file};
pub use params::TrainerParams;
pub use pipeline::{TrainingReport, train_model, train_model_with};
