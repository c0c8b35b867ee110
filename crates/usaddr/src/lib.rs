//! # usaddr
//!
//! Training-side toolkit for CRF-based US postal address parsing: feature
//! extraction and corpus building from [`usaddr_core`], and the trainer
//! driver from [`usaddr_trainer`].

pub use usaddr_core::{
    Corpus, FeatureSet, LabeledSequence, TrainingSet, UsaddrError, extract_features, normalize,
    parse_records,
};
pub use usaddr_trainer::{
    SequenceTrainer, TrainError, TrainerParams, TrainingReport, train_model, train_model_with,
};
