//! # Corpus Builder
//!
//! Collects labeled address sequences from XML training documents. A
//! document that cannot be read or parsed is logged and skipped; it never
//! aborts the build.

pub mod training_set;
pub mod xml;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, UsaddrError};
use crate::types::LabeledSequence;

pub use training_set::{TrainingSet, build_training_set};
pub use xml::{ADDRESS_TAG, parse_records};

/// File extension of training documents.
pub const TRAINING_FILE_EXTENSION: &str = "xml";

/// Outcome of reading one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Source name, usually a file path.
    pub name: String,
    /// Number of sequences contributed.
    pub sequences: usize,
    /// Why the source contributed nothing, if it failed.
    pub error: Option<String>,
}

/// Labeled sequences gathered from any number of sources.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sequences: Vec<LabeledSequence>,
    reports: Vec<SourceReport>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from every `*.xml` file in the given directories.
    ///
    /// # Errors
    ///
    /// Returns `UsaddrError::Io` if an existing directory cannot be listed.
    pub fn from_dirs<I, P>(dirs: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut corpus = Self::new();
        for dir in dirs {
            corpus.add_dir(dir)?;
        }
        Ok(corpus)
    }

    /// Parse an in-memory document and add its sequences.
    ///
    /// Returns the number of sequences found; a malformed document is
    /// logged and contributes zero.
    pub fn add_source(&mut self, name: impl Into<String>, text: &str) -> usize {
        let name = name.into();
        match parse_records(&name, text) {
            Ok(records) => {
                let found = records.len();
                info!(source = %name, sequences = found, "Found address sequences");
                self.sequences.extend(records);
                self.reports.push(SourceReport {
                    name,
                    sequences: found,
                    error: None,
                });
                found
            }
            Err(err) => {
                warn!("Skipping source: {err}");
                self.record_failure(name, err);
                0
            }
        }
    }

    /// Read and parse one file.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading training file");
        match fs::read_to_string(path) {
            Ok(text) => self.add_source(path.display().to_string(), &text),
            Err(source) => {
                let err = UsaddrError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                warn!("Skipping source: {err}");
                self.record_failure(path.display().to_string(), err);
                0
            }
        }
    }

    /// Add every `*.xml` file in a directory, in path order.
    ///
    /// A directory that does not exist is skipped with a warning.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "Skipping training directory (not found)");
            return Ok(0);
        }

        info!(dir = %dir.display(), "Processing training directory");
        let files = training_files(dir)?;
        Ok(files.iter().map(|file| self.add_file(file)).sum())
    }

    pub fn sequences(&self) -> &[LabeledSequence] {
        &self.sequences
    }

    /// Per-source diagnostics, in the order sources were added.
    pub fn reports(&self) -> &[SourceReport] {
        &self.reports
    }

    /// Total number of sequences across all sources.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Total number of tokens across all sequences.
    pub fn token_count(&self) -> usize {
        self.sequences.iter().map(LabeledSequence::len).sum()
    }

    /// Number of tokens carrying each label.
    pub fn label_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for label in self.sequences.iter().flat_map(|seq| seq.labels()) {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Build the trainer input for the whole corpus.
    ///
    /// # Errors
    ///
    /// Returns `UsaddrError::EmptyCorpus` when no sequences were found.
    pub fn training_set(&self) -> Result<TrainingSet> {
        if self.is_empty() {
            return Err(UsaddrError::EmptyCorpus);
        }
        Ok(build_training_set(&self.sequences))
    }

    fn record_failure(&mut self, name: String, err: UsaddrError) {
        self.reports.push(SourceReport {
            name,
            sequences: 0,
            error: Some(err.to_string()),
        });
    }
}

fn training_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| UsaddrError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_xml = path
            .extension()
            .is_some_and(|ext| ext == TRAINING_FILE_EXTENSION);
        if is_xml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
