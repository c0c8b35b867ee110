use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building an address training corpus.
#[derive(Debug, Error)]
pub enum UsaddrError {
    /// A source document could not be parsed as XML.
    #[error("could not parse {source_name}: {reason}")]
    MalformedSource {
        /// Name of the offending source (usually its file path).
        source_name: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// A file or directory could not be read.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No labeled sequences were found across all sources.
    #[error("no training data found: corpus contains zero address sequences")]
    EmptyCorpus,

    /// A sequence was constructed with differing token and label counts.
    #[error("sequence has {tokens} tokens but {labels} labels")]
    Misaligned {
        /// Number of tokens.
        tokens: usize,
        /// Number of labels.
        labels: usize,
    },
}

/// Result type alias for usaddr core operations.
pub type Result<T> = std::result::Result<T, UsaddrError>;
