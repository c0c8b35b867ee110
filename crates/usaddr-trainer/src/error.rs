use std::path::PathBuf;

use thiserror::Error;
use usaddr_core::UsaddrError;

/// Errors that can occur while driving a training run.
#[derive(Debug, Error)]
pub enum TrainError {
    /// Building the corpus or training set failed.
    #[error(transparent)]
    Corpus(#[from] UsaddrError),

    /// A hyperparameter is outside its valid range.
    #[error("invalid trainer parameter {name}={value}")]
    InvalidParam {
        /// Parameter name as the backend knows it.
        name: &'static str,
        /// Rendered value.
        value: String,
    },

    /// The training backend rejected an input or failed to train.
    #[error("trainer backend error: {0}")]
    Backend(String),

    /// The model or export file could not be written or inspected.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the feature export to its sink failed.
    #[error("feature export write failed: {0}")]
    Export(#[source] std::io::Error),

    /// Feature export serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrainError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Result type alias for training operations.
pub type Result<T> = std::result::Result<T, TrainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TrainError::from(UsaddrError::EmptyCorpus);
        assert_eq!(err.to_string(), UsaddrError::EmptyCorpus.to_string());

        let err = TrainError::InvalidParam {
            name: "c2",
            value: "-1".into(),
        };
        assert_eq!(err.to_string(), "invalid trainer parameter c2=-1");

        let err = TrainError::Export(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "feature export write failed: disk full");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrainError>();
    }
}
