//! # Trainer Backends
//!
//! The training algorithm lives outside this workspace. [`SequenceTrainer`]
//! is the seam: it accepts aligned feature/label sequences and string
//! parameters, then writes a model file.

use std::path::Path;

use usaddr_core::FeatureSet;

use crate::error::Result;

/// A sequence-labeling trainer that writes its model to disk.
pub trait SequenceTrainer {
    /// Add one training sequence. `xseq` and `yseq` have the same length.
    fn append(&mut self, xseq: &[FeatureSet], yseq: &[String]) -> Result<()>;

    /// Set a named training parameter.
    fn set(&mut self, name: &str, value: &str) -> Result<()>;

    /// Fit the model and write it to `model_path`.
    fn train(&mut self, model_path: &Path) -> Result<()>;
}

#[cfg(feature = "crfsuite")]
pub use self::crf::CrfSuiteTrainer;

#[cfg(feature = "crfsuite")]
mod crf {
    use std::path::Path;

    use crfsuite::{Algorithm, Attribute, CrfError, GraphicalModel, Trainer};
    use tracing::debug;
    use usaddr_core::FeatureSet;

    use super::SequenceTrainer;
    use crate::error::{Result, TrainError};

    fn backend(err: CrfError) -> TrainError {
        TrainError::Backend(err.to_string())
    }

    /// CRFsuite first-order linear-chain CRF trained with L-BFGS.
    ///
    /// The written model is in CRFsuite's binary format, which the deployed
    /// tagger loads directly.
    pub struct CrfSuiteTrainer {
        inner: Trainer,
    }

    impl CrfSuiteTrainer {
        /// Create a trainer; `verbose` makes CRFsuite print optimizer progress.
        pub fn new(verbose: bool) -> Result<Self> {
            let mut inner = Trainer::new(verbose);
            inner
                .select(Algorithm::LBFGS, GraphicalModel::CRF1D)
                .map_err(backend)?;
            Ok(Self { inner })
        }
    }

    impl SequenceTrainer for CrfSuiteTrainer {
        fn append(&mut self, xseq: &[FeatureSet], yseq: &[String]) -> Result<()> {
            let items: Vec<Vec<Attribute>> = xseq
                .iter()
                .map(|set| set.iter().map(|(key, weight)| Attribute::new(key, weight)).collect())
                .collect();
            self.inner.append(&items, yseq, 0).map_err(backend)
        }

        fn set(&mut self, name: &str, value: &str) -> Result<()> {
            debug!(name, value, "Setting CRFsuite parameter");
            self.inner.set(name, value).map_err(backend)
        }

        fn train(&mut self, model_path: &Path) -> Result<()> {
            let path = model_path.to_str().ok_or_else(|| {
                TrainError::Backend(format!(
                    "model path is not valid UTF-8: {}",
                    model_path.display()
                ))
            })?;
            self.inner.train(path, -1).map_err(backend)
        }
    }
}
