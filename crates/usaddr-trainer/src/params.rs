//! # Trainer Configuration
//!
//! Hyperparameters handed to the CRF backend. The defaults are the values
//! the deployed address model was trained with.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainError};

/// L-BFGS CRF training parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerParams {
    /// L1 regularization coefficient.
    pub c1: f64,
    /// L2 regularization coefficient.
    pub c2: f64,
    /// Maximum number of optimizer iterations.
    pub max_iterations: u32,
    /// Generate transition features for every label pair, including unseen ones.
    pub possible_transitions: bool,
    /// Features occurring fewer times than this are dropped.
    pub min_freq: f64,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            c1: 0.0,
            c2: 0.001,
            max_iterations: 100,
            possible_transitions: true,
            min_freq: 0.0,
        }
    }
}

impl TrainerParams {
    /// Create parameters with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the L1 regularization coefficient.
    pub fn with_c1(mut self, c1: f64) -> Self {
        self.c1 = c1;
        self
    }

    /// Set the L2 regularization coefficient.
    pub fn with_c2(mut self, c2: f64) -> Self {
        self.c2 = c2;
        self
    }

    /// Set the iteration limit.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Enable or disable generation of all possible transitions.
    pub fn with_possible_transitions(mut self, enabled: bool) -> Self {
        self.possible_transitions = enabled;
        self
    }

    /// Set the minimum feature frequency.
    pub fn with_min_freq(mut self, min_freq: f64) -> Self {
        self.min_freq = min_freq;
        self
    }

    /// Reject negative or non-finite coefficients and a zero iteration limit.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [("c1", self.c1), ("c2", self.c2), ("feature.minfreq", self.min_freq)];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(TrainError::InvalidParam {
                    name,
                    value: value.to_string(),
                });
            }
        }
        if self.max_iterations == 0 {
            return Err(TrainError::InvalidParam {
                name: "max_iterations",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Render as the `(name, value)` pairs CRFsuite's L-BFGS trainer accepts.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("c1", self.c1.to_string()),
            ("c2", self.c2.to_string()),
            ("max_iterations", self.max_iterations.to_string()),
            (
                "feature.possible_transitions",
                u8::from(self.possible_transitions).to_string(),
            ),
            ("feature.minfreq", self.min_freq.to_string()),
        ]
    }
}
