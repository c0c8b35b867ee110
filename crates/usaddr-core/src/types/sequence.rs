use serde::Serialize;

use crate::error::{Result, UsaddrError};
use crate::features::{FeatureSet, extract_features};

/// Tokens of one address record paired with the field label of each token.
///
/// The token and label vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabeledSequence {
    tokens: Vec<String>,
    labels: Vec<String>,
}

impl LabeledSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from parallel token and label vectors.
    ///
    /// # Errors
    ///
    /// Returns `UsaddrError::Misaligned` when the lengths differ.
    pub fn from_parts(tokens: Vec<String>, labels: Vec<String>) -> Result<Self> {
        if tokens.len() != labels.len() {
            return Err(UsaddrError::Misaligned {
                tokens: tokens.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { tokens, labels })
    }

    /// Append one token with its label.
    pub fn push(&mut self, token: impl Into<String>, label: impl Into<String>) {
        self.tokens.push(token.into());
        self.labels.push(label.into());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(token, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(&self.labels)
            .map(|(t, l)| (t.as_str(), l.as_str()))
    }

    /// Run the feature extractor over this sequence's tokens.
    pub fn features(&self) -> Vec<FeatureSet> {
        extract_features(&self.tokens)
    }

    /// Split into the owned token and label vectors.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.tokens, self.labels)
    }
}
