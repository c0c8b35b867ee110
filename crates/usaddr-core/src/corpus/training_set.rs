use crate::features::FeatureSet;
use crate::types::LabeledSequence;

/// Positionally aligned feature and label sequences, ready for a CRF trainer.
///
/// Entry `i` of `features` and entry `i` of `labels` come from the same
/// labeled sequence and have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    features: Vec<Vec<FeatureSet>>,
    labels: Vec<Vec<String>>,
}

impl TrainingSet {
    pub fn features(&self) -> &[Vec<FeatureSet>] {
        &self.features
    }

    pub fn labels(&self) -> &[Vec<String>] {
        &self.labels
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over `(xseq, yseq)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&[FeatureSet], &[String])> {
        self.features
            .iter()
            .zip(&self.labels)
            .map(|(x, y)| (x.as_slice(), y.as_slice()))
    }
}

/// Extract features for every sequence and pair them with the labels.
pub fn build_training_set(records: &[LabeledSequence]) -> TrainingSet {
    let (features, labels) = records
        .iter()
        .map(|seq| (seq.features(), seq.labels().to_vec()))
        .unzip();
    TrainingSet { features, labels }
}
