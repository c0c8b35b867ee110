pub mod extractor;
pub mod normalize;
pub mod vocab;

pub use extractor::{FEATURE_WEIGHT, FeatureSet, extract_features, keys, token_features};
pub use normalize::{NormalizedToken, STANDALONE_SYMBOLS, abbreviate, normalize};
pub use vocab::{DIRECTIONS, STREET_SUFFIXES, is_direction, is_street_suffix};
