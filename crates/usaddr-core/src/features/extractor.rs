//! # Feature Extractor
//!
//! Maps a token sequence to one [`FeatureSet`] per token. The emitted key
//! strings are read verbatim by the deployed CRF tagger, so they must not
//! change shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize::{NormalizedToken, abbreviate};
use super::vocab::is_direction;

/// Feature key names and prefixes.
pub mod keys {
    /// Prefix for the token's own abbreviation.
    pub const WORD: &str = "word=";
    /// Clean form is alphabetic and all uppercase.
    pub const IS_UPPER: &str = "word.isupper";
    /// Clean form starts with an uppercase character.
    pub const IS_TITLE: &str = "word.istitle";
    /// Clean form contains a digit.
    pub const HAS_DIGIT: &str = "word.hasdigit";
    /// Abbreviation is all digits.
    pub const IS_DIGIT: &str = "word.isdigit";
    /// Abbreviation is a direction.
    pub const IS_DIRECTION: &str = "word.isdirection";
    /// Clean form ends with a period.
    pub const ENDS_WITH_PERIOD: &str = "word.endswithperiod";
    /// Prefix for the previous token's abbreviation.
    pub const PREV_WORD: &str = "prev_word=";
    /// Prefix for the next token's abbreviation.
    pub const NEXT_WORD: &str = "next_word=";
    /// Beginning of sequence.
    pub const BOS: &str = "BOS";
    /// End of sequence.
    pub const EOS: &str = "EOS";
}

/// Weight assigned to every emitted feature.
pub const FEATURE_WEIGHT: f64 = 1.0;

/// All features active for one token at one sequence position.
///
/// Keys are kept sorted so serialized output is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    features: BTreeMap<String, f64>,
}

impl FeatureSet {
    /// Create an empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a feature with the fixed weight.
    pub fn insert(&mut self, key: impl Into<String>) {
        self.features.insert(key.into(), FEATURE_WEIGHT);
    }

    /// Whether the given key is active.
    pub fn contains(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    /// Number of active features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature is active.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over active keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Iterate over `(key, weight)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = (&'a String, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

/// Features describing a single token, without sequence context.
pub fn token_features(token: &str) -> FeatureSet {
    let mut set = FeatureSet::new();
    add_token_features(&mut set, &NormalizedToken::new(token));
    set
}

/// Extract one feature set per token, adding `BOS`/`EOS` and neighbour
/// context.
///
/// # Examples
/// ```
/// use usaddr_core::features::extract_features;
///
/// let features = extract_features(&["123", "Main", "St", "N"]);
/// assert_eq!(features.len(), 4);
/// assert!(features[0].contains("BOS"));
/// assert!(features[0].contains("next_word=main"));
/// assert!(features[3].contains("word.isdirection"));
/// ```
pub fn extract_features<S: AsRef<str>>(tokens: &[S]) -> Vec<FeatureSet> {
    let abbrevs: Vec<String> = tokens.iter().map(|t| abbreviate(t.as_ref())).collect();
    let last = tokens.len().saturating_sub(1);

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let mut set = FeatureSet::new();
            add_token_features(&mut set, &NormalizedToken::new(token.as_ref()));

            if i == 0 {
                set.insert(keys::BOS);
            } else if !abbrevs[i - 1].is_empty() {
                set.insert(format!("{}{}", keys::PREV_WORD, abbrevs[i - 1]));
            }

            if i == last {
                set.insert(keys::EOS);
            } else if !abbrevs[i + 1].is_empty() {
                set.insert(format!("{}{}", keys::NEXT_WORD, abbrevs[i + 1]));
            }

            set
        })
        .collect()
}

fn add_token_features(set: &mut FeatureSet, norm: &NormalizedToken<'_>) {
    let clean = norm.clean();
    let abbrev = norm.abbrev();

    if !abbrev.is_empty() {
        set.insert(format!("{}{}", keys::WORD, abbrev));
    }

    // Uncased letters do not break an all-caps run, but at least one must be uppercase.
    if clean.chars().all(char::is_alphabetic)
        && clean.chars().any(char::is_uppercase)
        && !clean.chars().any(char::is_lowercase)
    {
        set.insert(keys::IS_UPPER);
    }
    if clean.chars().next().is_some_and(char::is_uppercase) {
        set.insert(keys::IS_TITLE);
    }
    if clean.chars().any(|c| c.is_ascii_digit()) {
        set.insert(keys::HAS_DIGIT);
    }
    if !abbrev.is_empty() && abbrev.chars().all(|c| c.is_ascii_digit()) {
        set.insert(keys::IS_DIGIT);
    }
    if is_direction(abbrev) {
        set.insert(keys::IS_DIRECTION);
    }
    if clean.ends_with('.') {
        set.insert(keys::ENDS_WITH_PERIOD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(set: &FeatureSet) -> Vec<&str> {
        set.keys().collect()
    }

    #[test]
    fn test_street_address_sequence() {
        let features = extract_features(&["123", "Main", "St", "N"]);
        assert_eq!(features.len(), 4);

        let first = &features[0];
        for key in ["word=123", "word.isdigit", "word.hasdigit", "BOS", "next_word=main"] {
            assert!(first.contains(key), "missing {key} in {:?}", keys_of(first));
        }
        assert!(!first.contains("word.istitle"));
        assert!(!first.contains("EOS"));

        let last = &features[3];
        for key in ["word=n", "word.isupper", "word.istitle", "word.isdirection", "EOS", "prev_word=st"] {
            assert!(last.contains(key), "missing {key} in {:?}", keys_of(last));
        }
        assert!(!last.contains("BOS"));
    }

    #[test]
    fn test_middle_token_has_both_neighbours() {
        let features = extract_features(&["123", "Main", "St", "N"]);
        let main = &features[1];
        assert_eq!(
            keys_of(main),
            vec!["next_word=st", "prev_word=123", "word.istitle", "word=main"]
        );
    }

    #[test]
    fn test_abbreviation_with_period() {
        let features = extract_features(&["Dr.", "Jones"]);
        let first = &features[0];
        for key in ["word=dr", "word.istitle", "word.endswithperiod", "BOS", "next_word=jones"] {
            assert!(first.contains(key), "missing {key} in {:?}", keys_of(first));
        }
        assert!(features[1].contains("prev_word=dr"));
        assert!(features[1].contains("EOS"));
    }

    #[test]
    fn test_single_token_gets_bos_and_eos() {
        let features = extract_features(&["Chicago"]);
        assert_eq!(features.len(), 1);
        assert!(features[0].contains("BOS"));
        assert!(features[0].contains("EOS"));
        assert!(!features[0].keys().any(|k| k.starts_with("prev_word=")));
        assert!(!features[0].keys().any(|k| k.starts_with("next_word=")));
    }

    #[test]
    fn test_empty_sequence() {
        let tokens: [&str; 0] = [];
        assert!(extract_features(&tokens).is_empty());
    }

    #[test]
    fn test_punctuation_neighbour_emits_no_context() {
        let features = extract_features(&["Main", ",", "Chicago"]);
        assert!(!features[0].keys().any(|k| k.starts_with("next_word=")));
        assert!(!features[2].keys().any(|k| k.starts_with("prev_word=")));
        assert!(!features[0].contains("EOS"));
        assert!(!features[2].contains("BOS"));

        let comma = &features[1];
        assert!(!comma.keys().any(|k| k.starts_with("word=")));
        assert_eq!(
            keys_of(comma),
            vec!["next_word=chicago", "prev_word=main"]
        );
    }

    #[test]
    fn test_standalone_symbol() {
        let set = token_features("&");
        assert!(set.contains("word=&"));
        assert!(!set.contains("word.isupper"));
        assert!(!set.contains("word.istitle"));
    }

    #[test]
    fn test_isupper_requires_alphabetic() {
        assert!(token_features("PO").contains("word.isupper"));
        assert!(!token_features("4B").contains("word.isupper"));
        assert!(!token_features("Po").contains("word.isupper"));
        assert!(token_features("4B").contains("word.hasdigit"));
        assert!(!token_features("4B").contains("word.isdigit"));
    }

    #[test]
    fn test_istitle_is_first_letter_only() {
        assert!(token_features("McDonald").contains("word.istitle"));
        assert!(token_features("USA").contains("word.istitle"));
        assert!(!token_features("main").contains("word.istitle"));
    }

    #[test]
    fn test_direction_spelled_out() {
        let set = token_features("Northeast");
        assert!(set.contains("word=northeast"));
        assert!(set.contains("word.isdirection"));
        assert!(token_features("N.W.").contains("word.isdirection"));
    }

    #[test]
    fn test_digit_and_direction_are_exclusive() {
        let tokens = ["1", "N", "22", "Southwest", "S.", "0"];
        for set in extract_features(&tokens) {
            assert!(!(set.contains("word.isdigit") && set.contains("word.isdirection")));
        }
    }

    #[test]
    fn test_all_weights_are_one() {
        for set in extract_features(&["PO", "Box", "1234"]) {
            assert!(set.iter().all(|(_, w)| w == FEATURE_WEIGHT));
        }
    }

    #[test]
    fn test_feature_keys_are_closed() {
        let tokens = ["#", "12-B", "N.", "Main", ",", "St.", "Apt", "½", "Chicago", "IL", "60601"];
        let prefixes = [keys::WORD, keys::PREV_WORD, keys::NEXT_WORD];
        let flags = [
            keys::IS_UPPER,
            keys::IS_TITLE,
            keys::HAS_DIGIT,
            keys::IS_DIGIT,
            keys::IS_DIRECTION,
            keys::ENDS_WITH_PERIOD,
            keys::BOS,
            keys::EOS,
        ];
        for set in extract_features(&tokens) {
            for key in set.keys() {
                let known = flags.contains(&key) || prefixes.iter().any(|p| key.starts_with(p));
                assert!(known, "unexpected feature key {key}");
            }
        }
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let set = token_features("N");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["word=n"], serde_json::json!(1.0));
        assert_eq!(json["word.isdirection"], serde_json::json!(1.0));
    }
}
