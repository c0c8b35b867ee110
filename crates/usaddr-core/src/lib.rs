//! # usaddr Core
//!
//! Training-side feature extraction for CRF-based US address parsing.
//! Turns labeled XML address records into the token features the deployed
//! tagger was built against.
//!
//! ## Quick Start
//!
//! ```rust
//! use usaddr_core::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.add_source(
//!     "inline.xml",
//!     "<AddressCollection><AddressString>\
//!      <AddressNumber>123</AddressNumber><StreetName>Main</StreetName>\
//!      </AddressString></AddressCollection>",
//! );
//!
//! let training = corpus.training_set().unwrap();
//! let (xseq, yseq) = training.iter().next().unwrap();
//! assert!(xseq[0].contains("word=123"));
//! assert_eq!(yseq, ["AddressNumber", "StreetName"]);
//! ```
pub mod corpus;
pub mod error;
pub mod features;
pub mod types;

// Re-export primary API
pub use corpus::{Corpus, SourceReport, TrainingSet, build_training_set, parse_records};
pub use error::{Result, UsaddrError};
pub use features::{FeatureSet, NormalizedToken, extract_features, normalize};
pub use types::{LabeledSequence, Tokenizer};
