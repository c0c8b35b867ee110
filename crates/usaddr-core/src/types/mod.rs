pub mod sequence;
pub mod token;

pub use sequence::LabeledSequence;
pub use token::Tokenizer;
