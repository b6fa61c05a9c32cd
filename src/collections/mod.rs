//! Counting collections.
//!
//! - [`Bag`]: a multiset with set-algebra operators
//! - [`BagOfWords`]: a `Bag<String>` fed from tokenized text

pub mod bag;
pub mod words;

pub use bag::Bag;
pub use words::{BagOfWords, Tokenizer, WhitespaceTokenizer, WordTokenizer};
