//! Word counting on top of [`Bag`].
//!
//! [`BagOfWords`] splits text into tokens with a pluggable [`Tokenizer`] and
//! counts each token. The default tokenizer matches contiguous runs of word
//! characters (`\w+`).

use core::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::bag::Bag;

/// Produces the tokens found in a piece of text.
pub trait Tokenizer {
    /// Returns every token of `text`, in order of appearance.
    fn tokens<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Each match of the pattern is a token. When the pattern has a capture
/// group, the first group is used instead of the whole match.
impl Tokenizer for Regex {
    fn tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.captures_len() > 1 {
            self.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .collect()
        } else {
            self.find_iter(text).map(|m| m.as_str()).collect()
        }
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        (**self).tokens(text)
    }
}

/// Matches contiguous runs of Unicode word characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is a valid regex"))
}

impl Tokenizer for WordTokenizer {
    fn tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        word_pattern().tokens(text)
    }
}

/// Splits on Unicode whitespace, keeping punctuation attached to words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_whitespace().collect()
    }
}

/// A [`Bag`] of words that can ingest raw text.
///
/// # Examples
/// ```
/// use satchel::BagOfWords;
///
/// let mut words = BagOfWords::new();
/// words.add_text("a man a plan a canal panama");
/// assert_eq!(words.get(&"a".to_string()), 3);
/// assert_eq!(words.unique_count(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BagOfWords {
    bag: Bag<String>,
}

impl BagOfWords {
    /// Creates an empty bag of words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every word of `text`, tokenized with [`WordTokenizer`].
    pub fn add_text(&mut self, text: &str) {
        self.add_text_with(text, WordTokenizer);
    }

    /// Adds every token of `text` produced by `tokenizer`.
    pub fn add_text_with<K: Tokenizer>(&mut self, text: &str, tokenizer: K) {
        for token in tokenizer.tokens(text) {
            self.bag.add(token.to_owned());
        }
    }

    /// Unwraps the underlying bag.
    pub fn into_bag(self) -> Bag<String> {
        self.bag
    }
}

impl From<Bag<String>> for BagOfWords {
    fn from(bag: Bag<String>) -> Self {
        Self { bag }
    }
}

impl Deref for BagOfWords {
    type Target = Bag<String>;

    fn deref(&self) -> &Bag<String> {
        &self.bag
    }
}

impl DerefMut for BagOfWords {
    fn deref_mut(&mut self) -> &mut Bag<String> {
        &mut self.bag
    }
}
