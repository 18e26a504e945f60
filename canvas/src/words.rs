//! Target words the player is asked to draw.
//!
//! Words are matched against model labels exactly, so the default list uses
//! QuickDraw category names verbatim.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::ConfigError;

/// Built-in word list, a subset of the QuickDraw categories.
pub const DEFAULT_WORDS: &[&str] = &[
    "airplane", "alarm clock", "apple", "axe", "banana", "baseball bat", "basketball", "bicycle", "bird",
    "book", "bowtie", "bucket", "butterfly", "cactus", "cake", "camera", "candle", "car", "carrot", "cat",
    "chair", "circle", "clock", "cloud", "coffee cup", "crown", "cup", "diamond", "dog", "donut", "door",
    "envelope", "eye", "eyeglasses", "fish", "flower", "fork", "guitar", "hammer", "hat", "headphones",
    "hexagon", "house", "ice cream", "key", "ladder", "leaf", "light bulb", "lightning", "line", "moon",
    "mountain", "mushroom", "octagon", "pants", "pencil", "pizza", "rainbow", "scissors", "shoe",
    "smiley face", "snake", "snowflake", "snowman", "spoon", "square", "star", "sun", "sword", "t-shirt",
    "table", "tennis racquet", "tree", "triangle", "umbrella", "wheel", "wine glass", "zigzag",
];

/// A non-empty list of candidate target words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWordList`] when `words` has no non-blank entry.
    pub fn new(words: Vec<String>) -> Result<Self, ConfigError> {
        let words: Vec<String> = words.into_iter().filter(|w| !w.trim().is_empty()).collect();
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Pick a word uniformly at random. Repeats of the previous pick are allowed.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words.choose(rng).map_or("", String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self { words: DEFAULT_WORDS.iter().map(|w| (*w).to_owned()).collect() }
    }
}
