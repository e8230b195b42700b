//! Ordered suffix-list stemmer.
//!
//! Used for languages without an algorithmic stemmer. The suffix list is
//! scanned in declared order and the first suffix the word ends with is
//! stripped. This is first-match, not longest-match: with `["s", "es"]` the
//! word "boxes" becomes "boxe". At most one suffix is removed per word, and a
//! word matching no suffix is returned unchanged.

use super::Stemmer;

/// Stemmer that strips the first matching suffix from an ordered list.
#[derive(Debug, Clone, Default)]
pub struct SuffixStemmer {
    suffixes: Vec<String>,
}

impl SuffixStemmer {
    /// Create a suffix stemmer. Empty suffixes are ignored.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SuffixStemmer {
            suffixes: suffixes
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// The suffixes in scan order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// The suffix that `stem` would strip from `word`, if any.
    pub fn matching_suffix(&self, word: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|suffix| word.ends_with(suffix.as_str()))
            .map(String::as_str)
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        match self.matching_suffix(word) {
            Some(suffix) => word[..word.len() - suffix.len()].to_string(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
