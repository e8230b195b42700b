//! Word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29). Unlike a pure word
//! segmenter it keeps punctuation marks as their own tokens, and it splits
//! English clitics off their host word the way Treebank-style tokenizers do:
//!
//! ```text
//! "Don't stop, it's late."  →  Do | n't | stop | , | it | 's | late | .
//! ```
//!
//! Indic and Arabic scripts are handled by the segmentation rules themselves:
//! vowel signs and viramas are word-extending characters, so a word such as
//! "పుస్తకం" stays one token.
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::tokenizer::Tokenizer;
//! use bhasha::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Clitics split from the end of a word, written with an ASCII apostrophe.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Apostrophes recognised inside clitics.
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// A tokenizer that splits text on Unicode word boundaries, keeping punctuation.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Byte index at which a trailing clitic starts, if the word has one.
    fn clitic_start(word: &str) -> Option<usize> {
        for clitic in CLITICS {
            for &apostrophe in APOSTROPHES {
                let pattern = clitic.replace('\'', &apostrophe.to_string());
                if word.len() <= pattern.len() {
                    continue;
                }
                let start = word.len() - pattern.len();
                if let Some(tail) = word.get(start..)
                    && tail.eq_ignore_ascii_case(&pattern)
                {
                    return Some(start);
                }
            }
        }
        None
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (offset, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            match Self::clitic_start(segment) {
                Some(at) => {
                    let (host, clitic) = segment.split_at(at);
                    tokens.push(Token::with_offsets(
                        host,
                        tokens.len(),
                        offset,
                        offset + at,
                    ));
                    tokens.push(Token::with_offsets(
                        clitic,
                        tokens.len(),
                        offset + at,
                        offset + segment.len(),
                    ));
                }
                None => tokens.push(Token::with_offsets(
                    segment,
                    tokens.len(),
                    offset,
                    offset + segment.len(),
                )),
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &WordTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_punctuation_is_kept_as_tokens() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "Hello, world! How are you?"),
            vec!["Hello", ",", "world", "!", "How", "are", "you", "?"]
        );
    }

    #[test]
    fn test_clitics_are_split() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "Don't stop, it's late."),
            vec!["Do", "n't", "stop", ",", "it", "'s", "late", "."]
        );
        assert_eq!(texts(&tokenizer, "they\u{2019}ll"), vec!["they", "\u{2019}ll"]);
    }

    #[test]
    fn test_bare_clitic_is_not_split() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(texts(&tokenizer, "n't"), vec!["n't"]);
    }

    #[test]
    fn test_indic_words_stay_whole() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "నేను పుస్తకం చదివాను."),
            vec!["నేను", "పుస్తకం", "చదివాను", "."]
        );
        assert_eq!(texts(&tokenizer, "यह किताब है।"), vec!["यह", "किताब", "है", "।"]);
    }

    #[test]
    fn test_offsets_point_into_original_text() {
        let tokenizer = WordTokenizer::new();
        let text = "a can't b";
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        for token in &tokens {
            assert_eq!(&text[token.start_offset..token.end_offset], token.text);
        }
        assert_eq!(tokens[1].text, "ca");
        assert_eq!(tokens[2].text, "n't");
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let tokenizer = WordTokenizer::new();
        let text = "Same input, same tokens.";
        assert_eq!(texts(&tokenizer, text), texts(&tokenizer, text));
        assert!(texts(&tokenizer, "").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
    }
}
