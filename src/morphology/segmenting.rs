//! Built-in analyzer based on Unicode text segmentation (UAX #29).
//!
//! Sentence boundaries follow the Unicode sentence rules, which recognise the
//! Devanagari danda and the Arabic full stop as terminators. Words are the
//! non-whitespace word-bound segments within each sentence. No dictionary is
//! consulted, so every lemma is the word's surface form.

use unicode_segmentation::UnicodeSegmentation;

use super::{MorphologicalAnalyzer, Sentence, Word};
use crate::error::Result;

/// Analyzer that segments text without lemmatizing it.
#[derive(Debug, Clone, Default)]
pub struct SegmentingAnalyzer;

impl SegmentingAnalyzer {
    pub fn new() -> Self {
        SegmentingAnalyzer
    }
}

impl MorphologicalAnalyzer for SegmentingAnalyzer {
    fn analyze(&self, text: &str, _locale: &str) -> Result<Vec<Sentence>> {
        let sentences = text
            .split_sentence_bounds()
            .map(|sentence| {
                sentence
                    .split_word_bounds()
                    .filter(|word| !word.chars().all(char::is_whitespace))
                    .map(|word| Word::new(word, word))
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .map(Sentence::new)
            .collect();

        Ok(sentences)
    }

    fn name(&self) -> &'static str {
        "segmenting"
    }
}
