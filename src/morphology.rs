//! Morphological analysis collaborators.
//!
//! A [`MorphologicalAnalyzer`] splits a text into sentences of words, each
//! carrying its lemma. Languages without a rule-based lemmatizer delegate to
//! one of these:
//!
//! - [`SegmentingAnalyzer`] - built in, Unicode text segmentation with the
//!   surface form as lemma
//! - [`CommandAnalyzer`] - runs an external program and reads CoNLL-U from
//!   its standard output

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod command;
pub mod conllu;
pub mod segmenting;

pub use command::CommandAnalyzer;
pub use segmenting::SegmentingAnalyzer;

/// A word with its lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Surface form.
    pub text: String,
    /// Dictionary form.
    pub lemma: String,
}

impl Word {
    pub fn new<S: Into<String>, L: Into<String>>(text: S, lemma: L) -> Self {
        Word {
            text: text.into(),
            lemma: lemma.into(),
        }
    }
}

/// A sentence as a sequence of words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn new(words: Vec<Word>) -> Self {
        Sentence { words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trait for morphological analyzers.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Analyze `text` written in the language identified by `locale`.
    fn analyze(&self, text: &str, locale: &str) -> Result<Vec<Sentence>>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}
