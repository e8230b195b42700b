//! Lemmatizer that delegates to a morphological analyzer.

use std::fmt;
use std::sync::Arc;

use super::Lemmatizer;
use crate::error::Result;
use crate::morphology::MorphologicalAnalyzer;

/// Lemmatizes by analyzing the whole text and flattening sentences, then
/// words, in document order.
#[derive(Clone)]
pub struct MorphologyLemmatizer {
    analyzer: Arc<dyn MorphologicalAnalyzer>,
    locale: String,
}

impl MorphologyLemmatizer {
    pub fn new<S: Into<String>>(analyzer: Arc<dyn MorphologicalAnalyzer>, locale: S) -> Self {
        MorphologyLemmatizer {
            analyzer,
            locale: locale.into(),
        }
    }

    pub fn analyzer(&self) -> &Arc<dyn MorphologicalAnalyzer> {
        &self.analyzer
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl fmt::Debug for MorphologyLemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphologyLemmatizer")
            .field("analyzer", &self.analyzer.name())
            .field("locale", &self.locale)
            .finish()
    }
}

impl Lemmatizer for MorphologyLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        let sentences = self.analyzer.analyze(text, &self.locale)?;
        Ok(sentences
            .into_iter()
            .flat_map(|sentence| sentence.words)
            .map(|word| word.lemma)
            .collect())
    }

    fn name(&self) -> &'static str {
        "morphology"
    }
}
