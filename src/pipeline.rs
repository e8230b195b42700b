//! Normalization pipeline.
//!
//! [`Normalizer::run`] resolves the language first and fails with
//! [`BhashaError::UnknownLanguage`] before any stage runs. Every stage then
//! works on the original text, independently of the others:
//!
//! | stage | operates on |
//! |-------|-------------|
//! | tokens | word-boundary tokenizer output |
//! | case variants | whole text |
//! | punctuation filtered | whole text, all supported scripts |
//! | stopwords filtered | whitespace-split tokens, rejoined with spaces |
//! | stems | whitespace-split tokens |
//! | lemmas | whole text (English per token, others per analyzed word) |
//!
//! A failing stage fails the whole run; there are no partial results.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use bhasha::language::{LanguageRegistry, Selector};
//! use bhasha::pipeline::Normalizer;
//!
//! let registry = Arc::new(LanguageRegistry::with_defaults().unwrap());
//! let normalizer = Normalizer::new(registry);
//!
//! let result = normalizer.run(&Selector::Index(1), "The cats sat.").unwrap();
//! assert_eq!(result.tokens, vec!["The", "cats", "sat", "."]);
//! assert_eq!(result.stopwords_filtered, "cats sat.");
//! assert_eq!(result.punctuation_filtered, "The cats sat");
//! ```

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::case::{CaseVariants, change_case};
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::texts;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
use crate::error::{BhashaError, Result};
use crate::language::{LanguageProfile, LanguageRegistry, Selector};

/// Everything the pipeline produces for one text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    /// Id of the resolved language.
    pub language: String,
    pub tokens: Vec<String>,
    pub case_variants: CaseVariants,
    pub punctuation_filtered: String,
    pub stopwords_filtered: String,
    pub stems: Vec<String>,
    pub lemmas: Vec<String>,
}

/// Runs the normalization stages over a shared language registry.
#[derive(Clone)]
pub struct Normalizer {
    registry: Arc<LanguageRegistry>,
    tokenizer: Arc<dyn Tokenizer>,
    splitter: WhitespaceTokenizer,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("languages", &self.registry.len())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer with the word-boundary tokenizer.
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Normalizer {
            registry,
            tokenizer: Arc::new(WordTokenizer::new()),
            splitter: WhitespaceTokenizer::new(),
        }
    }

    /// Replace the general-purpose tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    /// Normalize `text` in the language named by `selector`.
    pub fn run(&self, selector: &Selector, text: &str) -> Result<PipelineResult> {
        let profile = self.registry.resolve(selector)?;
        self.run_profile(profile, text)
    }

    /// Normalize every text in the language named by `selector`, in parallel.
    ///
    /// Results are in input order. The first failure fails the batch.
    pub fn run_batch<S: AsRef<str> + Sync>(
        &self,
        selector: &Selector,
        texts: &[S],
    ) -> Result<Vec<PipelineResult>> {
        let profile = self.registry.resolve(selector)?;
        debug!("Normalizing batch of {} texts as {}", texts.len(), profile.id());

        texts
            .par_iter()
            .map(|text| self.run_profile(profile, text.as_ref()))
            .collect()
    }

    /// Run every stage for an already resolved profile.
    pub fn run_profile(&self, profile: &LanguageProfile, text: &str) -> Result<PipelineResult> {
        debug!("Normalizing {} bytes as {}", text.len(), profile.id());

        Ok(PipelineResult {
            language: profile.id().to_string(),
            tokens: self.tokenize(text)?,
            case_variants: change_case(text, profile),
            punctuation_filtered: self.filter_punctuation(text),
            stopwords_filtered: self.remove_stopwords(text, profile)?,
            stems: self.stem(text, profile)?,
            lemmas: self.lemmatize(text, profile)?,
        })
    }

    /// Split `text` into word and punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(texts(self.tokenizer.tokenize(text)?))
    }

    /// Remove every character outside the supported scripts, keeping
    /// whitespace.
    pub fn filter_punctuation(&self, text: &str) -> String {
        self.registry.script_filter().filter(text)
    }

    /// Drop the profile's stopwords and rejoin the rest with single spaces.
    pub fn remove_stopwords(&self, text: &str, profile: &LanguageProfile) -> Result<String> {
        let tokens = profile.stop_filter().filter(self.splitter.tokenize(text)?)?;
        Ok(texts(tokens).join(" "))
    }

    /// Stem every whitespace-separated token.
    pub fn stem(&self, text: &str, profile: &LanguageProfile) -> Result<Vec<String>> {
        let tokens = profile.stem_filter().filter(self.splitter.tokenize(text)?)?;
        Ok(texts(tokens))
    }

    /// Lemmatize `text` with the profile's lemmatizer.
    pub fn lemmatize(&self, text: &str, profile: &LanguageProfile) -> Result<Vec<String>> {
        profile.lemmatizer().lemmatize(text).map_err(|e| match e {
            BhashaError::CollaboratorUnavailable { .. } => e,
            other => BhashaError::collaborator(
                format!("lemmatizer:{}", profile.lemmatizer().name()),
                other.to_string(),
            ),
        })
    }
}
