//! Lemmatization strategies.
//!
//! A [`Lemmatizer`] turns a whole text into an ordered sequence of lemmas.
//! It receives the text rather than pre-split tokens because some strategies
//! need sentence context:
//!
//! - [`morphy::MorphyLemmatizer`] - English, rule and exception based, one
//!   lemma per whitespace-separated token
//! - [`morphology::MorphologyLemmatizer`] - delegates to a
//!   [`MorphologicalAnalyzer`](crate::morphology::MorphologicalAnalyzer) and
//!   flattens its sentences

use crate::error::Result;

/// Trait for lemmatization strategies.
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize `text`, returning lemmas in document order.
    fn lemmatize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod morphology;
pub mod morphy;

pub use morphology::MorphologyLemmatizer;
pub use morphy::MorphyLemmatizer;
