//! Supported languages and their processing capabilities.
//!
//! Each language is described by a [`LanguageProfile`], built once by the
//! [`LanguageRegistry`] and shared read-only afterwards. A profile is either
//! [`LanguageKind::English`] (case folding, Porter stemming, morphy
//! lemmatization) or [`LanguageKind::SuffixRule`] (suffix stripping and a
//! morphological analyzer for its locale). The stopword set, stemmer and
//! lemmatizer are selected when the profile is built, so the pipeline never
//! branches on the language.
//!
//! # Examples
//!
//! ```
//! use bhasha::language::{LanguageRegistry, Selector};
//!
//! let registry = LanguageRegistry::with_defaults().unwrap();
//! let telugu = registry.resolve(&"Telugu".parse::<Selector>().unwrap()).unwrap();
//!
//! assert_eq!(telugu.display_index(), 2);
//! assert_eq!(telugu.locale_code(), Some("te"));
//! assert!(!telugu.supports_case_folding());
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::analysis::char_filter::ScriptRange;
use crate::analysis::lemma::Lemmatizer;
use crate::analysis::token_filter::{StemFilter, StopFilter};

pub mod data;
pub mod registry;

pub use registry::{LanguageRegistry, RegistryBuilder};

/// The closed set of language processing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum LanguageKind {
    /// Case folding, Porter stemming and rule-based lemmatization.
    English,
    /// Suffix-list stemming and analyzer-backed lemmatization for `locale`.
    SuffixRule { locale: &'static str },
}

impl LanguageKind {
    /// The locale code used to request external resources.
    pub fn locale(&self) -> Option<&'static str> {
        match *self {
            LanguageKind::English => None,
            LanguageKind::SuffixRule { locale } => Some(locale),
        }
    }
}

/// A supported language with the capabilities selected for it.
#[derive(Clone)]
pub struct LanguageProfile {
    id: &'static str,
    name: &'static str,
    display_index: u32,
    kind: LanguageKind,
    script_ranges: &'static [ScriptRange],
    suffix_list: Vec<String>,
    stop_filter: StopFilter,
    stem_filter: StemFilter,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl LanguageProfile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: &'static str,
        name: &'static str,
        display_index: u32,
        kind: LanguageKind,
        script_ranges: &'static [ScriptRange],
        suffix_list: Vec<String>,
        stop_filter: StopFilter,
        stem_filter: StemFilter,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> Self {
        LanguageProfile {
            id,
            name,
            display_index,
            kind,
            script_ranges,
            suffix_list,
            stop_filter,
            stem_filter,
            lemmatizer,
        }
    }

    /// Stable lowercase key, e.g. `telugu`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable name, e.g. `Telugu`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Numeric selector, 1 to 5.
    pub fn display_index(&self) -> u32 {
        self.display_index
    }

    pub fn kind(&self) -> LanguageKind {
        self.kind
    }

    pub fn locale_code(&self) -> Option<&'static str> {
        self.kind.locale()
    }

    /// Code points counted as letters of this language's script.
    pub fn script_ranges(&self) -> &'static [ScriptRange] {
        self.script_ranges
    }

    /// Inflectional suffixes in stripping order. Empty for English.
    pub fn suffix_list(&self) -> &[String] {
        &self.suffix_list
    }

    pub fn supports_case_folding(&self) -> bool {
        matches!(self.kind, LanguageKind::English)
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    pub fn stem_filter(&self) -> &StemFilter {
        &self.stem_filter
    }

    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("id", &self.id)
            .field("display_index", &self.display_index)
            .field("kind", &self.kind)
            .field("suffix_list", &self.suffix_list)
            .field("stop_words", &self.stop_filter.len())
            .field("stemmer", &self.stem_filter.stemmer().name())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

/// How a caller names a language: by display index or by id.
///
/// Parsing never fails; an unrecognised selector is reported when it is
/// resolved against a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Index(u32),
    Name(String),
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<u32>() {
            Ok(index) => Selector::Index(index),
            Err(_) => Selector::Name(trimmed.to_lowercase()),
        })
    }
}

impl From<u32> for Selector {
    fn from(index: u32) -> Self {
        Selector::Index(index)
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(selector) => selector,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(index) => write!(f, "{index}"),
            Selector::Name(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!(Selector::from("2"), Selector::Index(2));
        assert_eq!(Selector::from(" 5 "), Selector::Index(5));
        assert_eq!(Selector::from("Telugu"), Selector::Name("telugu".into()));
        assert_eq!(Selector::from(" HINDI "), Selector::Name("hindi".into()));
        assert_eq!(Selector::from("-1"), Selector::Name("-1".into()));
        assert_eq!(Selector::from(""), Selector::Name(String::new()));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::Index(3).to_string(), "3");
        assert_eq!(Selector::from("Urdu").to_string(), "urdu");
    }

    #[test]
    fn test_kind_locale() {
        assert_eq!(LanguageKind::English.locale(), None);
        assert_eq!(LanguageKind::SuffixRule { locale: "ta" }.locale(), Some("ta"));
    }
}
