//! English noun lemmatizer in the style of WordNet's `morphy`.
//!
//! Lemmatization of a single word proceeds as follows:
//!
//! 1. If the word is in the exception table (irregular plurals), the
//!    exception target is the candidate.
//! 2. Otherwise every detachment rule whose suffix matches yields a candidate
//!    (`boxes` → `boxe` via `s→`, `box` via `xes→x`).
//!
//! With a lexicon, the word itself and all candidates are kept only if the
//! lexicon contains them and the shortest survivor wins; a word with no
//! survivor is returned unchanged. Without a lexicon there is nothing to
//! validate against, so a conservative subset of the rules is tried in order
//! and the first that applies wins.
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::lemma::morphy::MorphyLemmatizer;
//!
//! let lemmatizer = MorphyLemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize_word("churches"), "church");
//! assert_eq!(lemmatizer.lemmatize_word("children"), "child");
//! assert_eq!(lemmatizer.lemmatize_word("glass"), "glass");
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use super::Lemmatizer;
use crate::error::{BhashaError, Result};

/// Noun detachment rules, in WordNet order.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Rules tried, first match wins, when no lexicon is available.
const GUESS_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
    ("men", "man"),
    ("s", ""),
];

/// Endings that look plural but usually are not.
const NOT_PLURAL: &[&str] = &["ss", "us", "is"];

/// Irregular noun plurals.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("calves", "calf"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("dice", "die"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("phenomena", "phenomenon"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// English lemmatizer using exception lists and suffix detachment rules.
#[derive(Debug, Clone)]
pub struct MorphyLemmatizer {
    exceptions: Arc<AHashMap<String, String>>,
    lexicon: Option<Arc<AHashSet<String>>>,
}

impl MorphyLemmatizer {
    /// Create a lemmatizer without a lexicon.
    pub fn new() -> Self {
        let exceptions = NOUN_EXCEPTIONS
            .iter()
            .map(|&(from, to)| (from.to_string(), to.to_string()))
            .collect();
        MorphyLemmatizer {
            exceptions: Arc::new(exceptions),
            lexicon: None,
        }
    }

    /// Validate candidates against the given set of known lemmas.
    pub fn with_lexicon(mut self, lexicon: AHashSet<String>) -> Self {
        self.lexicon = Some(Arc::new(lexicon));
        self
    }

    /// Parse a lexicon: the first whitespace-separated field of each line.
    ///
    /// Lines that start with whitespace or `#` are skipped, so WordNet
    /// `index.noun` files can be used directly.
    pub fn parse_lexicon(source: &str) -> AHashSet<String> {
        source
            .lines()
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with(char::is_whitespace) && !line.starts_with('#'))
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }

    /// Load a lexicon file.
    pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<AHashSet<String>> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            BhashaError::collaborator(
                format!("lexicon:{}", path.display()),
                format!("Failed to read lexicon: {e}"),
            )
        })?;
        Ok(Self::parse_lexicon(&source))
    }

    /// Whether candidates are validated against a lexicon.
    pub fn has_lexicon(&self) -> bool {
        self.lexicon.is_some()
    }

    /// Lemmatize a single word.
    pub fn lemmatize_word(&self, word: &str) -> String {
        match &self.lexicon {
            Some(lexicon) => self.lookup(word, lexicon),
            None => self.guess(word),
        }
    }

    fn lookup(&self, word: &str, lexicon: &AHashSet<String>) -> String {
        let mut candidates = vec![word.to_string()];
        match self.exceptions.get(word) {
            Some(base) => candidates.push(base.clone()),
            None => candidates.extend(NOUN_RULES.iter().filter_map(|(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|stem| format!("{stem}{replacement}"))
            })),
        }

        candidates
            .into_iter()
            .filter(|candidate| lexicon.contains(candidate))
            // Ties keep the earlier candidate.
            .reduce(|best, candidate| {
                if candidate.chars().count() < best.chars().count() {
                    candidate
                } else {
                    best
                }
            })
            .unwrap_or_else(|| word.to_string())
    }

    fn guess(&self, word: &str) -> String {
        if let Some(base) = self.exceptions.get(word) {
            return base.clone();
        }

        let plausible = word.chars().count() > 3
            && word.chars().all(|c| c.is_lowercase())
            && !NOT_PLURAL.iter().any(|ending| word.ends_with(ending));
        if !plausible {
            return word.to_string();
        }

        GUESS_RULES
            .iter()
            .find_map(|(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .map(|stem| format!("{stem}{replacement}"))
            })
            .unwrap_or_else(|| word.to_string())
    }
}

impl Default for MorphyLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split_whitespace()
            .map(|word| self.lemmatize_word(word))
            .collect())
    }

    fn name(&self) -> &'static str {
        "morphy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_regular_plurals() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize_word("cats"), "cat");
        assert_eq!(lemmatizer.lemmatize_word("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize_word("wishes"), "wish");
        assert_eq!(lemmatizer.lemmatize_word("classes"), "class");
        assert_eq!(lemmatizer.lemmatize_word("ponies"), "pony");
        assert_eq!(lemmatizer.lemmatize_word("houses"), "house");
        assert_eq!(lemmatizer.lemmatize_word("policemen"), "policeman");
    }

    #[test]
    fn test_guess_leaves_non_plurals_alone() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize_word("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize_word("corpus"), "corpus");
        assert_eq!(lemmatizer.lemmatize_word("analysis"), "analysis");
        assert_eq!(lemmatizer.lemmatize_word("bus"), "bus");
        assert_eq!(lemmatizer.lemmatize_word("Cats"), "Cats");
        assert_eq!(lemmatizer.lemmatize_word("world"), "world");
    }

    #[test]
    fn test_exceptions() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize_word("women"), "woman");
        assert_eq!(lemmatizer.lemmatize_word("knives"), "knife");
        assert_eq!(lemmatizer.lemmatize_word("geese"), "goose");
    }

    #[test]
    fn test_lexicon_picks_shortest_known_candidate() {
        let lexicon = MorphyLemmatizer::parse_lexicon("box\nboxe\nwa\nbus\n");
        let lemmatizer = MorphyLemmatizer::new().with_lexicon(lexicon);

        assert!(lemmatizer.has_lexicon());
        assert_eq!(lemmatizer.lemmatize_word("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize_word("was"), "wa");
        assert_eq!(lemmatizer.lemmatize_word("buses"), "bus");
        // Nothing known: unchanged.
        assert_eq!(lemmatizer.lemmatize_word("houses"), "houses");
    }

    #[test]
    fn test_lexicon_keeps_known_word_over_longer_candidates() {
        let lexicon = MorphyLemmatizer::parse_lexicon("news\nnew\n");
        let lemmatizer = MorphyLemmatizer::new().with_lexicon(lexicon);
        assert_eq!(lemmatizer.lemmatize_word("news"), "new");

        let lexicon = MorphyLemmatizer::parse_lexicon("glass\n");
        let lemmatizer = MorphyLemmatizer::new().with_lexicon(lexicon);
        assert_eq!(lemmatizer.lemmatize_word("glass"), "glass");
    }

    #[test]
    fn test_parse_wordnet_index() {
        let index = "  1 This software and database is being provided\n\
                     # comment\n\
                     cat n 8 4 @ ~ #p %p 8 3 02121620\n\
                     box n 10 5 @ ~ 8 1 02883344\n";
        let lexicon = MorphyLemmatizer::parse_lexicon(index);

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("box"));
    }

    #[test]
    fn test_lemmatize_text() {
        let lemmatizer = MorphyLemmatizer::new();
        let lemmas = lemmatizer.lemmatize("the cats  chased mice").unwrap();
        assert_eq!(lemmas, vec!["the", "cat", "chased", "mouse"]);
        assert!(lemmatizer.lemmatize("").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let err = MorphyLemmatizer::load_lexicon(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, BhashaError::CollaboratorUnavailable { .. }));
    }
}
