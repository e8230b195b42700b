//! Resource configuration.
//!
//! A [`NormalizerConfig`] names the external resources the registry loads at
//! startup. Every field is optional; an empty configuration selects the
//! embedded stopword lists, the lexicon-free English lemmatizer and the
//! built-in segmenting analyzer for every locale.
//!
//! ```json
//! {
//!   "stopwords_dir": "resources/stopwords",
//!   "lexicon_path": "resources/english_lemmas.txt",
//!   "analyzers": {
//!     "hi": { "program": "scripts/stanza-conllu", "args": ["--lang", "{locale}"] }
//!   }
//! }
//! ```
//!
//! Relative paths in a configuration file are resolved against the file's
//! directory. A program given as a bare name (`python3`) is left for `PATH`
//! lookup.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BhashaError, Result};
use crate::language::data;

/// External program used as a morphological analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Resources to load when building the language registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Directory holding `<language id>.txt` stopword corpora.
    pub stopwords_dir: Option<PathBuf>,
    /// English lemma lexicon, one lemma per line.
    pub lexicon_path: Option<PathBuf>,
    /// External analyzers keyed by locale code.
    pub analyzers: BTreeMap<String, AnalyzerConfig>,
}

impl NormalizerConfig {
    /// Parse a configuration from JSON. Paths are kept as written.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NormalizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file, resolving relative paths against its
    /// directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            BhashaError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&json)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }

    /// Check that every analyzer is keyed by a supported locale and names a
    /// program.
    pub fn validate(&self) -> Result<()> {
        for (locale, analyzer) in &self.analyzers {
            if !data::locales().any(|known| known == locale.as_str()) {
                let known: Vec<_> = data::locales().collect();
                return Err(BhashaError::config(format!(
                    "Unknown analyzer locale '{locale}' (expected one of: {})",
                    known.join(", ")
                )));
            }
            if analyzer.program.as_os_str().is_empty() {
                return Err(BhashaError::config(format!(
                    "Analyzer for '{locale}' has an empty program"
                )));
            }
        }
        Ok(())
    }

    fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };

        self.stopwords_dir = self.stopwords_dir.map(resolve);
        self.lexicon_path = self.lexicon_path.map(resolve);
        for analyzer in self.analyzers.values_mut() {
            if analyzer.program.components().count() > 1 {
                analyzer.program = resolve(std::mem::take(&mut analyzer.program));
            }
        }
        self
    }
}
