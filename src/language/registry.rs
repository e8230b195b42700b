//! Language registry and resource loading.
//!
//! The registry is built once at startup. Building it loads every configured
//! resource (stopword corpora, the English lexicon, external analyzers) and
//! fails fast, naming the resource, if any of them is unavailable. After
//! that it is immutable and meant to be shared through an `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info, warn};

use super::data::{LANGUAGES, LanguageSpec};
use super::{LanguageKind, LanguageProfile, Selector};
use crate::analysis::char_filter::{ScriptFilter, ScriptRange};
use crate::analysis::lemma::{Lemmatizer, MorphologyLemmatizer, MorphyLemmatizer};
use crate::analysis::token_filter::{StemFilter, StopFilter, SuffixStemmer};
use crate::config::NormalizerConfig;
use crate::error::{BhashaError, Result};
use crate::morphology::{CommandAnalyzer, MorphologicalAnalyzer, SegmentingAnalyzer};

/// Immutable set of language profiles.
#[derive(Debug)]
pub struct LanguageRegistry {
    profiles: Vec<Arc<LanguageProfile>>,
    by_index: AHashMap<u32, usize>,
    by_id: AHashMap<&'static str, usize>,
    script_filter: ScriptFilter,
}

impl LanguageRegistry {
    /// Build a registry from a configuration.
    pub fn load(config: &NormalizerConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::builder();
        if let Some(dir) = &config.stopwords_dir {
            builder = builder.stopwords_dir(dir.clone());
        }
        if let Some(path) = &config.lexicon_path {
            builder = builder.lexicon_path(path.clone());
        }
        for (locale, analyzer) in &config.analyzers {
            let command = CommandAnalyzer::new(analyzer.program.clone())
                .with_args(analyzer.args.iter().cloned());
            builder = builder.analyzer(locale.clone(), Arc::new(command));
        }

        builder.build()
    }

    /// Build a registry using only embedded resources.
    pub fn with_defaults() -> Result<Self> {
        Self::load(&NormalizerConfig::default())
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the profile a selector names.
    pub fn resolve(&self, selector: &Selector) -> Result<&Arc<LanguageProfile>> {
        let slot = match selector {
            Selector::Index(index) => self.by_index.get(index),
            Selector::Name(name) => self.by_id.get(name.as_str()),
        };

        slot.map(|&i| &self.profiles[i])
            .ok_or_else(|| BhashaError::unknown_language(selector.to_string()))
    }

    /// All profiles in display order.
    pub fn profiles(&self) -> &[Arc<LanguageProfile>] {
        &self.profiles
    }

    /// Filter allowing the letters of every supported script.
    pub fn script_filter(&self) -> &ScriptFilter {
        &self.script_filter
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Assembles a [`LanguageRegistry`] from individual resources.
///
/// Analyzers can be supplied directly, which is how library users plug in an
/// in-process morphological analyzer.
pub struct RegistryBuilder {
    stopwords_dir: Option<PathBuf>,
    lexicon_path: Option<PathBuf>,
    analyzers: AHashMap<String, Arc<dyn MorphologicalAnalyzer>>,
    default_analyzer: Arc<dyn MorphologicalAnalyzer>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        RegistryBuilder {
            stopwords_dir: None,
            lexicon_path: None,
            analyzers: AHashMap::new(),
            default_analyzer: Arc::new(SegmentingAnalyzer::new()),
        }
    }
}

impl RegistryBuilder {
    /// Load non-English stopword corpora from `<dir>/<id>.txt`.
    pub fn stopwords_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.stopwords_dir = Some(dir.into());
        self
    }

    /// Validate English lemmas against the lexicon at `path`.
    pub fn lexicon_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Use `analyzer` for the language with locale code `locale`.
    pub fn analyzer<S: Into<String>>(
        mut self,
        locale: S,
        analyzer: Arc<dyn MorphologicalAnalyzer>,
    ) -> Self {
        self.analyzers.insert(locale.into(), analyzer);
        self
    }

    /// Use `analyzer` for every locale without a dedicated one.
    pub fn default_analyzer(mut self, analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        self.default_analyzer = analyzer;
        self
    }

    pub fn build(self) -> Result<LanguageRegistry> {
        if let Some(locale) = self
            .analyzers
            .keys()
            .find(|locale| !LANGUAGES.iter().any(|l| l.kind.locale() == Some(locale.as_str())))
        {
            return Err(BhashaError::config(format!(
                "No supported language has locale '{locale}'"
            )));
        }
        if self.stopwords_dir.is_none() {
            warn!("No stopword directory configured, using embedded stopword lists");
        }

        let english_lemmatizer: Arc<dyn Lemmatizer> = match &self.lexicon_path {
            Some(path) => {
                let lexicon = MorphyLemmatizer::load_lexicon(path)?;
                info!(
                    "Loaded English lexicon with {} lemmas from {}",
                    lexicon.len(),
                    path.display()
                );
                Arc::new(MorphyLemmatizer::new().with_lexicon(lexicon))
            }
            None => Arc::new(MorphyLemmatizer::new()),
        };

        let mut profiles = Vec::with_capacity(LANGUAGES.len());
        for spec in LANGUAGES {
            let profile = match spec.kind {
                LanguageKind::English => self.english_profile(spec, Arc::clone(&english_lemmatizer)),
                LanguageKind::SuffixRule { locale } => self.suffix_rule_profile(spec, locale)?,
            };
            debug!("Built profile {:?}", profile);
            profiles.push(Arc::new(profile));
        }
        profiles.sort_by_key(|p| p.display_index());

        let ranges: Vec<ScriptRange> = profiles
            .iter()
            .flat_map(|p| p.script_ranges().iter().copied())
            .collect();
        let script_filter = ScriptFilter::new(&ranges)?;

        let by_index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.display_index(), i))
            .collect();
        let by_id = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id(), i))
            .collect();

        info!("Loaded {} language profiles", profiles.len());

        Ok(LanguageRegistry {
            profiles,
            by_index,
            by_id,
            script_filter,
        })
    }

    fn english_profile(
        &self,
        spec: &LanguageSpec,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> LanguageProfile {
        LanguageProfile::new(
            spec.id,
            spec.name,
            spec.display_index,
            spec.kind,
            spec.script_ranges,
            Vec::new(),
            StopFilter::english(),
            StemFilter::porter(),
            lemmatizer,
        )
    }

    fn suffix_rule_profile(&self, spec: &LanguageSpec, locale: &str) -> Result<LanguageProfile> {
        let stop_filter = match &self.stopwords_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.txt", spec.id));
                let filter = StopFilter::load(&path)?;
                debug!(
                    "Loaded {} {} stopwords from {}",
                    filter.len(),
                    spec.id,
                    path.display()
                );
                filter
            }
            None => StopFilter::from_words(spec.default_stop_words.iter().copied()),
        };

        let suffix_list: Vec<String> = spec.suffixes.iter().map(|s| s.to_string()).collect();
        let stemmer = SuffixStemmer::new(suffix_list.iter().cloned());

        let analyzer = self
            .analyzers
            .get(locale)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default_analyzer));
        debug!("Using {} analyzer for {}", analyzer.name(), locale);

        Ok(LanguageProfile::new(
            spec.id,
            spec.name,
            spec.display_index,
            spec.kind,
            spec.script_ranges,
            suffix_list,
            stop_filter,
            StemFilter::with_stemmer(Arc::new(stemmer)),
            Arc::new(MorphologyLemmatizer::new(analyzer, locale)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_resolve_round_trips_display_index() {
        let registry = LanguageRegistry::with_defaults().unwrap();
        assert_eq!(registry.len(), 5);

        for profile in registry.profiles() {
            let by_index = registry.resolve(&Selector::Index(profile.display_index())).unwrap();
            let by_id = registry.resolve(&Selector::from(profile.id())).unwrap();
            assert_eq!(by_index.id(), profile.id());
            assert_eq!(by_id.display_index(), profile.display_index());
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = LanguageRegistry::with_defaults().unwrap();

        for selector in ["0", "6", "french", "", "tel"] {
            let err = registry.resolve(&Selector::from(selector)).unwrap_err();
            assert!(err.is_unknown_language(), "{selector}");
        }
    }

    #[test]
    fn test_profiles_in_display_order() {
        let registry = LanguageRegistry::with_defaults().unwrap();
        let ids: Vec<&str> = registry.profiles().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["english", "telugu", "hindi", "tamil", "urdu"]);
    }

    #[test]
    fn test_capabilities() {
        let registry = LanguageRegistry::with_defaults().unwrap();

        let english = registry.resolve(&Selector::Index(1)).unwrap();
        assert!(english.supports_case_folding());
        assert!(english.suffix_list().is_empty());
        assert_eq!(english.stem_filter().stemmer().name(), "porter");
        assert_eq!(english.lemmatizer().name(), "morphy");
        assert_eq!(english.locale_code(), None);

        let urdu = registry.resolve(&Selector::Index(5)).unwrap();
        assert!(!urdu.supports_case_folding());
        assert_eq!(urdu.suffix_list(), &["نے", "گا", "گی", "کا", "کی"]);
        assert_eq!(urdu.stem_filter().stemmer().name(), "suffix");
        assert_eq!(urdu.lemmatizer().name(), "morphology");
        assert_eq!(urdu.locale_code(), Some("ur"));
    }

    #[test]
    fn test_script_filter_covers_all_scripts() {
        let registry = LanguageRegistry::with_defaults().unwrap();
        let filter = registry.script_filter();

        // The danda sits inside the Devanagari block.
        for c in ['a', 'Z', 'వ', 'घ', '।', 'த', 'ک', ' '] {
            assert!(filter.allows(c), "{c}");
        }
        for c in ['!', '1', '€', 'é'] {
            assert!(!filter.allows(c), "{c}");
        }
    }

    #[test]
    fn test_stopwords_dir() {
        let dir = tempfile::tempdir().unwrap();
        for id in ["telugu", "hindi", "tamil", "urdu"] {
            fs::write(dir.path().join(format!("{id}.txt")), "# corpus\none\ntwo\n").unwrap();
        }

        let registry = LanguageRegistry::builder()
            .stopwords_dir(dir.path())
            .build()
            .unwrap();
        let hindi = registry.resolve(&Selector::Index(3)).unwrap();
        assert_eq!(hindi.stop_filter().len(), 2);
        assert!(hindi.stop_filter().is_stop_word("one"));

        // English keeps the curated list.
        let english = registry.resolve(&Selector::Index(1)).unwrap();
        assert!(english.stop_filter().is_stop_word("the"));
    }

    #[test]
    fn test_missing_stopword_corpus_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("telugu.txt"), "ఒక\n").unwrap();

        let err = LanguageRegistry::builder()
            .stopwords_dir(dir.path())
            .build()
            .unwrap_err();
        match err {
            BhashaError::CollaboratorUnavailable { collaborator, .. } => {
                assert!(collaborator.contains("hindi.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_lexicon_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let err = LanguageRegistry::builder()
            .lexicon_path(dir.path().join("lemmas.txt"))
            .build()
            .unwrap_err();
        assert!(matches!(err, BhashaError::CollaboratorUnavailable { .. }));
    }

    #[test]
    fn test_load_from_config() {
        let config = NormalizerConfig::from_json(
            r#"{"analyzers": {"ta": {"program": "tamil-analyzer", "args": ["{locale}"]}}}"#,
        )
        .unwrap();
        let registry = LanguageRegistry::load(&config).unwrap();

        let tamil = registry.resolve(&Selector::from("tamil")).unwrap();
        assert_eq!(tamil.lemmatizer().name(), "morphology");
    }

    #[test]
    fn test_builder_rejects_unknown_locale() {
        let err = LanguageRegistry::builder()
            .analyzer("fr", Arc::new(SegmentingAnalyzer::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, BhashaError::Config(_)));
    }
}
