//! Built-in language table.

use super::LanguageKind;
use crate::analysis::char_filter::ScriptRange;
use crate::analysis::token_filter::stop::{
    DEFAULT_ENGLISH_STOP_WORDS, DEFAULT_HINDI_STOP_WORDS, DEFAULT_TAMIL_STOP_WORDS,
    DEFAULT_TELUGU_STOP_WORDS, DEFAULT_URDU_STOP_WORDS,
};

/// Static description of a supported language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub display_index: u32,
    pub kind: LanguageKind,
    pub script_ranges: &'static [ScriptRange],
    pub suffixes: &'static [&'static str],
    pub default_stop_words: &'static [&'static str],
}

/// Supported languages in display order.
pub static LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        id: "english",
        name: "English",
        display_index: 1,
        kind: LanguageKind::English,
        script_ranges: &[ScriptRange::new('a', 'z'), ScriptRange::new('A', 'Z')],
        suffixes: &[],
        default_stop_words: DEFAULT_ENGLISH_STOP_WORDS,
    },
    LanguageSpec {
        id: "telugu",
        name: "Telugu",
        display_index: 2,
        kind: LanguageKind::SuffixRule { locale: "te" },
        script_ranges: &[ScriptRange::new('\u{0C00}', '\u{0C7F}')],
        suffixes: &["గా", "ను", "కి", "లో", "మీద"],
        default_stop_words: DEFAULT_TELUGU_STOP_WORDS,
    },
    LanguageSpec {
        id: "hindi",
        name: "Hindi",
        display_index: 3,
        kind: LanguageKind::SuffixRule { locale: "hi" },
        script_ranges: &[ScriptRange::new('\u{0900}', '\u{097F}')],
        suffixes: &["ने", "ता", "ही", "से", "को"],
        default_stop_words: DEFAULT_HINDI_STOP_WORDS,
    },
    LanguageSpec {
        id: "tamil",
        name: "Tamil",
        display_index: 4,
        kind: LanguageKind::SuffixRule { locale: "ta" },
        script_ranges: &[ScriptRange::new('\u{0B80}', '\u{0BFF}')],
        suffixes: &["ஆன்", "இன்", "உம்", "க்கு", "ல்"],
        default_stop_words: DEFAULT_TAMIL_STOP_WORDS,
    },
    LanguageSpec {
        id: "urdu",
        name: "Urdu",
        display_index: 5,
        kind: LanguageKind::SuffixRule { locale: "ur" },
        script_ranges: &[ScriptRange::new('\u{0600}', '\u{06FF}')],
        suffixes: &["نے", "گا", "گی", "کا", "کی"],
        default_stop_words: DEFAULT_URDU_STOP_WORDS,
    },
];

/// Locale codes that may be given an external analyzer.
pub fn locales() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().filter_map(|spec| spec.kind.locale())
}
