//! Stop filter implementation.
//!
//! Removes common function words. A token is a stopword when its lowercase
//! form is in the stopword set, so "The" and "the" are both removed by a list
//! containing "the".
//!
//! Embedded default lists are provided for every supported language. The
//! English list is the curated 179-word list used by NLTK; the Indic and Urdu
//! lists are short function-word lists used when no corpus directory is
//! configured.
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::token::Token;
//! use bhasha::analysis::token_filter::Filter;
//! use bhasha::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::english();
//! let tokens = vec![Token::new("the", 0), Token::new("quick", 1), Token::new("fox", 2)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{BhashaError, Result};

/// Default English stop words (NLTK English list).
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
    "won", "won't", "wouldn", "wouldn't",
];

/// Default Telugu stop words.
pub const DEFAULT_TELUGU_STOP_WORDS: &[&str] = &[
    "మరియు", "ఒక", "ఈ", "ఆ", "అని", "కూడా", "లో", "కు", "నుండి", "వరకు", "అది", "ఇది",
    "అతను", "ఆమె", "వారు", "మేము", "నేను", "నీవు", "కాని", "లేదా", "చాలా", "ఉంది", "ఉన్న",
    "తో", "మీద", "కోసం", "అయితే", "ఎందుకంటే", "అన్ని", "కొన్ని",
];

/// Default Hindi stop words.
pub const DEFAULT_HINDI_STOP_WORDS: &[&str] = &[
    "का", "के", "की", "है", "हैं", "और", "में", "से", "को", "पर", "यह", "वह", "था", "थे", "थी",
    "एक", "लिए", "ने", "भी", "तो", "ही", "हो", "कि", "जो", "कर", "इस", "उस", "या", "नहीं",
    "तक", "साथ", "कुछ", "किसी", "अपने", "गया", "रहा", "होता", "इसके", "उसके", "जब",
];

/// Default Tamil stop words.
pub const DEFAULT_TAMIL_STOP_WORDS: &[&str] = &[
    "மற்றும்", "ஒரு", "இந்த", "அந்த", "என்று", "இது", "அது", "அவர்", "நான்", "நீ", "அவள்",
    "அவர்கள்", "நாம்", "உள்ள", "இல்லை", "மேலும்", "ஆனால்", "அல்லது", "போன்ற", "என", "தான்",
    "வரை", "கொண்டு", "இருந்து", "பற்றி", "மிகவும்",
];

/// Default Urdu stop words.
pub const DEFAULT_URDU_STOP_WORDS: &[&str] = &[
    "اور", "کے", "کی", "کا", "میں", "سے", "کو", "ہے", "ہیں", "نے", "پر", "یہ", "وہ", "تھا",
    "تھے", "تھی", "ایک", "بھی", "کہ", "جو", "تو", "ہی", "نہیں", "لیے", "کر", "ہو", "یا", "اس",
    "ان", "گیا",
];

/// Default English stop words as a set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default English stop words.
    pub fn english() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Parse a stopword corpus: one word per line, blank lines and `#`
    /// comments ignored.
    pub fn parse(corpus: &str) -> Self {
        Self::from_words(
            corpus
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a stopword corpus file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let corpus = fs::read_to_string(path).map_err(|e| {
            BhashaError::collaborator(
                format!("stopwords:{}", path.display()),
                format!("Failed to read stopword corpus: {e}"),
            )
        })?;
        Ok(Self::parse(&corpus))
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
