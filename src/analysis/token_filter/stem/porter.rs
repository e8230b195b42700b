//! Porter stemming algorithm implementation.
//!
//! The five-step Porter algorithm for English:
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. Double suffixes: -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc. in words of measure > 1
//! 5. Remove final -e and reduce -ll
//!
//! with the extensions NLTK applies in its default mode:
//!
//! - a small table of irregular forms (`skies` → `sky`, `dying` → `die`, `news`)
//! - four-letter `-ies`/`-ied` words keep `ie` (`dies` → `die`)
//! - terminal y becomes i only after a consonant that is not the first letter
//!   (`play` stays `play`, `cry` → `cri`)
//! - `-alli` is reduced before the other step 2 rules, plus `-fulli` → `-ful`
//!   and a `-logi` rule that counts the `l` as part of the stem
//! - a two-letter vowel-consonant stem counts as ending cvc
//!
//! Words are lower-cased first. Words of two characters or fewer are returned
//! lower-cased but otherwise unchanged.
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::token_filter::stem::Stemmer;
//! use bhasha::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
];

/// Irregular forms and the stem they map to, matched before any step runs.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the character at `i` is a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn is_consonant(w: &[char], i: usize) -> bool {
        match w[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !Self::is_consonant(w, i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `w[..len]`.
    fn measure(w: &[char], len: usize) -> usize {
        let mut i = 0;
        let mut m = 0;

        while i < len && Self::is_consonant(w, i) {
            i += 1;
        }

        loop {
            while i < len && !Self::is_consonant(w, i) {
                i += 1;
            }
            if i >= len {
                return m;
            }
            while i < len && Self::is_consonant(w, i) {
                i += 1;
            }
            m += 1;
        }
    }

    fn has_vowel(w: &[char], len: usize) -> bool {
        (0..len).any(|i| !Self::is_consonant(w, i))
    }

    /// `w` ends with a double consonant.
    fn ends_double_consonant(w: &[char]) -> bool {
        let len = w.len();
        len >= 2 && w[len - 1] == w[len - 2] && Self::is_consonant(w, len - 1)
    }

    /// `w[..len]` ends consonant-vowel-consonant, the last not w, x or y,
    /// or is exactly vowel-consonant.
    fn ends_cvc(w: &[char], len: usize) -> bool {
        let cvc = len >= 3
            && Self::is_consonant(w, len - 1)
            && !Self::is_consonant(w, len - 2)
            && Self::is_consonant(w, len - 3)
            && !matches!(w[len - 1], 'w' | 'x' | 'y');
        cvc || (len == 2 && !Self::is_consonant(w, 0) && Self::is_consonant(w, 1))
    }

    /// Length of the stem left after removing `suffix`, if `w` ends with it.
    fn stem_len(w: &[char], suffix: &str) -> Option<usize> {
        let n = suffix.len();
        if w.len() >= n && w[w.len() - n..].iter().copied().eq(suffix.chars()) {
            Some(w.len() - n)
        } else {
            None
        }
    }

    fn replace(w: &mut Vec<char>, stem_len: usize, replacement: &str) {
        w.truncate(stem_len);
        w.extend(replacement.chars());
    }

    fn step1a(w: &mut Vec<char>) {
        if w.len() == 4
            && let Some(stem) = Self::stem_len(w, "ies")
        {
            Self::replace(w, stem, "ie");
        } else if let Some(stem) = Self::stem_len(w, "sses") {
            Self::replace(w, stem, "ss");
        } else if let Some(stem) = Self::stem_len(w, "ies") {
            Self::replace(w, stem, "i");
        } else if Self::stem_len(w, "ss").is_none() && Self::stem_len(w, "s").is_some() {
            w.pop();
        }
    }

    fn step1b(w: &mut Vec<char>) {
        if let Some(stem) = Self::stem_len(w, "ied") {
            let replacement = if w.len() == 4 { "ie" } else { "i" };
            Self::replace(w, stem, replacement);
            return;
        }

        if let Some(stem) = Self::stem_len(w, "eed") {
            if Self::measure(w, stem) > 0 {
                w.pop();
            }
            return;
        }

        let stem = Self::stem_len(w, "ed").or_else(|| Self::stem_len(w, "ing"));
        let Some(stem) = stem.filter(|&stem| Self::has_vowel(w, stem)) else {
            return;
        };
        w.truncate(stem);

        if ["at", "bl", "iz"]
            .iter()
            .any(|s| Self::stem_len(w, s).is_some())
        {
            w.push('e');
        } else if Self::ends_double_consonant(w) && !matches!(w.last(), Some('l' | 's' | 'z')) {
            w.pop();
        } else if Self::measure(w, w.len()) == 1 && Self::ends_cvc(w, w.len()) {
            w.push('e');
        }
    }

    fn step1c(w: &mut [char]) {
        let len = w.len();
        if len > 2 && w[len - 1] == 'y' && Self::is_consonant(w, len - 2) {
            w[len - 1] = 'i';
        }
    }

    fn step2(w: &mut Vec<char>) {
        if let Some(stem) = Self::stem_len(w, "alli")
            && Self::measure(w, stem) > 0
        {
            Self::replace(w, stem, "al");
            Self::step2(w);
            return;
        }

        // The `l` of -logi stays with the stem when measuring.
        if let Some(stem) = Self::stem_len(w, "logi") {
            if Self::measure(w, stem + 1) > 0 {
                Self::replace(w, stem, "log");
            }
            return;
        }

        Self::apply_rules(w, STEP2_RULES);
    }

    /// Apply the first rule whose suffix matches, if the stem has measure > 0.
    fn apply_rules(w: &mut Vec<char>, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if let Some(stem) = Self::stem_len(w, suffix) {
                if Self::measure(w, stem) > 0 {
                    Self::replace(w, stem, replacement);
                }
                return;
            }
        }
    }

    fn step4(w: &mut Vec<char>) {
        for suffix in STEP4_SUFFIXES {
            let Some(stem) = Self::stem_len(w, suffix) else {
                continue;
            };
            if *suffix == "ion" && !(stem > 0 && matches!(w[stem - 1], 's' | 't')) {
                continue;
            }
            if Self::measure(w, stem) > 1 {
                w.truncate(stem);
            }
            return;
        }
    }

    fn step5(w: &mut Vec<char>) {
        if w.last() == Some(&'e') {
            let stem = w.len() - 1;
            let m = Self::measure(w, stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(w, stem)) {
                w.pop();
            }
        }

        if w.last() == Some(&'l') && Self::ends_double_consonant(w) && Self::measure(w, w.len()) > 1
        {
            w.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some((_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return (*stem).to_string();
        }

        let lower = word.to_lowercase();
        let mut w: Vec<char> = lower.chars().collect();
        if w.len() <= 2 {
            return lower;
        }

        Self::step1a(&mut w);
        Self::step1b(&mut w);
        Self::step1c(&mut w);
        Self::step2(&mut w);
        Self::apply_rules(&mut w, STEP3_RULES);
        Self::step4(&mut w);
        Self::step5(&mut w);

        w.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        let cases = [
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("cats", "cat"),
            ("running", "run"),
            ("flies", "fli"),
            ("agreed", "agre"),
            ("hopping", "hop"),
            ("hissing", "hiss"),
            ("filing", "file"),
            ("happy", "happi"),
            ("relational", "relat"),
            ("generalization", "gener"),
            ("motoring", "motor"),
        ];
        for (word, expected) in cases {
            assert_eq!(stemmer.stem(word), expected, "stem({word})");
        }
    }

    #[test]
    fn test_nltk_extensions() {
        let stemmer = PorterStemmer::new();

        let cases = [
            ("play", "play"),
            ("day", "day"),
            ("cry", "cri"),
            ("dies", "die"),
            ("died", "die"),
            ("cried", "cri"),
            ("lying", "lie"),
            ("dying", "die"),
            ("skies", "sky"),
            ("sky", "sky"),
            ("news", "news"),
            ("proceed", "proceed"),
            ("innings", "inning"),
            ("hopefully", "hope"),
        ];
        for (word, expected) in cases {
            assert_eq!(stemmer.stem(word), expected, "stem({word})");
        }
    }

    #[test]
    fn test_lowercases_and_keeps_short_words() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("Cats"), "cat");
        assert_eq!(stemmer.stem("IS"), "is");
        assert_eq!(stemmer.stem("a"), "a");
    }

    #[test]
    fn test_non_latin_input_does_not_panic() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("పుస్తకం"), "పుస్తకం");
        assert_eq!(stemmer.stem("3.14"), "3.14");
    }

    #[test]
    fn test_porter_measure() {
        let m = |s: &str| {
            let w: Vec<char> = s.chars().collect();
            PorterStemmer::measure(&w, w.len())
        };

        assert_eq!(m("tree"), 0);
        assert_eq!(m("trees"), 1);
        assert_eq!(m("trouble"), 1);
        assert_eq!(m("troubles"), 2);
    }

    #[test]
    fn test_porter_consonant_detection() {
        let w: Vec<char> = "toy".chars().collect();
        assert!(PorterStemmer::is_consonant(&w, 0)); // t
        assert!(!PorterStemmer::is_consonant(&w, 1)); // o
        assert!(PorterStemmer::is_consonant(&w, 2)); // y after a vowel

        let w: Vec<char> = "syzygy".chars().collect();
        assert!(!PorterStemmer::is_consonant(&w, 1)); // y after a consonant
    }
}
