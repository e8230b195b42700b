//! Language-gated case transformation.
//!
//! Only languages whose script has letter case get a lower/upper pair. For
//! the others the result is [`CaseVariants::Unsupported`], a regular value
//! rather than an error.
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::case::CaseVariants;
//!
//! let variants = CaseVariants::transform("Hello World");
//! assert_eq!(variants.pair(), Some(("hello world", "HELLO WORLD")));
//!
//! let unsupported = CaseVariants::unsupported("telugu");
//! assert_eq!(unsupported.to_string(), "Case change not supported for TELUGU.");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::LanguageProfile;

/// Outcome of a case transformation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CaseVariants {
    /// The text in lower and upper case.
    Transformed { lower: String, upper: String },
    /// The language has no case distinction.
    Unsupported { language: String },
}

impl CaseVariants {
    /// Lower- and upper-case `text` using full Unicode case mapping.
    pub fn transform(text: &str) -> Self {
        CaseVariants::Transformed {
            lower: text.to_lowercase(),
            upper: text.to_uppercase(),
        }
    }

    pub fn unsupported<S: Into<String>>(language: S) -> Self {
        CaseVariants::Unsupported {
            language: language.into(),
        }
    }

    /// The `(lower, upper)` pair, if the transformation was supported.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self {
            CaseVariants::Transformed { lower, upper } => Some((lower.as_str(), upper.as_str())),
            CaseVariants::Unsupported { .. } => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, CaseVariants::Transformed { .. })
    }
}

impl fmt::Display for CaseVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseVariants::Transformed { lower, upper } => write!(f, "({lower}, {upper})"),
            CaseVariants::Unsupported { language } => {
                write!(f, "Case change not supported for {}.", language.to_uppercase())
            }
        }
    }
}

/// Change the case of `text` if `profile` supports case folding.
pub fn change_case(text: &str, profile: &LanguageProfile) -> CaseVariants {
    if profile.supports_case_folding() {
        CaseVariants::transform(text)
    } else {
        CaseVariants::unsupported(profile.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageRegistry, Selector};

    #[test]
    fn test_english_case_pair() {
        let registry = LanguageRegistry::with_defaults().unwrap();
        let english = registry.resolve(&Selector::Index(1)).unwrap();

        let variants = change_case("Hello World", english);
        assert_eq!(variants.pair(), Some(("hello world", "HELLO WORLD")));
        assert!(variants.is_supported());
    }

    #[test]
    fn test_non_english_is_unsupported() {
        let registry = LanguageRegistry::with_defaults().unwrap();

        for profile in registry.profiles().iter().filter(|p| p.id() != "english") {
            let variants = change_case("Hello World", profile);
            assert_eq!(variants, CaseVariants::unsupported(profile.id()));
        }
    }

    #[test]
    fn test_full_unicode_mapping() {
        let variants = CaseVariants::transform("Straße");
        assert_eq!(variants.pair(), Some(("straße", "STRASSE")));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CaseVariants::unsupported("hindi")).unwrap();
        assert_eq!(json, r#"{"status":"unsupported","language":"hindi"}"#);

        let json = serde_json::to_string(&CaseVariants::transform("Ab")).unwrap();
        assert_eq!(json, r#"{"status":"transformed","lower":"ab","upper":"AB"}"#);
    }
}
