//! # Bhasha
//!
//! Multilingual text normalization for English, Telugu, Hindi, Tamil and Urdu.
//!
//! ## Features
//!
//! - Word-boundary tokenization with clitic splitting
//! - Language-gated case transformation
//! - Script-aware punctuation removal
//! - Stopword removal from embedded or on-disk corpora
//! - Porter stemming for English, ordered suffix stripping otherwise
//! - Rule-based English lemmatization and pluggable morphological analyzers
//! - Parallel batch normalization
//!
//! ## Example
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
//! let result = normalizer.run(&Selector::from("telugu"), "వాడుగా వచ్చాడు").unwrap();
//! assert_eq!(result.stems[0], "వాడు");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod morphology;
pub mod pipeline;

pub mod prelude {
    pub use crate::analysis::case::CaseVariants;
    pub use crate::config::NormalizerConfig;
    pub use crate::error::{BhashaError, Result};
    pub use crate::language::{LanguageProfile, LanguageRegistry, Selector};
    pub use crate::morphology::{MorphologicalAnalyzer, Sentence, Word};
    pub use crate::pipeline::{Normalizer, PipelineResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
