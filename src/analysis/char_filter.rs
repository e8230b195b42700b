//! Char filter implementations for text normalization.
//!
//! Char filters operate on the raw text string rather than on tokens.
//!
//! # Available Filters
//!
//! - [`script::ScriptFilter`] - removes every character outside an allow-list
//!   of script ranges (punctuation and symbol removal)

/// Trait for character filters that transform raw text.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod script;

pub use script::{ScriptFilter, ScriptRange};
