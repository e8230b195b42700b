//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stopwords, compared case-insensitively
//! - [`stem::StemFilter`] - Reduces words to their stem with a pluggable [`stem::Stemmer`]
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::token::Token;
//! use bhasha::analysis::token_filter::Filter;
//! use bhasha::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![Token::new("The", 0), Token::new("cat", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "cat");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod stem;
pub mod stop;

pub use stem::{PorterStemmer, StemFilter, Stemmer, SuffixStemmer};
pub use stop::StopFilter;
