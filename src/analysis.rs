//! Text analysis building blocks.
//!
//! Each stage of the normalization pipeline lives here as a small, reusable
//! component:
//!
//! - [`tokenizer`] - splitting text into tokens
//! - [`char_filter`] - character-level filtering of raw text (script filter)
//! - [`case`] - language-gated case transformation
//! - [`token_filter`] - stopword removal and stemming over token streams
//! - [`lemma`] - lemmatization strategies

pub mod case;
pub mod char_filter;
pub mod lemma;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
