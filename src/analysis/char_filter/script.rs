//! Script allow-list filter.
//!
//! Removes every character that is neither whitespace nor a letter of one of
//! the configured scripts. The filter is built from the union of all supported
//! languages' ranges, so Telugu text passes through untouched even when the
//! caller selected Hindi.
//!
//! # Examples
//!
//! ```
//! use bhasha::analysis::char_filter::CharFilter;
//! use bhasha::analysis::char_filter::script::{ScriptFilter, ScriptRange};
//!
//! let filter = ScriptFilter::new(&[ScriptRange::new('a', 'z'), ScriptRange::new('A', 'Z')]).unwrap();
//! assert_eq!(filter.filter("Hello, world! 42"), "Hello world ");
//! ```

use std::fmt::Write;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::CharFilter;
use crate::error::{BhashaError, Result};

/// An inclusive range of Unicode scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptRange {
    pub start: char,
    pub end: char,
}

impl ScriptRange {
    /// Create a new inclusive range.
    pub const fn new(start: char, end: char) -> Self {
        ScriptRange { start, end }
    }

    /// Check whether a character falls inside this range.
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

/// A char filter that keeps only whitespace and letters of the allowed scripts.
#[derive(Clone, Debug)]
pub struct ScriptFilter {
    ranges: Vec<ScriptRange>,
    /// Matches any run of disallowed characters.
    disallowed: Regex,
}

impl ScriptFilter {
    /// Build a filter allowing the union of the given ranges.
    pub fn new(ranges: &[ScriptRange]) -> Result<Self> {
        let mut ranges = ranges.to_vec();
        ranges.sort_by_key(|r| (r.start, r.end));
        ranges.dedup();

        if let Some(bad) = ranges.iter().find(|r| r.start > r.end) {
            return Err(BhashaError::analysis(format!(
                "Invalid script range U+{:04X}..U+{:04X}",
                bad.start as u32, bad.end as u32
            )));
        }

        let mut class = String::from("[^");
        for range in &ranges {
            // Infallible: writing into a String.
            let _ = write!(
                class,
                "\\x{{{:04X}}}-\\x{{{:04X}}}",
                range.start as u32, range.end as u32
            );
        }
        class.push_str("\\s]+");

        let disallowed = Regex::new(&class)
            .map_err(|e| BhashaError::analysis(format!("Invalid script pattern: {e}")))?;

        Ok(ScriptFilter { ranges, disallowed })
    }

    /// The allowed ranges, sorted and deduplicated.
    pub fn ranges(&self) -> &[ScriptRange] {
        &self.ranges
    }

    /// Check whether a single character survives the filter.
    pub fn allows(&self, c: char) -> bool {
        c.is_whitespace() || self.ranges.iter().any(|r| r.contains(c))
    }
}

impl CharFilter for ScriptFilter {
    fn filter(&self, input: &str) -> String {
        self.disallowed.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "script"
    }
}
