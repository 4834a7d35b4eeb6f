//! Case-insensitive substring matching of stack names
//!
//! Patterns are plain text: `*`, `?` and regex metacharacters match themselves.

use std::fmt;

/// A caller-supplied name fragment, lowercased once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    raw: String,
    needle: String,
}

impl SearchPattern {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The pattern as the caller typed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if `name` contains the pattern, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

impl From<&str> for SearchPattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SearchPattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// True if `lowercase(stack_name)` contains `lowercase(pattern)`
pub fn matches_pattern(stack_name: &str, pattern: &str) -> bool {
    SearchPattern::new(pattern).matches(stack_name)
}
