//! Custom term matching.
//!
//! Terms are user-supplied literals such as names or project codes. They are
//! matched as whole words: `"art"` matches in `"art is fun"` but not in
//! `"smart"`. Only ASCII letters, digits and `_` count as word characters.

use super::boundary::{find_guarded, is_word_char};
use super::{Category, PatternMatcher};
use crate::error::{ScanError, ScanResult};
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Case handling for custom terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermCase {
    /// Exact case only. The built-in detectors ignore case; terms do not.
    #[default]
    Sensitive,
    /// Case-insensitive, like the built-in email and URL detectors.
    Insensitive,
}

/// Whole-word matcher for one literal term.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    regex: Regex,
}

impl TermMatcher {
    /// Builds a matcher for `term`.
    ///
    /// The term is trimmed first. Returns `Ok(None)` for an empty or
    /// whitespace-only term, which matches nothing.
    pub fn new(term: &str, case: TermCase) -> ScanResult<Option<Self>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(None);
        }

        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(case == TermCase::Insensitive)
            .build()
            .map_err(|e| ScanError::PatternError {
                pattern: term.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(Self {
            term: term.to_string(),
            regex,
        }))
    }

    /// The trimmed term this matcher looks for.
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl PatternMatcher for TermMatcher {
    fn category(&self) -> Category {
        Category::CustomTerms
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        find_guarded(&self.regex, text, is_word_char)
    }
}
