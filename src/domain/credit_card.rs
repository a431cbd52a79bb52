//! Credit card number detection.
//!
//! Candidates are digit runs of plausible card length, optionally grouped
//! with spaces or dashes. A candidate only counts if its digits pass the
//! Luhn checksum.

use super::{luhn, Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Shortest and longest card numbers, in digits.
pub const CARD_DIGITS: std::ops::RangeInclusive<usize> = 13..=19;

/// Credit card matcher with Luhn validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardMatcher;

impl CreditCardMatcher {
    /// Creates a new credit card matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the candidate pattern: 13-19 digits with optional separators.
    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?-u:\b)(?:[0-9][ -]*?){13,19}(?-u:\b)")
                .expect("Valid credit card regex")
        });
        &PATTERN
    }

    /// Strips separators from a candidate.
    ///
    /// Returns `None` when the remaining digit count is outside
    /// [`CARD_DIGITS`].
    pub fn normalize(candidate: &str) -> Option<String> {
        let digits: String = candidate
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        CARD_DIGITS.contains(&digits.len()).then_some(digits)
    }

    /// Returns true if a candidate is a plausible, checksum-valid card number.
    pub fn validate(candidate: &str) -> bool {
        Self::normalize(candidate).is_some_and(|digits| luhn::is_valid(&digits))
    }
}

impl PatternMatcher for CreditCardMatcher {
    fn category(&self) -> Category {
        Category::CreditCard
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        Self::regex()
            .find_iter(text)
            .filter(|m| Self::validate(m.as_str()))
            .map(|m| m.range())
            .collect()
    }
}
