//! Domain models and business logic for PII detection.
//!
//! This module contains the recognizers the detection engine is built from:
//! the built-in pattern library, the custom-term matcher, and the
//! Luhn-validated credit card extractor.

pub mod boundary;
pub mod credit_card;
pub mod luhn;
pub mod patterns;
pub mod term;

pub use credit_card::CreditCardMatcher;
pub use patterns::{EmailMatcher, IbanMatcher, Ipv4Matcher, PhoneMatcher, UrlMatcher};
pub use term::{TermCase, TermMatcher};

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A PII category reported by the detection engine.
///
/// The declaration order is the order categories appear in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Url,
    Ipv4,
    Phone,
    Iban,
    #[serde(rename = "creditcard")]
    CreditCard,
    CustomTerms,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 7] = [
        Category::Email,
        Category::Url,
        Category::Ipv4,
        Category::Phone,
        Category::Iban,
        Category::CreditCard,
        Category::CustomTerms,
    ];

    /// Stable key used in count reports and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Ipv4 => "ipv4",
            Self::Phone => "phone",
            Self::Iban => "iban",
            Self::CreditCard => "creditcard",
            Self::CustomTerms => "custom_terms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A recognizer that finds one category of PII in a text buffer.
///
/// Implementations are stateless: every call scans the whole buffer from
/// offset zero, so repeated calls are independent of each other.
pub trait PatternMatcher: Send + Sync {
    /// The category this matcher reports under.
    fn category(&self) -> Category;

    /// Byte ranges of all non-overlapping matches, in text order.
    fn find_spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Matched substrings, in text order.
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.find_spans(text)
            .into_iter()
            .map(|span| &text[span])
            .collect()
    }

    /// Number of non-overlapping matches.
    fn count(&self, text: &str) -> usize {
        self.find_spans(text).len()
    }
}

/// The built-in recognizers, in report order.
pub fn builtin_matchers() -> Vec<Box<dyn PatternMatcher>> {
    vec![
        Box::new(EmailMatcher::new()),
        Box::new(UrlMatcher::new()),
        Box::new(Ipv4Matcher::new()),
        Box::new(PhoneMatcher::new()),
        Box::new(IbanMatcher::new()),
        Box::new(CreditCardMatcher::new()),
    ]
}
