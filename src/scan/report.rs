//! Scan results: the per-category count report and positional detections.

use crate::domain::Category;
use serde::Serialize;
use std::ops::Range;

/// One match found by the detection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub category: Category,
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
}

impl Detection {
    pub fn new(category: Category, span: Range<usize>) -> Self {
        Self {
            category,
            start: span.start,
            end: span.end,
        }
    }

    /// The byte range of this detection.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text, if `text` is the buffer this detection came from.
    pub fn text<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.span())
    }
}

/// Occurrence counts per PII category.
///
/// Every category is always present, so a report for text without any PII
/// is all zeros rather than empty. `custom_terms` is the total over all
/// custom terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CountReport {
    pub email: usize,
    pub url: usize,
    pub ipv4: usize,
    pub phone: usize,
    pub iban: usize,
    pub creditcard: usize,
    pub custom_terms: usize,
}

impl CountReport {
    /// Creates an all-zero report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report by tallying detections.
    pub fn from_detections<'a>(detections: impl IntoIterator<Item = &'a Detection>) -> Self {
        let mut report = Self::new();
        for detection in detections {
            report.add(detection.category, 1);
        }
        report
    }

    /// Count for one category.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Email => self.email,
            Category::Url => self.url,
            Category::Ipv4 => self.ipv4,
            Category::Phone => self.phone,
            Category::Iban => self.iban,
            Category::CreditCard => self.creditcard,
            Category::CustomTerms => self.custom_terms,
        }
    }

    /// Adds `n` occurrences to a category.
    pub fn add(&mut self, category: Category, n: usize) {
        let slot = match category {
            Category::Email => &mut self.email,
            Category::Url => &mut self.url,
            Category::Ipv4 => &mut self.ipv4,
            Category::Phone => &mut self.phone,
            Category::Iban => &mut self.iban,
            Category::CreditCard => &mut self.creditcard,
            Category::CustomTerms => &mut self.custom_terms,
        };
        *slot += n;
    }

    /// `(key, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c.key(), self.get(c)))
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| n).sum()
    }

    /// Returns true if anything at all was found.
    pub fn has_findings(&self) -> bool {
        self.total() > 0
    }
}
