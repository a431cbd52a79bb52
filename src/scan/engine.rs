//! The detection engine: every matcher, one pass over one text buffer.

use super::report::{CountReport, Detection};
use super::ScanConfig;
use crate::domain::{builtin_matchers, PatternMatcher, TermMatcher};
use crate::error::ScanResult;

/// Runs the built-in detectors and the custom-term matchers over text.
///
/// An engine holds no per-scan state. Build it once for a set of custom
/// terms and reuse it for any number of buffers, from any number of
/// threads.
pub struct DetectionEngine {
    builtins: Vec<Box<dyn PatternMatcher>>,
    terms: Vec<TermMatcher>,
}

impl DetectionEngine {
    /// Creates an engine for the given custom terms.
    ///
    /// Blank terms are dropped. Compiling the term matchers is the only
    /// fallible step; scanning itself never fails.
    pub fn new<S: AsRef<str>>(terms: &[S], config: &ScanConfig) -> ScanResult<Self> {
        let mut matchers = Vec::with_capacity(terms.len());
        for term in terms {
            if let Some(matcher) = TermMatcher::new(term.as_ref(), config.term_case)? {
                matchers.push(matcher);
            }
        }

        Ok(Self {
            builtins: builtin_matchers(),
            terms: matchers,
        })
    }

    /// An engine with no custom terms.
    pub fn builtin_only() -> Self {
        Self {
            builtins: builtin_matchers(),
            terms: Vec::new(),
        }
    }

    /// The built-in detectors, in report order.
    pub fn builtins(&self) -> &[Box<dyn PatternMatcher>] {
        &self.builtins
    }

    /// The compiled custom-term matchers.
    pub fn terms(&self) -> &[TermMatcher] {
        &self.terms
    }

    /// Counts PII occurrences per category.
    pub fn scan(&self, text: &str) -> CountReport {
        let mut report = CountReport::new();
        for matcher in self.matchers() {
            report.add(matcher.category(), matcher.count(text));
        }
        report
    }

    /// Finds every match with its byte span.
    ///
    /// Detections are ordered by start offset, then by category. Spans of
    /// different categories may overlap; each detector reports on its own.
    pub fn detect(&self, text: &str) -> Vec<Detection> {
        let mut detections: Vec<Detection> = self
            .matchers()
            .flat_map(|matcher| {
                let category = matcher.category();
                matcher
                    .find_spans(text)
                    .into_iter()
                    .map(move |span| Detection::new(category, span))
            })
            .collect();

        detections.sort_by_key(|d| (d.start, d.category, d.end));
        detections
    }

    fn matchers(&self) -> impl Iterator<Item = &(dyn PatternMatcher + 'static)> + '_ {
        let terms = self
            .terms
            .iter()
            .map(|t| t as &(dyn PatternMatcher + 'static));
        self.builtins.iter().map(|m| m.as_ref()).chain(terms)
    }
}

/// Scans `text` for PII and custom terms with the default configuration.
pub fn scan<S: AsRef<str>>(text: &str, custom_terms: &[S]) -> ScanResult<CountReport> {
    let engine = DetectionEngine::new(custom_terms, &ScanConfig::default())?;
    Ok(engine.scan(text))
}
