//! Built-in PII pattern library.
//!
//! Every pattern is compiled once per process and shared read-only, so the
//! matchers here are zero-sized and free to construct.

use super::boundary::{find_guarded, is_digit};
use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// The compiled recognition patterns, keyed by category.
pub struct PatternLibrary;

impl PatternLibrary {
    /// `local@domain.tld`, TLD of two or more letters. Case-insensitive.
    ///
    /// Classes and word boundaries are ASCII: `müller@example.com` yields
    /// `ller@example.com`, and the Kelvin sign does not fold to `k`.
    pub fn email() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i-u)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b")
                .expect("Valid email regex")
        });
        &PATTERN
    }

    /// `http://`, `https://` or `www.` up to whitespace or `)`. Case-insensitive.
    pub fn url() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i-u:\b(?:https?://|www\.))[^\s)]+").expect("Valid URL regex")
        });
        &PATTERN
    }

    /// Dotted quad with every octet in 0-255.
    pub fn ipv4() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"(?-u)\b(?:(?:25[0-5]|2[0-4][0-9]|1?[0-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1?[0-9]?[0-9])\b",
            )
            .expect("Valid IPv4 regex")
        });
        &PATTERN
    }

    /// Dutch mobile numbers: `+31`/`0031`/`0` prefix, then `6` and 8 digits.
    ///
    /// The "no adjacent digit" rule is enforced by [`PhoneMatcher`], not by
    /// the regex.
    pub fn phone() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"(?x)
                (?:
                    (?:\(\s*)?(?:\+31|0031)(?:\s*\))?  # country code, maybe in parens
                    \s*(?:\(0\)\s*)?6                  # optional (0), mobile prefix
                  |
                    0\s*6                              # national prefix
                )
                (?:[\s-]*[0-9]){8}                     # subscriber digits
                ",
            )
            .expect("Valid phone regex")
        });
        &PATTERN
    }

    /// Country code, check digits, 11-30 alphanumerics with optional single
    /// space, NBSP or dash separators. Structural only, no mod-97.
    pub fn iban() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"(?-u:\b)[A-Z]{2}[0-9]{2}(?:[\s\x{00A0}-]?[A-Z0-9]){11,30}(?-u:\b)",
            )
            .expect("Valid IBAN regex")
        });
        &PATTERN
    }
}

fn spans(regex: &Regex, text: &str) -> Vec<Range<usize>> {
    regex.find_iter(text).map(|m| m.range()).collect()
}

/// Email address matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for EmailMatcher {
    fn category(&self) -> Category {
        Category::Email
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        spans(PatternLibrary::email(), text)
    }
}

/// URL matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlMatcher;

impl UrlMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for UrlMatcher {
    fn category(&self) -> Category {
        Category::Url
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        spans(PatternLibrary::url(), text)
    }
}

/// IPv4 address matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4Matcher;

impl Ipv4Matcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for Ipv4Matcher {
    fn category(&self) -> Category {
        Category::Ipv4
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        spans(PatternLibrary::ipv4(), text)
    }
}

/// Mobile phone number matcher.
///
/// Supports the usual ways Dutch mobile numbers are written:
/// - 06-12345678
/// - 06 1234 5678
/// - +31 6 12345678
/// - (+31) 612345678
/// - 0031 (0)6 12 34 56 78
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneMatcher;

impl PhoneMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for PhoneMatcher {
    fn category(&self) -> Category {
        Category::Phone
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        find_guarded(PatternLibrary::phone(), text, is_digit)
    }
}

/// IBAN matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct IbanMatcher;

impl IbanMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for IbanMatcher {
    fn category(&self) -> Category {
        Category::Iban
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        spans(PatternLibrary::iban(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_extraction() {
        let matcher = EmailMatcher::new();
        let text = "Mail a.b@example.co.uk or JOHN_DOE+tag@Mail-Server.NL today";
        assert_eq!(
            matcher.extract_all(text),
            vec!["a.b@example.co.uk", "JOHN_DOE+tag@Mail-Server.NL"]
        );
    }

    #[test]
    fn test_email_requires_tld() {
        let matcher = EmailMatcher::new();
        assert_eq!(matcher.count("user@localhost"), 0);
        assert_eq!(matcher.count("user@host.c"), 0);
    }

    #[test]
    fn test_email_next_to_non_ascii_letters() {
        let matcher = EmailMatcher::new();
        assert_eq!(
            matcher.extract_all("Mail müller@example.com today"),
            vec!["ller@example.com"]
        );
        assert_eq!(
            matcher.extract_all("josé.garcía@empresa.es"),
            vec!["a@empresa.es"]
        );
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // Kelvin sign and long s fold to k and s under Unicode rules
        assert_eq!(EmailMatcher::new().count("a@example.\u{212A}\u{212A}"), 0);
        assert_eq!(UrlMatcher::new().count("http\u{017F}://example.com"), 0);
        assert_eq!(EmailMatcher::new().count("a@example.NL"), 1);
    }

    #[test]
    fn test_url_stops_at_whitespace_and_paren() {
        let matcher = UrlMatcher::new();
        let text = "See (https://example.com/a?b=1) and WWW.Example.org/x next";
        assert_eq!(
            matcher.extract_all(text),
            vec!["https://example.com/a?b=1", "WWW.Example.org/x"]
        );
    }

    #[test]
    fn test_ipv4_octet_range() {
        let matcher = Ipv4Matcher::new();
        assert_eq!(matcher.extract_all("at 10.0.0.255 now"), vec!["10.0.0.255"]);
        assert_eq!(matcher.count("999.1.1.1"), 0);
        assert_eq!(matcher.count("1.2.3"), 0);
        assert_eq!(matcher.count("0.0.0.0 and 255.255.255.255"), 2);
        assert_eq!(matcher.count("ñ10.0.0.1"), 1);
    }

    #[test]
    fn test_phone_formats() {
        let matcher = PhoneMatcher::new();
        for number in [
            "06-12345678",
            "06 1234 5678",
            "0612345678",
            "+31 6 12345678",
            "+31612345678",
            "(+31) 612345678",
            "0031 (0)6 12 34 56 78",
            "0 6-12-34-56-78",
        ] {
            assert_eq!(matcher.count(number), 1, "expected a match for {number}");
        }
    }

    #[test]
    fn test_phone_rejects_adjacent_digits() {
        let matcher = PhoneMatcher::new();
        assert_eq!(matcher.count("06123456789"), 0);
        assert_eq!(matcher.count("10612345678"), 0);
        assert_eq!(matcher.count("ref 0612345678."), 1);
    }

    #[test]
    fn test_phone_rejects_landlines() {
        let matcher = PhoneMatcher::new();
        assert_eq!(matcher.count("020-1234567"), 0);
        assert_eq!(matcher.count("+31 20 1234567"), 0);
    }

    #[test]
    fn test_iban_with_separators() {
        let matcher = IbanMatcher::new();
        assert_eq!(matcher.count("NL91ABNA0417164300"), 1);
        assert_eq!(matcher.count("IBAN: NL91 ABNA 0417 1643 00"), 1);
        assert_eq!(matcher.count("DE89-3704-0044-0532-0130-00"), 1);
        assert_eq!(
            matcher.count("NL91\u{00A0}ABNA\u{00A0}0417\u{00A0}1643\u{00A0}00"),
            1
        );
    }

    #[test]
    fn test_iban_is_case_sensitive_and_length_checked() {
        let matcher = IbanMatcher::new();
        assert_eq!(matcher.count("nl91abna0417164300"), 0);
        assert_eq!(matcher.count("NL91ABNA04"), 0);
    }

    #[test]
    fn test_repeated_scans_are_independent() {
        let matcher = EmailMatcher::new();
        let text = "x@example.com y@example.com";
        assert_eq!(matcher.count(text), 2);
        assert_eq!(matcher.count(text), 2);
    }
}
