//! Custom assertions for count reports.

use piiscan::{Category, CountReport};

/// Asserts every category count, given in report order:
/// email, url, ipv4, phone, iban, creditcard, custom_terms.
///
/// # Panics
/// Panics with the full report if any count differs.
pub fn assert_counts(report: &CountReport, expected: [usize; 7]) {
    let actual: Vec<usize> = Category::ALL.iter().map(|c| report.get(*c)).collect();
    assert_eq!(
        actual,
        expected.to_vec(),
        "count mismatch (email, url, ipv4, phone, iban, creditcard, custom_terms): {:?}",
        report
    );
}

/// Asserts that only `category` has findings, with exactly `count` of them.
pub fn assert_only(report: &CountReport, category: Category, count: usize) {
    for other in Category::ALL {
        let expected = if other == category { count } else { 0 };
        assert_eq!(
            report.get(other),
            expected,
            "unexpected count for '{}' in {:?}",
            other,
            report
        );
    }
}
