//! Adjacent-character guards for regex matches.
//!
//! The `regex` crate has no lookbehind or lookahead. Patterns that must not
//! touch a certain class of character on either side (a phone number glued
//! to another digit, a custom term inside a longer word) are matched without
//! the assertion and then checked here. A rejected candidate restarts the
//! search one character after its start, which is what a backtracking
//! engine does when a lookaround fails.

use regex::Regex;
use std::ops::Range;

/// Finds all non-overlapping matches of `regex` whose neighbouring
/// characters are not rejected by `is_blocked`.
pub fn find_guarded<F>(regex: &Regex, text: &str, is_blocked: F) -> Vec<Range<usize>>
where
    F: Fn(char) -> bool,
{
    let mut spans = Vec::new();
    let mut at = 0;

    while at <= text.len() {
        let Some(m) = regex.find_at(text, at) else {
            break;
        };

        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();

        if before.is_some_and(&is_blocked) || after.is_some_and(&is_blocked) {
            at = next_char_boundary(text, m.start());
            continue;
        }

        at = if m.is_empty() {
            next_char_boundary(text, m.end())
        } else {
            m.end()
        };
        spans.push(m.range());
    }

    spans
}

/// Word characters for term boundaries: ASCII letters, digits and
/// underscore, the same set the built-in patterns' `\b` uses.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// ASCII digit check, used where a match may not touch another digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    index + text[index..].chars().next().map_or(1, char::len_utf8)
}
