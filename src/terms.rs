//! Custom term sources.
//!
//! Terms come from the command line, from a file with one term per line, or
//! both. Either way they end up as a plain list of strings.

use crate::error::{ScanError, ScanResult};
use std::path::Path;

/// Splits file contents into terms: one per line, trimmed, blanks dropped.
pub fn parse_terms(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a UTF-8 terms file.
pub fn read_terms_file(path: &Path) -> ScanResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
    Ok(parse_terms(&contents))
}

/// Combines inline terms with the terms from an optional file.
///
/// Inline terms come first, then file terms in file order.
pub fn collect_terms(inline: &[String], file: Option<&Path>) -> ScanResult<Vec<String>> {
    let mut terms = inline.to_vec();
    if let Some(path) = file {
        terms.extend(read_terms_file(path)?);
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_terms() {
        let terms = parse_terms("Alice\r\n\r\n  Bob  \n\t\nProject X\n");
        assert_eq!(terms, vec!["Alice", "Bob", "Project X"]);
    }

    #[test]
    fn test_collect_terms_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terms.txt");
        std::fs::write(&path, "Carol\nDave\n").unwrap();

        let terms = collect_terms(&["Alice".to_string()], Some(&path)).unwrap();
        assert_eq!(terms, vec!["Alice", "Carol", "Dave"]);
    }

    #[test]
    fn test_missing_terms_file() {
        let result = read_terms_file(Path::new("/nonexistent/terms.txt"));
        assert!(matches!(result, Err(ScanError::Io { .. })));
    }
}
