//! Text extraction from documents.
//!
//! The detection engine only sees a plain text buffer. Extractors turn a
//! document into that buffer: every text run trimmed, blank runs dropped,
//! runs joined with a newline.

use crate::error::{ScanError, ScanResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text layer of a document, ready for scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub file_path: PathBuf,
    pub num_pages: usize,
    /// Number of text runs seen, blank ones included.
    pub total_text_items: usize,
    pub text: String,
}

impl ExtractedText {
    /// Builds the scan buffer from raw text runs.
    pub fn from_runs<I, S>(file_path: impl Into<PathBuf>, num_pages: usize, runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_text_items = 0;
        let mut parts = Vec::new();

        for run in runs {
            total_text_items += 1;
            let trimmed = run.as_ref().trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }

        Self {
            file_path: file_path.into(),
            num_pages,
            total_text_items,
            text: parts.join("\n"),
        }
    }

    /// Returns true if the document has machine-readable text.
    ///
    /// Image-only scans have no text runs, or only blank ones.
    pub fn has_text_layer(&self) -> bool {
        self.total_text_items > 0 && !self.text.trim().is_empty()
    }
}

/// Source of document text.
pub trait TextExtractor: Send + Sync {
    /// Extracts the text layer of the document at `input`.
    fn extract(&self, input: &Path) -> ScanResult<ExtractedText>;

    /// Returns a human-readable name for this extractor.
    fn name(&self) -> &str;
}

/// PDF text extractor.
///
/// Pages are counted with `lopdf`; text comes from `pdf-extract`, one run
/// per extracted line.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Creates a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    fn page_count(bytes: &[u8]) -> ScanResult<usize> {
        let document = lopdf::Document::load_mem(bytes).map_err(|e| ScanError::PdfProcessing {
            message: "Failed to parse PDF structure".to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(document.get_pages().len())
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, input: &Path) -> ScanResult<ExtractedText> {
        let bytes = std::fs::read(input).map_err(|e| ScanError::io(input, e))?;

        let num_pages = Self::page_count(&bytes)?;
        let raw = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScanError::TextExtraction {
                path: input.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let extracted = ExtractedText::from_runs(input, num_pages, raw.lines());
        debug!(
            pages = extracted.num_pages,
            items = extracted.total_text_items,
            chars = extracted.text.len(),
            "extracted text layer"
        );
        Ok(extracted)
    }

    fn name(&self) -> &str {
        "PdfExtract"
    }
}
