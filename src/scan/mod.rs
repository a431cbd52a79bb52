//! Scanning: the detection engine and the service that feeds it documents.
//!
//! The engine works on plain text. [`ScanService`] wraps it with the
//! document-level concerns: validating the input path, extracting the text
//! layer, and deciding whether there is anything to scan at all.

pub mod engine;
pub mod report;

pub use engine::{scan, DetectionEngine};
pub use report::{CountReport, Detection};

use crate::domain::TermCase;
use crate::error::{ScanError, ScanResult};
use crate::extract::{PdfTextExtractor, TextExtractor};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Library-level scan settings.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// How custom terms treat letter case.
    pub term_case: TermCase,
}

impl ScanConfig {
    /// Default settings: case-sensitive custom terms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case handling for custom terms.
    pub fn with_term_case(mut self, term_case: TermCase) -> Self {
        self.term_case = term_case;
        self
    }
}

/// Outcome of scanning one document.
#[derive(Debug, Clone, Serialize)]
pub struct FileScan {
    pub file_path: PathBuf,
    pub num_pages: usize,
    pub total_text_items: usize,
    pub has_text_layer: bool,
    /// `None` when the document has no text layer to scan.
    pub counts: Option<CountReport>,
}

/// Scan service coordinating text extraction and detection.
pub struct ScanService {
    extractor: Box<dyn TextExtractor>,
    config: ScanConfig,
}

impl ScanService {
    /// Creates a new scan service with the specified extractor.
    pub fn new(extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            config: ScanConfig::default(),
        }
    }

    /// Creates a service that reads PDF files.
    pub fn with_pdf_extractor() -> Self {
        Self::new(Box::new(PdfTextExtractor::new()))
    }

    /// Replaces the scan configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans a PDF file for PII and custom terms.
    ///
    /// Fails if the path does not exist, is not a regular file, or is not a
    /// `.pdf`. A PDF without extractable text is not an error: the result
    /// has `counts: None`.
    pub fn scan_file<S: AsRef<str>>(&self, input: &Path, terms: &[S]) -> ScanResult<FileScan> {
        Self::validate_input(input)?;

        // Compile terms before the (slower) extraction so bad terms fail fast
        let engine = DetectionEngine::new(terms, &self.config)?;

        info!(
            path = %input.display(),
            extractor = self.extractor.name(),
            terms = engine.terms().len(),
            "scanning document"
        );

        let extracted = self.extractor.extract(input)?;
        let has_text_layer = extracted.has_text_layer();

        let counts = if has_text_layer {
            let report = engine.scan(&extracted.text);
            for (key, count) in report.iter() {
                debug!(category = key, count, "detector finished");
            }
            if report.has_findings() {
                info!(findings = report.total(), "scan complete");
            } else {
                info!("scan complete, nothing to redact");
            }
            Some(report)
        } else {
            warn!(
                path = %input.display(),
                items = extracted.total_text_items,
                "no extractable text layer, skipping detection"
            );
            None
        };

        Ok(FileScan {
            file_path: extracted.file_path,
            num_pages: extracted.num_pages,
            total_text_items: extracted.total_text_items,
            has_text_layer,
            counts,
        })
    }

    /// Extracts the text buffer the engine would scan.
    pub fn extract_text(&self, input: &Path) -> ScanResult<String> {
        Self::validate_input(input)?;
        Ok(self.extractor.extract(input)?.text)
    }

    fn validate_input(input: &Path) -> ScanResult<()> {
        let metadata = std::fs::metadata(input).map_err(|e| ScanError::io(input, e))?;

        if !metadata.is_file() {
            return Err(ScanError::UnsupportedInput {
                path: input.to_path_buf(),
                reason: "only single PDF files are supported".to_string(),
            });
        }

        let is_pdf = input
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(ScanError::UnsupportedInput {
                path: input.to_path_buf(),
                reason: "not a PDF".to_string(),
            });
        }

        Ok(())
    }
}
