//! PII detection for text-based PDF documents.
//!
//! This library is the scan stage of a scan → redact → verify pipeline. It
//! counts personally identifiable information in a document's text layer so
//! a user can see what a redaction pass would have to remove.
//!
//! # Features
//!
//! - **Email, URL, IPv4**: practical patterns, case-insensitive where it matters
//! - **Phone Numbers**: Dutch mobile numbers in national and international form
//! - **IBAN**: structural check with optional space/dash grouping
//! - **Credit Cards**: 13-19 digit candidates confirmed by the Luhn checksum
//! - **Custom Terms**: whole-word literal matching for names, codes, etc.
//!
//! # Architecture
//!
//! - [`domain`]: the individual recognizers and the Luhn validator
//! - [`scan`]: the detection engine, count reports and the scan service
//! - [`extract`]: PDF text extraction
//! - [`terms`]: custom term sources
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```
//! let report = piiscan::scan("Alice met Bob and Alice again", &["Alice", "Bob"]).unwrap();
//! assert_eq!(report.custom_terms, 3);
//! assert_eq!(report.email, 0);
//! ```
//!
//! # Scanning a PDF
//!
//! ```no_run
//! use piiscan::ScanService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ScanService::with_pdf_extractor();
//! let result = service.scan_file(Path::new("invoice.pdf"), &["ACME"])?;
//!
//! if let Some(counts) = result.counts {
//!     for (category, count) in counts.iter() {
//!         println!("{category}: {count}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Match Positions
//!
//! ```
//! use piiscan::{Category, DetectionEngine};
//!
//! let engine = DetectionEngine::builtin_only();
//! let text = "Server 192.168.1.1 is down";
//! let detections = engine.detect(text);
//! assert_eq!(detections.len(), 1);
//! assert_eq!(detections[0].category, Category::Ipv4);
//! assert_eq!(detections[0].text(text), Some("192.168.1.1"));
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod extract;
pub mod scan;
pub mod terms;

// Re-exports for convenient access
pub use domain::{Category, PatternMatcher, TermCase, TermMatcher};
pub use error::{ScanError, ScanResult};
pub use extract::{ExtractedText, PdfTextExtractor, TextExtractor};
pub use scan::{
    scan, CountReport, Detection, DetectionEngine, FileScan, ScanConfig, ScanService,
};
