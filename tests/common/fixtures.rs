//! Test fixtures and PDF builders.
//!
//! Provides a builder for creating test PDFs with specific content,
//! one text run per line.

use anyhow::Result;
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Builder for creating test PDFs with custom content.
///
/// # Example
///
/// ```no_run
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestPdfBuilder::new()
///     .with_title("Customer File")
///     .with_line("Email: jan@example.nl")
///     .build(std::path::Path::new("/tmp/test.pdf"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    title: String,
    lines: Vec<String>,
    page_width: Mm,
    page_height: Mm,
}

impl TestPdfBuilder {
    /// Creates a new test PDF builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Test Document".to_string(),
            lines: Vec::new(),
            page_width: Mm(210.0),  // A4 width
            page_height: Mm(297.0), // A4 height
        }
    }

    /// Sets the document title, which is also written as the first line.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Adds a line of text.
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let (doc, page1, layer1) =
            PdfDocument::new(&self.title, self.page_width, self.page_height, "Layer 1");
        let current_layer = doc.get_page(page1).get_layer(layer1);
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut y = 270.0;
        for line in std::iter::once(&self.title).chain(self.lines.iter()) {
            current_layer.use_text(line.as_str(), 12.0, Mm(20.0), Mm(y), &font);
            y -= 10.0;
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;

        Ok(output_path.to_path_buf())
    }
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a PDF with one page and no text at all, like an image-only scan.
pub fn create_blank_pdf(path: &Path) -> Result<PathBuf> {
    let (doc, _page, _layer) = PdfDocument::new("Scan", Mm(210.0), Mm(297.0), "Layer 1");
    doc.save(&mut BufWriter::new(fs::File::create(path)?))?;
    Ok(path.to_path_buf())
}

/// Creates a customer record PDF with one instance of every PII category.
pub fn create_customer_record(path: &Path) -> Result<PathBuf> {
    TestPdfBuilder::new()
        .with_title("Customer Record")
        .with_line("Name: Jan Jansen")
        .with_line("Email: jan@example.nl")
        .with_line("Mobile: 06-12345678")
        .with_line("Portal: https://portal.example.nl")
        .with_line("Last login from 192.168.1.20")
        .with_line("IBAN: NL91ABNA0417164300")
        .with_line("Card: 4111-1111-1111-1111")
        .build(path)
}

/// Writes a terms file with one term per line.
pub fn write_terms_file(path: &Path, terms: &[&str]) -> Result<PathBuf> {
    fs::write(path, terms.join("\n"))?;
    Ok(path.to_path_buf())
}
