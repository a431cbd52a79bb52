//! PII Scan CLI Application.
//!
//! This binary provides a command-line interface for the piiscan library:
//! scan a PDF and report how many potential redactions it contains, or dump
//! the extracted text layer for debugging.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use piiscan::{terms, CountReport, FileScan, ScanConfig, ScanService, TermCase};

/// PII Scanner
///
/// Scan text-based PDF documents for personal data (emails, URLs, IP
/// addresses, phone numbers, IBANs, credit cards) and custom terms.
/// Nothing is written: the scan only reports what a redaction would remove.
#[derive(Parser)]
#[command(name = "piiscan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a PDF and print potential redactions per category
    Scan {
        /// PDF file to scan
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Custom term to count (can be specified multiple times)
        #[arg(long = "add-term", value_name = "TERM")]
        add_term: Vec<String>,

        /// File with one custom term per line
        #[arg(long = "add-terms-file", value_name = "FILE")]
        add_terms_file: Option<PathBuf>,

        /// Match custom terms regardless of letter case
        #[arg(long)]
        ignore_term_case: bool,

        /// Print the scan result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract the text layer of a PDF (for debugging and verification)
    Extract {
        /// PDF file to read
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Exit code for bad input: missing file, not a PDF, no text layer.
const EXIT_INPUT_ERROR: u8 = 2;

/// Scan command handler.
struct ScanHandler {
    service: ScanService,
}

impl ScanHandler {
    fn new(term_case: TermCase) -> Self {
        let config = ScanConfig::new().with_term_case(term_case);
        Self {
            service: ScanService::with_pdf_extractor().with_config(config),
        }
    }

    /// Executes a scan and prints the report.
    fn scan(&self, input: &Path, terms: &[String], json: bool) -> Result<ExitCode> {
        let result = self
            .service
            .scan_file(input, terms)
            .with_context(|| format!("scan failed for {}", input.display()))?;

        if json {
            let rendered =
                serde_json::to_string_pretty(&result).context("Failed to serialize scan result")?;
            println!("{}", rendered);
        } else {
            println!("{}", render_header(&result));
            match &result.counts {
                Some(counts) => println!("\n{}", render_counts(counts)),
                None => println!(
                    "\nThis PDF appears to have no extractable text. Scanned PDFs are not supported."
                ),
            }
        }

        if result.has_text_layer {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::from(EXIT_INPUT_ERROR))
        }
    }

    /// Extracts text from a PDF.
    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<ExitCode> {
        let text = self
            .service
            .extract_text(input)
            .with_context(|| "Text extraction failed")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn render_header(result: &FileScan) -> String {
    let layer = if result.has_text_layer {
        "YES (text-based PDF)"
    } else {
        "NO (likely scanned/image-only)"
    };

    [
        "PDF Scan Report".to_string(),
        format!("File: {}", result.file_path.display()),
        format!("Pages: {}", result.num_pages),
        format!("Text items: {}", result.total_text_items),
        format!("Text layer: {}", layer),
    ]
    .join("\n")
}

/// Renders counts as an aligned `- key : n` list in report order.
fn render_counts(counts: &CountReport) -> String {
    let width = counts.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    let mut lines = vec!["Potential redactions (counts):".to_string()];
    lines.extend(
        counts
            .iter()
            .map(|(key, count)| format!("- {:<width$} : {}", key, count, width = width)),
    );
    lines.join("\n")
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Scan {
            input,
            add_term,
            add_terms_file,
            ignore_term_case,
            json,
        } => {
            let custom_terms = terms::collect_terms(&add_term, add_terms_file.as_deref())
                .context("Failed to read custom terms")?;
            info!(count = custom_terms.len(), "custom terms loaded");

            let term_case = if ignore_term_case {
                TermCase::Insensitive
            } else {
                TermCase::Sensitive
            };
            ScanHandler::new(term_case).scan(&input, &custom_terms, json)
        }
        Commands::Extract { input, output } => {
            ScanHandler::new(TermCase::default()).extract(&input, output.as_deref())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("piiscan: {:#}", err);
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}
