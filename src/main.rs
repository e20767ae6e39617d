// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use fips_doc_parser::batch::{self, FileOutcome};
use fips_doc_parser::storage::StorageManager;
use fips_doc_parser::utils::{self, html_debug};
use fips_doc_parser::{AppError, DocumentKind, ParseError};

/// Command Line Interface for the FIPS registry document parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Saved registry pages to parse
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Kind of document the pages hold
    #[arg(short, long, env = "FIPS_DOC_KIND", value_enum)]
    kind: DocumentKind,

    /// Output directory for parsed records (prints JSON to stdout when absent)
    #[arg(short, long, env = "FIPS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Debug mode - save annotated HTML files next to the records
    #[arg(short, long)]
    debug: bool,

    /// Number of pages parsed concurrently
    #[arg(short, long, default_value = "4")]
    jobs: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (RUST_LOG wins over --log-level)
    utils::logging::setup_logging(&args.log_level);
    tracing::info!("Starting processing for args: {:?}", args);

    if args.debug && args.output_dir.is_none() {
        return Err(AppError::Config("--debug needs --output-dir to write annotated pages".to_string()));
    }

    // 3. Initialize storage
    let storage = args.output_dir.as_ref().map(StorageManager::new).transpose()?;

    // 4. Parse every input
    let outcomes = batch::parse_files(args.inputs.clone(), args.kind, args.jobs).await;

    // 5. Report each outcome in input order
    let mut success_count = 0;
    let mut not_found_count = 0;
    let mut failure_count = 0;

    for outcome in &outcomes {
        if args.debug {
            if let Some(storage) = &storage {
                write_debug_page(storage, args.kind, outcome);
            }
        }

        match &outcome.result {
            Ok(record) => {
                tracing::info!(
                    "Parsed {} ({} fields, {} empty)",
                    outcome.path.display(),
                    record.len(),
                    record.empty_field_count()
                );

                match &storage {
                    Some(storage) => {
                        let stem = outcome.stem();
                        match storage.save_record(record, &stem) {
                            Ok(path) => tracing::info!("Saved record to: {}", path.display()),
                            Err(e) => {
                                tracing::error!("Failed to save record for {}: {}", outcome.path.display(), e);
                                failure_count += 1;
                                continue;
                            }
                        }
                        if let Err(e) = storage.save_record_metadata(record, &stem, &outcome.path) {
                            tracing::error!("Failed to save record metadata: {}", e);
                        }
                    }
                    None => {
                        let json = serde_json::to_string(record).map_err(|e| AppError::Processing(e.to_string()))?;
                        println!("{}", json);
                    }
                }
                success_count += 1;
            }
            Err(AppError::Parse(ParseError::DocumentNotFound)) => {
                tracing::warn!("{}: no such registry record", outcome.path.display());
                not_found_count += 1;
            }
            Err(e) => {
                tracing::error!("Failed to parse {}: {}", outcome.path.display(), e);
                failure_count += 1;
            }
        }
    }

    tracing::info!(
        "Processing finished. Success: {}, Not found: {}, Failures: {}",
        success_count,
        not_found_count,
        failure_count
    );

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!("Failed to parse any of {} pages", outcomes.len())));
    }

    Ok(())
}

/// Writes `<out>/<kind>/debug/<stem>_annotated.html`; failures are only logged.
fn write_debug_page(storage: &StorageManager, kind: DocumentKind, outcome: &FileOutcome) {
    if outcome.html.is_empty() {
        return;
    }

    let debug_dir = storage.base_dir().join(kind.label()).join("debug");
    if let Err(e) = std::fs::create_dir_all(&debug_dir) {
        tracing::warn!("Failed to create debug directory {}: {}", debug_dir.display(), e);
        return;
    }

    let debug_html_path = debug_dir.join(format!("{}_annotated.html", outcome.stem()));
    match html_debug::create_debug_html(&outcome.html, &debug_html_path, html_debug::DEBUG_PATTERNS) {
        Ok(count) => tracing::info!("Created annotated debug HTML with {} highlights: {}", count, debug_html_path.display()),
        Err(e) => tracing::warn!("Failed to create debug HTML: {}", e),
    }
}
