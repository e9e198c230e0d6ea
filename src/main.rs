// src/main.rs
mod extractors;
mod pipeline;
mod report;
mod source;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use pipeline::FailurePolicy;
use report::Report;
use source::SourceRegistry;
use storage::{ReportWriter, DEFAULT_REPORT_NAME};
use utils::AppError;

/// Extracts part attributes from specification document tables into one report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the documents to process
    #[arg(short, long, env = "PARTS_INPUT_DIR", default_value = "uploads")]
    input_dir: PathBuf,

    /// Output directory for the report artifacts
    #[arg(short, long, env = "PARTS_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Base file name of the report artifacts
    #[arg(long, default_value = DEFAULT_REPORT_NAME)]
    report_name: String,

    /// Stop at the first unreadable document instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    run(&args)?;
    Ok(())
}

/// Scans, extracts and writes the report. Returns the written artifact paths,
/// or `None` when no document qualified and nothing was written.
fn run(args: &Args) -> Result<Option<Vec<PathBuf>>, AppError> {
    let policy = if args.strict { FailurePolicy::Abort } else { FailurePolicy::Skip };
    let registry = SourceRegistry::default();

    // 3. Find documents
    let documents = pipeline::scan_input_dir(&args.input_dir, &registry)?;

    // 4. Extract one record per document, in listing order
    let outcome = pipeline::process_documents(&documents, &registry, policy)?;

    // 5. Build the report; an empty batch is a warning, not a failure
    let report = match Report::from_dataset(&outcome.dataset) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(
                "No valid documents found in {} ({}; supported: {}). No report written.",
                args.input_dir.display(),
                e,
                registry.extensions().join(", ")
            );
            return Ok(None);
        }
    };

    // 6. Write artifacts
    let writer = ReportWriter::new(&args.output_dir, &args.report_name)?;
    let written = writer.save_all(&report, &outcome.skipped)?;

    tracing::info!(
        "Data saved: {} document(s), {} missing value(s), {} skipped, {} file(s) written",
        report.rows.len(),
        report.missing_count(),
        outcome.skipped.len(),
        written.len()
    );

    Ok(Some(written))
}
