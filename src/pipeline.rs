// src/pipeline.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::{normalize_rows, AttributeMapper, DocumentRecord};
use crate::report::Dataset;
use crate::source::{SourceRegistry, TableSource};
use crate::utils::error::{AppError, SourceError};

/// What happens to the batch when one document cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log a warning, leave the document out and carry on.
    #[default]
    Skip,
    /// Stop at the first unreadable document.
    Abort,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub dataset: Dataset,
    pub skipped: Vec<SkippedDocument>,
}

/// Lists documents in `dir` that some registered source can read, in directory-listing order.
pub fn scan_input_dir(dir: &Path, registry: &SourceRegistry) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::Config(format!(
            "Input directory {} does not exist",
            dir.display()
        )));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if registry.supports(&path) {
            documents.push(path);
        } else {
            tracing::debug!("Ignoring unsupported file: {}", path.display());
        }
    }

    tracing::info!("Found {} candidate document(s) in {}", documents.len(), dir.display());
    Ok(documents)
}

/// Runs one document through row normalization and the attribute scan.
pub fn extract_document(path: &Path, source: &dyn TableSource) -> Result<DocumentRecord, SourceError> {
    let tables = source.load(path)?;
    tracing::debug!(
        "Loaded {} table(s) over {} page(s) from {} via {}",
        tables.table_count(),
        tables.pages.len(),
        path.display(),
        source.name()
    );

    let mut mapper = AttributeMapper::for_document(path);
    mapper.feed_all(normalize_rows(tables.raw_rows()));
    let record = mapper.finish();

    tracing::info!(
        "Processed file {} ({} field(s) missing)",
        path.display(),
        record.missing_count()
    );
    Ok(record)
}

/// Extracts every document in order, one at a time.
pub fn process_documents(
    paths: &[PathBuf],
    registry: &SourceRegistry,
    policy: FailurePolicy,
) -> Result<BatchOutcome, AppError> {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        let result = registry
            .for_path(path)
            .ok_or_else(|| SourceError::Unsupported(path.display().to_string()))
            .and_then(|source| extract_document(path, source));

        match result {
            Ok(record) => outcome.dataset.push(record),
            Err(e) if policy == FailurePolicy::Skip => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                outcome.skipped.push(SkippedDocument {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                tracing::error!("Aborting batch at {}: {}", path.display(), e);
                return Err(AppError::Source(e));
            }
        }
    }

    tracing::info!(
        "Batch finished. Extracted: {}, Skipped: {}",
        outcome.dataset.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}
