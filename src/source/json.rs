// src/source/json.rs
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::models::DocumentTables;
use super::TableSource;
use crate::utils::error::SourceError;

/// Reads a JSON dump of per-page tables, as written by an external table extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTableSource;

impl JsonTableSource {
    pub fn new() -> Self {
        Self
    }
}

impl TableSource for JsonTableSource {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self, path: &Path) -> Result<DocumentTables, SourceError> {
        let reader = BufReader::new(File::open(path)?);
        let tables: DocumentTables = serde_json::from_reader(reader)?;
        tracing::debug!("Read {} page(s) from {}", tables.pages.len(), path.display());
        Ok(tables)
    }
}
