// src/source/mod.rs
pub mod html;
pub mod json;
pub mod models;

use std::path::Path;

use crate::utils::error::SourceError;

pub use html::HtmlTableSource;
pub use json::JsonTableSource;
pub use models::DocumentTables;

/// Table extraction for one kind of document file.
pub trait TableSource {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Opens the document and returns its tables, page by page.
    fn load(&self, path: &Path) -> Result<DocumentTables, SourceError>;
}

/// Picks a [`TableSource`] from a document's file extension.
pub struct SourceRegistry {
    sources: Vec<(&'static str, Box<dyn TableSource>)>,
}

impl SourceRegistry {
    pub fn empty() -> Self {
        Self { sources: Vec::new() }
    }

    /// Registers `source` for files ending in `.{extension}` (case-insensitive).
    pub fn register(mut self, extension: &'static str, source: Box<dyn TableSource>) -> Self {
        self.sources.push((extension, source));
        self
    }

    pub fn for_path(&self, path: &Path) -> Option<&dyn TableSource> {
        let extension = path.extension()?.to_str()?;
        self.sources
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
            .map(|(_, source)| source.as_ref())
    }

    pub fn supports(&self, path: &Path) -> bool {
        self.for_path(path).is_some()
    }

    pub fn extensions(&self) -> Vec<&'static str> {
        self.sources.iter().map(|(ext, _)| *ext).collect()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::empty()
            .register("html", Box::new(HtmlTableSource::new()))
            .register("htm", Box::new(HtmlTableSource::new()))
            .register("json", Box::new(JsonTableSource::new()))
    }
}
