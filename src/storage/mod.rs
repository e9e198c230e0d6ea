// src/storage/mod.rs
pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::SkippedDocument;
use crate::report::Report;
use crate::utils::error::StorageError;

pub const DEFAULT_REPORT_NAME: &str = "processed_data";

pub struct ReportWriter {
    base_dir: PathBuf,
    report_name: String,
}

impl ReportWriter {
    /// Creates a new ReportWriter with the specified output directory
    pub fn new<P: AsRef<Path>>(base_dir: P, report_name: &str) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
            report_name: report_name.to_string(),
        })
    }

    fn target(&self, suffix: &str) -> PathBuf {
        self.base_dir.join(format!("{}{}", self.report_name, suffix))
    }

    /// Writes the report as CSV: a label header row, then one row per document.
    pub fn save_csv(&self, report: &Report) -> Result<PathBuf, StorageError> {
        let file_path = self.target(".csv");

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&file_path)?;

        writer.write_record(&report.columns)?;
        for row in &report.rows {
            writer.write_record(row.iter().map(|cell| cell.value.as_str()))?;
        }
        writer.flush().map_err(StorageError::IoError)?;

        tracing::info!("Saved CSV report to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes the flagged HTML rendering of the report
    pub fn save_html(&self, report: &Report) -> Result<PathBuf, StorageError> {
        let file_path = self.target(".html");

        fs::write(&file_path, html::render_report_html(report))
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved HTML report to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the run in JSON format
    pub fn save_metadata(&self, report: &Report, skipped: &[SkippedDocument]) -> Result<PathBuf, StorageError> {
        let file_path = self.target("_meta.json");

        let metadata = serde_json::json!({
            "report_name": self.report_name,
            "document_count": report.rows.len(),
            "missing_cell_count": report.missing_count(),
            "columns": report.columns,
            "skipped_documents": skipped,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes every report artifact, returning their paths.
    pub fn save_all(&self, report: &Report, skipped: &[SkippedDocument]) -> Result<Vec<PathBuf>, StorageError> {
        Ok(vec![
            self.save_html(report)?,
            self.save_csv(report)?,
            self.save_metadata(report, skipped)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{AttributeKey, DocumentRecord};
    use crate::report::Dataset;

    fn sample_report() -> Report {
        let mut dataset = Dataset::new();
        let mut first = DocumentRecord::new("10");
        first.set(AttributeKey::Name, "Sub, Bit");
        first.set(AttributeKey::MaximumOutsideDiameter, "8");
        dataset.push(first);
        dataset.push(DocumentRecord::new("11"));
        Report::from_dataset(&dataset).unwrap()
    }

    #[test]
    fn test_writer_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/reports");
        ReportWriter::new(&nested, DEFAULT_REPORT_NAME).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_csv_has_labels_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), "parts").unwrap();

        let path = writer.save_csv(&sample_report()).unwrap();
        assert_eq!(path.file_name().unwrap(), "parts.csv");

        let mut reader = csv::ReaderBuilder::new().from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(0), Some("Item"));
        assert_eq!(headers.get(5), Some("OD, in"));

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(2), Some("Sub, Bit"));
        assert_eq!(rows[0].get(5), Some("8"));
        assert_eq!(rows[1].get(0), Some("2"));
        assert_eq!(rows[1].get(2), Some("N/A"));
    }

    #[test]
    fn test_save_all_writes_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path(), DEFAULT_REPORT_NAME).unwrap();
        let skipped = vec![SkippedDocument {
            path: PathBuf::from("uploads/3_Part_bad.json"),
            reason: "Malformed table dump".to_string(),
        }];

        let paths = writer.save_all(&sample_report(), &skipped).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.is_file()));

        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("processed_data_meta.json")).unwrap()).unwrap();
        assert_eq!(meta["document_count"], 2);
        assert_eq!(meta["skipped_documents"][0]["reason"], "Malformed table dump");
        assert_eq!(meta["columns"][7], "ID, in");
    }
}
