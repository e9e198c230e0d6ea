// src/report/mod.rs
use serde::Serialize;

use crate::extractors::{AttributeKey, DocumentRecord, MISSING};
use crate::utils::error::ReportError;

pub const ITEM_LABEL: &str = "Item";
pub const NUMBER_LABEL: &str = "Number";

/// Records in the order their documents were processed. Append-only.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DocumentRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DocumentRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCell {
    pub value: String,
    /// Set when the value is the `N/A` sentinel, so writers can flag it.
    pub missing: bool,
}

impl ReportCell {
    fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let missing = value == MISSING;
        Self { value, missing }
    }
}

/// The presentation table: labelled columns, one row per document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<ReportCell>>,
}

impl Report {
    /// Builds the report, numbering rows from 1 in dataset order.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ReportError> {
        if dataset.is_empty() {
            return Err(ReportError::NoData);
        }

        let rows = dataset
            .records()
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let mut cells = Vec::with_capacity(AttributeKey::COUNT + 2);
                cells.push(ReportCell::new((idx + 1).to_string()));
                cells.push(ReportCell::new(record.number()));
                cells.extend(record.attributes().map(|(_, value)| ReportCell::new(value)));
                cells
            })
            .collect();

        Ok(Self { columns: column_labels(), rows })
    }

    pub fn missing_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.missing).count()
    }
}

/// `Item`, `Number`, then each schema key's presentation label.
pub fn column_labels() -> Vec<&'static str> {
    [ITEM_LABEL, NUMBER_LABEL]
        .into_iter()
        .chain(AttributeKey::ALL.iter().map(|key| key.presentation_label()))
        .collect()
}
