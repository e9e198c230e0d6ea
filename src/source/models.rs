// src/source/models.rs
use serde::{Deserialize, Serialize};

/// One row as a table extractor emits it; `None` marks an empty grid cell.
pub type RawRow = Vec<Option<String>>;

/// Every table found in a document, grouped by page.
/// Also the shape of a JSON table dump:
/// `{"pages":[{"tables":[[["MATERIAL SPECIFICATION","Steel"],[null,"x"]]]}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentTables {
    #[serde(default)]
    pub pages: Vec<PageTables>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTables {
    #[serde(default)]
    pub tables: Vec<RawTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl DocumentTables {
    /// All rows in page order, then table order, then row order.
    pub fn raw_rows(&self) -> impl Iterator<Item = &[Option<String>]> + '_ {
        self.pages
            .iter()
            .flat_map(|page| page.tables.iter())
            .flat_map(|table| table.rows.iter())
            .map(Vec::as_slice)
    }

    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|page| page.tables.len()).sum()
    }
}
