// src/extractors/rows.rs
/// First cell of a row the source documents repeat as a reference line, never data.
pub const NOISE_MARKER: &str = "Described By Document";

/// A compacted table row: trimmed, non-empty cells in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Compacts raw cells, returning `None` when nothing survives.
    pub fn from_raw<S: AsRef<str>>(raw: &[Option<S>]) -> Option<Self> {
        let cells: Vec<String> = raw
            .iter()
            .flatten()
            .map(|cell| cell.as_ref().trim())
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn first(&self) -> Option<&str> {
        self.cell(0)
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Position of the first cell equal to `text`.
    pub fn position(&self, text: &str) -> Option<usize> {
        self.cells.iter().position(|cell| cell == text)
    }

    fn is_noise(&self) -> bool {
        self.first() == Some(NOISE_MARKER)
    }
}

/// Lazily turns raw extractor rows into [`Row`]s.
///
/// Empty rows and rows led by [`NOISE_MARKER`] are dropped here, so they never
/// reach the attribute scan.
pub fn normalize_rows<'a, I>(raw_rows: I) -> impl Iterator<Item = Row> + 'a
where
    I: IntoIterator<Item = &'a [Option<String>]>,
    I::IntoIter: 'a,
{
    raw_rows
        .into_iter()
        .filter_map(Row::from_raw)
        .filter(|row| {
            if row.is_noise() {
                tracing::trace!("Dropping noise row: {:?}", row.cells());
                false
            } else {
                true
            }
        })
}
