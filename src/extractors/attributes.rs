// src/extractors/attributes.rs

// --- Imports ---
use std::path::Path;

use super::dimension::strip_units;
use super::identifier::extract_number;
use super::rows::Row;

// --- Constants ---
/// Value of a field that no row supplied.
pub const MISSING: &str = "N/A";

/// Row whose successor carries the part name in its second cell.
pub const BASIC_ATTRIBUTES_MARKER: &str = "Basic Attributes";

// --- Schema ---
/// The fixed set of attributes read from a specification document, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Name,
    MaterialSpecification,
    CoatingSpecification,
    MaximumOutsideDiameter,
    OverallLength,
    MinimumInsideDiameter,
}

impl AttributeKey {
    pub const COUNT: usize = 6;

    pub const ALL: [AttributeKey; Self::COUNT] = [
        AttributeKey::Name,
        AttributeKey::MaterialSpecification,
        AttributeKey::CoatingSpecification,
        AttributeKey::MaximumOutsideDiameter,
        AttributeKey::OverallLength,
        AttributeKey::MinimumInsideDiameter,
    ];

    /// The cell text that introduces this attribute in a document table.
    pub fn source_key(self) -> &'static str {
        match self {
            AttributeKey::Name => "Name",
            AttributeKey::MaterialSpecification => "MATERIAL SPECIFICATION",
            AttributeKey::CoatingSpecification => "COATING SPECIFICATION",
            AttributeKey::MaximumOutsideDiameter => "MAXIMUM OUTSIDE DIAMETER",
            AttributeKey::OverallLength => "OVERALL LENGTH",
            AttributeKey::MinimumInsideDiameter => "MINIMUM INSIDE DIAMETER",
        }
    }

    /// Column header used in the report.
    pub fn presentation_label(self) -> &'static str {
        match self {
            AttributeKey::Name => "Name",
            AttributeKey::MaterialSpecification => "WFD Material",
            AttributeKey::CoatingSpecification => "COATING SPECIFICATION",
            AttributeKey::MaximumOutsideDiameter => "OD, in",
            AttributeKey::OverallLength => "L, in",
            AttributeKey::MinimumInsideDiameter => "ID, in",
        }
    }

    /// Whether values carry a unit suffix that must be stripped.
    pub fn is_dimension(self) -> bool {
        matches!(
            self,
            AttributeKey::MaximumOutsideDiameter
                | AttributeKey::OverallLength
                | AttributeKey::MinimumInsideDiameter
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

// --- Data Structures ---
/// One document's extracted values. Every schema key is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    number: String,
    values: [String; AttributeKey::COUNT],
}

impl DocumentRecord {
    /// A record with every attribute unset and the given document number.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            values: std::array::from_fn(|_| MISSING.to_string()),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn get(&self, key: AttributeKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.values[key.index()] = value.into();
    }

    /// Schema keys with their values, in schema order.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeKey, &str)> + '_ {
        AttributeKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    pub fn missing_count(&self) -> usize {
        let number_missing = usize::from(self.number == MISSING);
        number_missing + self.values.iter().filter(|v| v.as_str() == MISSING).count()
    }
}

/// A single assignment produced by one scan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub key: AttributeKey,
    pub value: String,
}

// --- Scan State Machine ---
/// Where the scan stands, derived solely from the row before the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    AfterBasicAttributesMarker,
}

impl ScanState {
    /// The state a row leaves behind for its successor.
    pub fn following(row: &Row) -> Self {
        if row.first() == Some(BASIC_ATTRIBUTES_MARKER) {
            ScanState::AfterBasicAttributesMarker
        } else {
            ScanState::Normal
        }
    }
}

/// Pure transition: the updates `row` yields in `state`, plus the next state.
///
/// After the marker only the second cell is read, as `Name`; a row too short
/// to have one yields nothing. Otherwise every schema key found in the row
/// takes the cell right after its first occurrence, or the sentinel when it is
/// the last cell.
pub fn step(state: ScanState, row: &Row) -> (ScanState, Vec<FieldUpdate>) {
    let updates = match state {
        ScanState::AfterBasicAttributesMarker => row
            .cell(1)
            .map(|name| FieldUpdate {
                key: AttributeKey::Name,
                value: name.to_string(),
            })
            .into_iter()
            .collect(),
        ScanState::Normal => AttributeKey::ALL
            .iter()
            .filter_map(|&key| {
                let idx = row.position(key.source_key())?;
                let raw = row.cell(idx + 1).unwrap_or(MISSING);
                let value = if key.is_dimension() {
                    strip_units(raw)
                } else {
                    raw.to_string()
                };
                Some(FieldUpdate { key, value })
            })
            .collect(),
    };

    (ScanState::following(row), updates)
}

// --- Main Mapper Structure ---
/// Folds a document's normalized rows into its [`DocumentRecord`].
#[derive(Debug)]
pub struct AttributeMapper {
    record: DocumentRecord,
    state: ScanState,
}

impl AttributeMapper {
    /// Starts a scan for the document at `path`; the number comes from its file name.
    pub fn for_document<P: AsRef<Path>>(path: P) -> Self {
        Self {
            record: DocumentRecord::new(extract_number(path)),
            state: ScanState::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Applies one row. The row always becomes the new "previous row".
    pub fn feed(&mut self, row: &Row) {
        let (next, updates) = step(self.state, row);
        for update in updates {
            tracing::trace!("{} = {:?}", update.key.source_key(), update.value);
            self.record.set(update.key, update.value);
        }
        self.state = next;
    }

    pub fn feed_all<I: IntoIterator<Item = Row>>(&mut self, rows: I) {
        for row in rows {
            self.feed(&row);
        }
    }

    pub fn finish(self) -> DocumentRecord {
        self.record
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        let raw: Vec<Option<String>> = cells.iter().map(|c| Some(c.to_string())).collect();
        Row::from_raw(&raw).unwrap()
    }

    fn scan(path: &str, rows: &[&[&str]]) -> DocumentRecord {
        let mut mapper = AttributeMapper::for_document(path);
        assert_eq!(mapper.state(), ScanState::Normal);
        mapper.feed_all(rows.iter().map(|cells| row(cells)));
        mapper.finish()
    }

    #[test]
    fn test_new_record_is_all_sentinel() {
        let record = AttributeMapper::for_document("widget.pdf").finish();
        assert_eq!(record.number(), MISSING);
        assert!(record.attributes().all(|(_, v)| v == MISSING));
        assert_eq!(record.missing_count(), AttributeKey::COUNT + 1);
    }

    #[test]
    fn test_name_follows_basic_attributes_marker() {
        let record = scan("7_Part_a.html", &[&["Basic Attributes"], &["Type", "WidgetX"]]);
        assert_eq!(record.get(AttributeKey::Name), "WidgetX");
        assert_eq!(record.number(), "7");
    }

    #[test]
    fn test_marker_only_applies_to_next_row() {
        let record = scan(
            "x.html",
            &[&["Basic Attributes"], &["Type", "First"], &["Type", "Second"]],
        );
        assert_eq!(record.get(AttributeKey::Name), "First");
    }

    #[test]
    fn test_short_row_after_marker_leaves_name_untouched() {
        let record = scan(
            "x.html",
            &[&["Name", "Early"], &["Basic Attributes"], &["Lonely"]],
        );
        assert_eq!(record.get(AttributeKey::Name), "Early");
    }

    #[test]
    fn test_marker_branch_skips_key_matching() {
        let record = scan(
            "x.html",
            &[&["Basic Attributes"], &["Type", "Widget", "MATERIAL SPECIFICATION", "Steel"]],
        );
        assert_eq!(record.get(AttributeKey::MaterialSpecification), MISSING);
    }

    #[test]
    fn test_key_takes_following_cell() {
        let record = scan("x.html", &[&["MATERIAL SPECIFICATION", "Steel", "extra"]]);
        assert_eq!(record.get(AttributeKey::MaterialSpecification), "Steel");
    }

    #[test]
    fn test_dimension_values_are_normalized() {
        let record = scan(
            "x.html",
            &[
                &["MAXIMUM OUTSIDE DIAMETER", "10 in"],
                &["OVERALL LENGTH", "12.75 in.", "MINIMUM INSIDE DIAMETER", "3/4 in"],
            ],
        );
        assert_eq!(record.get(AttributeKey::MaximumOutsideDiameter), "10");
        assert_eq!(record.get(AttributeKey::OverallLength), "12.75");
        assert_eq!(record.get(AttributeKey::MinimumInsideDiameter), "3/4");
    }

    #[test]
    fn test_key_in_last_cell_yields_sentinel() {
        let record = scan(
            "x.html",
            &[&["COATING SPECIFICATION", "Zinc"], &["Notes", "COATING SPECIFICATION"]],
        );
        assert_eq!(record.get(AttributeKey::CoatingSpecification), MISSING);
    }

    #[test]
    fn test_unmatched_rows_keep_earlier_values() {
        let record = scan(
            "x.html",
            &[&["MATERIAL SPECIFICATION", "Steel"], &["Weight", "4 lb"]],
        );
        assert_eq!(record.get(AttributeKey::MaterialSpecification), "Steel");
    }

    #[test]
    fn test_duplicate_key_uses_first_occurrence() {
        let record = scan(
            "x.html",
            &[&["MATERIAL SPECIFICATION", "Steel", "MATERIAL SPECIFICATION", "Brass"]],
        );
        assert_eq!(record.get(AttributeKey::MaterialSpecification), "Steel");
    }

    #[test]
    fn test_step_is_pure_and_derives_state_from_row() {
        let marker = row(&["Basic Attributes", "ignored"]);
        let (state, updates) = step(ScanState::Normal, &marker);
        assert_eq!(state, ScanState::AfterBasicAttributesMarker);
        assert!(updates.is_empty());

        let (state, updates) = step(state, &row(&["Type", "Widget"]));
        assert_eq!(state, ScanState::Normal);
        assert_eq!(
            updates,
            vec![FieldUpdate { key: AttributeKey::Name, value: "Widget".to_string() }]
        );
    }

    #[test]
    fn test_consecutive_markers_chain() {
        let record = scan(
            "x.html",
            &[&["Basic Attributes"], &["Basic Attributes", "Nested"], &["Type", "Inner"]],
        );
        assert_eq!(record.get(AttributeKey::Name), "Inner");
    }
}
