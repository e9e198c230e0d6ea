// src/source/html.rs

// --- Imports ---
use std::path::Path;

use once_cell::sync::Lazy;
use scraper::{node::Node, ElementRef, Html, Selector};

use super::models::{DocumentTables, PageTables, RawRow, RawTable};
use super::TableSource;
use crate::utils::error::SourceError;

// --- CSS Selectors (Lazy Static) ---
// Page containers as written by PDF-to-HTML table exporters
static PAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".page").expect("Failed to compile PAGE_SELECTOR")
});

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLE_SELECTOR")
});

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr").expect("Failed to compile ROW_SELECTOR")
});

static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td, th").expect("Failed to compile CELL_SELECTOR")
});

const CELL_TAGS: &[&str] = &["td", "th"];

/// Reads tables out of an HTML export of a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTableSource;

impl HtmlTableSource {
    pub fn new() -> Self {
        Self
    }

    /// Splits already-loaded markup into pages and tables.
    ///
    /// Each outermost `.page` element is one page; a `.page` nested inside
    /// another belongs to the outer one. Once a document has page markup,
    /// tables outside every `.page` are ignored.
    pub fn parse(&self, html_content: &str) -> DocumentTables {
        let document = Html::parse_document(html_content);

        let mut pages: Vec<PageTables> = document
            .select(&PAGE_SELECTOR)
            .filter(|page| {
                !page
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .any(|outer| PAGE_SELECTOR.matches(&outer))
            })
            .map(page_tables)
            .collect();

        // No page markup: the whole document counts as one page
        if pages.is_empty() {
            pages.push(page_tables(document.root_element()));
        }

        tracing::debug!("Parsed HTML export into {} page(s)", pages.len());
        DocumentTables { pages }
    }
}

impl TableSource for HtmlTableSource {
    fn name(&self) -> &'static str {
        "html"
    }

    fn load(&self, path: &Path) -> Result<DocumentTables, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.parse(&content))
    }
}

/// Closest ancestor (excluding `element` itself) whose tag is one of `tags`.
fn enclosing<'a>(element: ElementRef<'a>, tags: &[&str]) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| tags.contains(&ancestor.value().name()))
}

// Nested tables are read as tables of their own, never as part of the outer one
fn page_tables(page: ElementRef) -> PageTables {
    let tables = page
        .select(&TABLE_SELECTOR)
        .map(|table| RawTable {
            rows: table
                .select(&ROW_SELECTOR)
                .filter(|row| enclosing(*row, &["table"]) == Some(table))
                .map(raw_row)
                .collect(),
        })
        .collect();
    PageTables { tables }
}

fn raw_row(row: ElementRef) -> RawRow {
    row.select(&CELL_SELECTOR)
        .filter(|cell| enclosing(*cell, &["tr"]) == Some(row))
        .map(|cell| {
            let cleaned = cell_text(cell).split_whitespace().collect::<Vec<_>>().join(" ");
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned)
            }
        })
        .collect()
}

/// Concatenated text owned by `cell`, skipping text of cells in nested tables.
fn cell_text(cell: ElementRef) -> String {
    cell.descendants()
        .filter_map(|node| {
            let Node::Text(text_node) = node.value() else {
                return None;
            };
            let parent = node.parent().and_then(ElementRef::wrap)?;
            let owner = if CELL_TAGS.contains(&parent.value().name()) {
                Some(parent)
            } else {
                enclosing(parent, CELL_TAGS)
            };
            (owner == Some(cell)).then(|| &*text_node.text)
        })
        .collect()
}
