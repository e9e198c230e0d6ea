// src/storage/html.rs
use html_escape::encode_text;

use crate::report::Report;

pub const SHEET_TITLE: &str = "Extracted Data";

/// Renders the report as a standalone HTML page, one table.
/// Cells holding the sentinel get the `missing` class (light red fill, dark red text).
pub fn render_report_html(report: &Report) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n<style>\n", SHEET_TITLE));

    html.push_str("table { border-collapse: collapse; }\n");
    html.push_str("th, td { border: 1px solid #999; padding: 2px 6px; min-width: 20ch; }\n");
    html.push_str(".missing { background-color: #FFC7CE; color: #9C0006; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!("<table>\n<caption>{}</caption>\n<thead>\n<tr>", SHEET_TITLE));
    for column in &report.columns {
        html.push_str(&format!("<th>{}</th>", encode_text(column)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &report.rows {
        html.push_str("<tr>");
        for cell in row {
            if cell.missing {
                html.push_str(&format!("<td class=\"missing\">{}</td>", encode_text(&cell.value)));
            } else {
                html.push_str(&format!("<td>{}</td>", encode_text(&cell.value)));
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{AttributeKey, DocumentRecord};
    use crate::report::Dataset;

    #[test]
    fn test_flags_missing_cells_and_escapes_text() {
        let mut record = DocumentRecord::new("12");
        record.set(AttributeKey::Name, "Sub <A&B>");
        let mut dataset = Dataset::new();
        dataset.push(record);
        let report = Report::from_dataset(&dataset).unwrap();

        let html = render_report_html(&report);

        assert!(html.contains("<th>OD, in</th>"));
        assert!(html.contains("<td>Sub &lt;A&amp;B&gt;</td>"));
        assert!(html.contains("<td class=\"missing\">N/A</td>"));
        assert!(html.contains("<td>12</td>"));
        assert_eq!(html.matches("class=\"missing\"").count(), report.missing_count());
    }
}
