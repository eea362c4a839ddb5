//! Sheet rendering: sparse `"row,col"` cells densified into a table.

use super::escape::escape;
use crate::defaults;
use crate::model::{Scalar, SheetBlock};
use crate::notice::{NoticeSink, RenderNotice};
use std::collections::HashMap;

/// Upper bounds on the grid materialized for a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLimits {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for SheetLimits {
    fn default() -> Self {
        Self {
            max_rows: 1000,
            max_cols: 100,
        }
    }
}

/// Parse a `"row,col"` key. Both coordinates are 1-based.
pub fn parse_cell_key(key: &str) -> Option<(usize, usize)> {
    let (row, col) = key.split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    (row >= 1 && col >= 1).then_some((row, col))
}

pub(crate) fn render_sheet(sheet: &SheetBlock, limits: SheetLimits, sink: &dyn NoticeSink) -> String {
    let mut cells: HashMap<(usize, usize), &Scalar> = HashMap::new();
    let (mut rows, mut cols) = (1, 1);
    for (key, value) in &sheet.data {
        match parse_cell_key(key) {
            Some((row, col)) => {
                rows = rows.max(row);
                cols = cols.max(col);
                cells.insert((row, col), value);
            }
            None => sink.notice(RenderNotice::MalformedCellKey {
                sheet: sheet.name.clone(),
                key: key.clone(),
            }),
        }
    }

    let mut html = format!(
        r#"<div class="osf-sheet"><h3>{}</h3><table>"#,
        escape(&sheet.name)
    );

    if !sheet.cols.is_empty() {
        html.push_str("<thead><tr>");
        for col in &sheet.cols {
            html.push_str(&format!("<th>{}</th>", escape(col)));
        }
        html.push_str("</tr></thead>");
    }

    html.push_str("<tbody>");
    if cells.is_empty() {
        html.push_str(&format!(
            r#"<tr><td colspan="{}" class="osf-sheet-empty">{}</td></tr>"#,
            sheet.cols.len().max(1),
            defaults::SHEET_EMPTY
        ));
        html.push_str("</tbody></table></div>");
        return html;
    }

    let shown_rows = rows.min(limits.max_rows.max(1));
    let shown_cols = cols.min(limits.max_cols.max(1));
    for row in 1..=shown_rows {
        html.push_str("<tr>");
        for col in 1..=shown_cols {
            let value = cells
                .get(&(row, col))
                .map(|value| escape(&value.to_string()))
                .unwrap_or_default();
            html.push_str(&format!("<td>{value}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");

    if shown_rows < rows || shown_cols < cols {
        sink.notice(RenderNotice::SheetTruncated {
            sheet: sheet.name.clone(),
            rows,
            cols,
            shown_rows,
            shown_cols,
        });
        html.push_str(&format!(
            r#"<tfoot><tr><td colspan="{shown_cols}" class="osf-sheet-note">Showing {shown_rows} of {rows} rows and {shown_cols} of {cols} columns</td></tr></tfoot>"#
        ));
    }

    html.push_str("</table></div>");
    html
}
