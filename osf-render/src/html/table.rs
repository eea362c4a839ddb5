use super::escape::escape;
use crate::model::TableBlock;

pub(crate) fn render_table(table: &TableBlock) -> String {
    let mut html = format!(
        r#"<table class="osf-table osf-table-{}">"#,
        escape(&table.style)
    );

    if let Some(caption) = &table.caption {
        html.push_str(&format!("<caption>{}</caption>", escape(caption)));
    }

    if !table.headers.is_empty() {
        html.push_str("<thead><tr>");
        for (index, header) in table.headers.iter().enumerate() {
            html.push_str(&format!(
                r#"<th style="text-align: {}">{}</th>"#,
                table.alignment_of(index).as_str(),
                escape(header)
            ));
        }
        html.push_str("</tr></thead>");
    }

    html.push_str("<tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for (index, cell) in row.cells.iter().enumerate() {
            html.push_str(&format!(
                r#"<td style="text-align: {}">{}</td>"#,
                table.alignment_of(index).as_str(),
                escape(&cell.text)
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, TableCell, TableRow};
    use insta::assert_snapshot;

    #[test]
    fn renders_caption_alignment_and_style() {
        let table = TableBlock {
            caption: Some("Q&A".to_string()),
            style: "striped".to_string(),
            headers: vec!["Name".to_string(), "Score".to_string()],
            alignment: vec![Alignment::Left, Alignment::Right],
            rows: vec![TableRow {
                cells: vec![TableCell::from("Ada"), TableCell::from("9")],
            }],
        };
        assert_snapshot!(
            render_table(&table),
            @r#"<table class="osf-table osf-table-striped"><caption>Q&amp;A</caption><thead><tr><th style="text-align: left">Name</th><th style="text-align: right">Score</th></tr></thead><tbody><tr><td style="text-align: left">Ada</td><td style="text-align: right">9</td></tr></tbody></table>"#
        );
    }

    #[test]
    fn missing_alignment_entries_default_to_left() {
        let table = TableBlock {
            headers: vec!["a".to_string(), "b".to_string()],
            alignment: vec![Alignment::Center],
            ..Default::default()
        };
        let html = render_table(&table);
        assert!(html.contains(r#"<th style="text-align: center">a</th>"#));
        assert!(html.contains(r#"<th style="text-align: left">b</th>"#));
        assert!(html.contains("osf-table-bordered"));
    }
}
