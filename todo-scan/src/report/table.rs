// src/report/table.rs
use std::collections::BTreeMap;

use crate::models::Finding;

pub const NO_RESULTS: &str = "No TODOs found.";

const HEADER: &str = "| File | Line | Marker | Text |";
const SEPARATOR: &str = "|------|------|--------|------|";

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Renders findings as a markdown table sorted by file, then line.
pub fn render_table<'a, I>(findings: I) -> String
where
    I: IntoIterator<Item = &'a Finding>,
{
    let mut rows: Vec<&Finding> = findings.into_iter().collect();
    if rows.is_empty() {
        return NO_RESULTS.to_owned();
    }
    rows.sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));

    let mut lines = vec![HEADER.to_owned(), SEPARATOR.to_owned()];
    lines.extend(rows.iter().map(|f| {
        format!(
            "| `{}` | {} | {} | {} |",
            escape_cell(&f.file),
            f.line,
            f.marker,
            escape_cell(&f.text)
        )
    }));
    lines.join("\n")
}

/// Renders one `## <owner>` section per group, owners in ascending order.
pub fn render_grouped_tables(grouped: &BTreeMap<&str, Vec<&Finding>>) -> String {
    if grouped.is_empty() {
        return NO_RESULTS.to_owned();
    }

    grouped
        .iter()
        .map(|(owner, findings)| {
            format!("\n## {owner}\n\n{}", render_table(findings.iter().copied()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
