// src/report.rs
mod json;
mod table;

use anyhow::Result;
use std::collections::BTreeMap;

use crate::config::ReportOptions;
use crate::models::Finding;

pub use json::{render_grouped_json, render_json};
pub use table::{NO_RESULTS, render_grouped_tables, render_table};

/// Groups findings by owning tracking file. Keys come out sorted; within a
/// group findings keep their original order.
#[must_use]
pub fn group_by_owner(findings: &[Finding]) -> BTreeMap<&str, Vec<&Finding>> {
    let mut grouped: BTreeMap<&str, Vec<&Finding>> = BTreeMap::new();
    for finding in findings {
        grouped
            .entry(finding.owner.as_str())
            .or_default()
            .push(finding);
    }
    grouped
}

/// Renders the report selected by `options`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(findings: &[Finding], options: ReportOptions) -> Result<String> {
    match (options.json, options.group) {
        (true, true) => render_grouped_json(&group_by_owner(findings)),
        (true, false) => render_json(findings),
        (false, true) => Ok(render_grouped_tables(&group_by_owner(findings))),
        (false, false) => Ok(render_table(findings)),
    }
}
