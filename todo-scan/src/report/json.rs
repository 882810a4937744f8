// src/report/json.rs
use anyhow::{Context as _, Result};
use std::collections::BTreeMap;

use crate::models::Finding;

/// Pretty-printed JSON array of findings.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(findings: &[Finding]) -> Result<String> {
    serde_json::to_string_pretty(findings).context("Failed to serialize findings")
}

/// Pretty-printed JSON object mapping owner to its findings.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_grouped_json(grouped: &BTreeMap<&str, Vec<&Finding>>) -> Result<String> {
    serde_json::to_string_pretty(grouped).context("Failed to serialize grouped findings")
}
