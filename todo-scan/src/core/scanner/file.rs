// src/core/scanner/file.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::config::ScanConfig;
use crate::core::scanner::markers::MarkerPatterns;
use crate::core::scanner::owner::resolve_owner;
use crate::models::Finding;
use crate::utils::to_slash_path;

/// Scans one file for markers.
///
/// The file is read in full and closed before matching. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD rather than failing the file.
///
/// # Arguments
///
/// * `path` - The file to scan, located under `root`
/// * `root` - The scan root; findings carry paths relative to it
/// * `config` - Owner lookup and text length settings
/// * `patterns` - Compiled marker patterns
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn scan_file(
    path: &Path,
    root: &Path,
    config: &ScanConfig,
    patterns: &MarkerPatterns,
) -> Result<Vec<Finding>> {
    let bytes = fs::read(path).with_context(|| format!("Could not read {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let relative = path.strip_prefix(root).unwrap_or(path);
    let file = to_slash_path(relative);
    let owner = resolve_owner(path, root, config);

    Ok(patterns.scan_text(&content, &file, &owner, config.max_text_len))
}
