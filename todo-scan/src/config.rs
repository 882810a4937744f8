// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".todo-scan.toml";

/// Settings for the walk, the owner lookup and text extraction.
///
/// Every field may be omitted from `.todo-scan.toml`; omitted fields keep the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions to scan, without the leading dot.
    pub extensions: Vec<String>,
    /// Directory names that are never descended into.
    pub exclude_dirs: Vec<String>,
    /// Glob patterns matched against root-relative paths and file names.
    pub ignore: Vec<String>,
    /// File whose presence makes a directory a project unit.
    pub marker_file: String,
    /// Tracking file name findings are attributed to.
    pub tracking_file: String,
    pub max_text_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![String::from("rs")],
            exclude_dirs: vec![
                String::from("target"),
                String::from("node_modules"),
                String::from("vendor"),
            ],
            ignore: Vec::new(),
            marker_file: String::from("Cargo.toml"),
            tracking_file: String::from("plans.md"),
            max_text_len: 200,
        }
    }
}

impl ScanConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, a value has the wrong
    /// type, or an unknown key is present.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    #[must_use]
    pub fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

/// Output switches chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub json: bool,
    pub group: bool,
}

/// Finds the nearest `.todo-scan.toml` at or above `dir`.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads the configuration that applies to a scan rooted at `dir`.
///
/// Starts at `dir` and checks each parent directory until a
/// `.todo-scan.toml` is found. With no file anywhere, defaults apply.
///
/// # Errors
///
/// Returns an error if a configuration file is found but cannot be read or
/// parsed.
pub fn load_config(dir: &Path) -> Result<ScanConfig> {
    match find_config_file(dir) {
        Some(path) => {
            log::debug!("using config file {}", path.display());
            ScanConfig::from_file(&path)
        }
        None => {
            log::debug!("no {CONFIG_FILE_NAME} found above {}", dir.display());
            Ok(ScanConfig::default())
        }
    }
}
