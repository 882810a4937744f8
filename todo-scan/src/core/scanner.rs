// src/core/scanner.rs
pub mod file;
pub mod markers;
pub mod owner;
pub mod utils;
pub mod walk;

use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::core::ignore::Patterns;
use crate::core::scanner::file::scan_file;
use crate::core::scanner::markers::MarkerPatterns;
use crate::core::scanner::walk::source_files;
use crate::models::Finding;

/// Where a scan starts.
///
/// Usually a directory. When the user points at a single file, that file is
/// scanned alone and its parent directory serves as the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    dir: PathBuf,
    single_file: Option<PathBuf>,
}

impl ScanRoot {
    /// Resolves `path` to an absolute, canonical scan root.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or cannot be canonicalized.
    pub fn resolve(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Path does not exist: {}", path.display());
        }

        let absolute = fs::canonicalize(path)
            .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

        if absolute.is_file() {
            let dir = absolute
                .parent()
                .map_or_else(|| absolute.clone(), Path::to_path_buf);
            return Ok(Self {
                dir,
                single_file: Some(absolute),
            });
        }

        Ok(Self {
            dir: absolute,
            single_file: None,
        })
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Scans every source file under `dir` for markers.
///
/// # Arguments
///
/// * `dir` - The directory (or single file) to scan
/// * `config` - Walk, owner and extraction settings
///
/// # Returns
///
/// * `Ok(Vec<Finding>)` - Findings in walk order, then line order
///
/// # Errors
///
/// This function may return an error if:
/// * `dir` does not exist
/// * An ignore pattern in `config` is not valid glob syntax
///
/// Unreadable files and directories are logged and skipped, never fatal.
pub fn scan_directory(dir: &Path, config: &ScanConfig) -> Result<Vec<Finding>> {
    let root = ScanRoot::resolve(dir)?;
    scan_root(&root, config)
}

/// Scans an already resolved root. See [`scan_directory`].
///
/// # Errors
///
/// Returns an error if an ignore pattern or a marker pattern fails to compile.
pub fn scan_root(root: &ScanRoot, config: &ScanConfig) -> Result<Vec<Finding>> {
    let ignore_patterns = Patterns::from_globs(&config.ignore)?;
    let marker_patterns = MarkerPatterns::new()?;

    let files: Box<dyn Iterator<Item = PathBuf> + '_> = match &root.single_file {
        Some(file) => Box::new(std::iter::once(file.clone())),
        None => Box::new(source_files(&root.dir, config, &ignore_patterns)),
    };

    let mut findings = Vec::new();
    let mut files_scanned: u64 = 0;

    for path in files {
        files_scanned = files_scanned.saturating_add(1);
        match scan_file(&path, &root.dir, config, &marker_patterns) {
            Ok(found) => findings.extend(found),
            Err(err) => log::warn!("{err:#}"),
        }
    }

    log::debug!(
        "scanned {files_scanned} file(s) under {}, {} finding(s)",
        root.dir.display(),
        findings.len()
    );
    Ok(findings)
}
