// src/core/scanner/utils.rs
use crate::core::ignore::Patterns;
use crate::utils::is_hidden;
use std::path::Path;

/// Determines if a directory entry should be pruned from the walk based on:
/// - whether it's a hidden directory
/// - whether it's a directory whose name is in `exclude_dirs`
/// - whether its root-relative path matches the ignore patterns
///
/// The root entry itself is never excluded.
pub fn should_exclude(
    entry: &walkdir::DirEntry,
    root: &Path,
    exclude_dirs: &[String],
    ignore_patterns: Option<&Patterns>,
) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if entry.file_type().is_dir() {
        let excluded_name = entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.iter().any(|dir| dir == name));
        if is_hidden(entry) || excluded_name {
            return true;
        }
    }

    if let Some(patterns) = ignore_patterns {
        if let Ok(relative) = entry.path().strip_prefix(root) {
            if patterns.matches(relative) {
                return true;
            }
        }
    }

    false
}
