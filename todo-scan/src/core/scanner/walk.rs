// src/core/scanner/walk.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::core::ignore::Patterns;
use crate::core::scanner::utils::should_exclude;

/// Lazily yields every source file under `root` that should be scanned.
///
/// Entries are visited in file-name order so repeated runs over the same tree
/// produce the same sequence. Hidden directories, directories named in
/// `config.exclude_dirs` and paths matching `ignore_patterns` are pruned along
/// with everything below them. A directory that cannot be read is reported
/// with a warning and its subtree is skipped.
///
/// Directory symlinks are never descended into. File symlinks are yielded and
/// read through the link; a dangling one fails later, when the file is read.
pub fn source_files<'a>(
    root: &'a Path,
    config: &'a ScanConfig,
    ignore_patterns: &'a Patterns,
) -> impl Iterator<Item = PathBuf> + 'a {
    let ignore = (!ignore_patterns.is_empty()).then_some(ignore_patterns);

    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !should_exclude(e, root, &config.exclude_dirs, ignore))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry: {err}");
                None
            }
        })
        .filter(move |entry| is_file_like(entry) && config.has_source_extension(entry.path()))
        .map(walkdir::DirEntry::into_path)
}

fn is_file_like(entry: &walkdir::DirEntry) -> bool {
    if entry.path_is_symlink() {
        return !entry.path().is_dir();
    }
    entry.file_type().is_file()
}
