// src/core/scanner/owner.rs
use std::path::Path;

use crate::config::ScanConfig;
use crate::utils::to_slash_path;

/// Resolves the tracking file that owns `file`.
///
/// Walks from the file's directory up to `root` (inclusive) and stops at the
/// first directory containing `config.marker_file`. The owner is
/// `<that directory>/<tracking_file>`, relative to `root`. A marker at the root,
/// or no marker at all, gives the root-level tracking file.
#[must_use]
pub fn resolve_owner(file: &Path, root: &Path, config: &ScanConfig) -> String {
    let tracking_file = &config.tracking_file;
    let mut current = file.parent();

    while let Some(dir) = current {
        let Ok(relative) = dir.strip_prefix(root) else {
            break;
        };

        if dir.join(&config.marker_file).is_file() {
            let unit = to_slash_path(relative);
            log::debug!("{} belongs to project unit '{unit}'", file.display());
            return if unit.is_empty() {
                tracking_file.clone()
            } else {
                format!("{unit}/{tracking_file}")
            };
        }

        current = dir.parent();
    }

    tracking_file.clone()
}
