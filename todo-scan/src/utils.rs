// src/utils.rs
use std::path::{Component, Path};

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Cuts `text` to at most `max` characters. No ellipsis is appended.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text.get(..byte_index).unwrap_or(text).to_owned(),
        None => text.to_owned(),
    }
}

/// Joins the normal components of `path` with `/`, whatever the platform.
#[must_use]
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
