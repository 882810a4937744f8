// src/models/finding.rs
use crate::models::Marker;
use serde::Serialize;

/// A single comment line that carries a work marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    /// 1-indexed.
    pub line: usize,
    pub marker: Marker,
    pub text: String,
    /// Tracking file this finding is attributed to, relative to the scan root.
    pub owner: String,
}
