// src/models.rs
mod finding;
mod marker;
mod scan_summary;

pub use finding::Finding;
pub use marker::Marker;
pub use scan_summary::ScanSummary;
