// src/models/scan_summary.rs
use crate::models::Finding;
use std::collections::BTreeSet;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub findings: usize,
    pub files_with_findings: usize,
}

impl ScanSummary {
    #[must_use]
    pub fn from_findings(findings: &[Finding]) -> Self {
        let files: BTreeSet<&str> = findings.iter().map(|f| f.file.as_str()).collect();
        Self {
            findings: findings.len(),
            files_with_findings: files.len(),
        }
    }
}

impl std::fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Found {} TODO(s) in {} file(s)",
            self.findings, self.files_with_findings
        )
    }
}
