// src/core/scanner/markers.rs
use anyhow::{Context as _, Result};
use regex::{Regex, RegexBuilder};

use crate::models::{Finding, Marker};
use crate::utils::truncate_chars;

/// Explicit tags, checked in this order. The first match wins.
pub const EXPLICIT_PATTERNS: &[(&str, Marker)] = &[
    (r"//\s*TODO:?\s*(.*)$", Marker::Todo),
    (r"//\s*FIXME:?\s*(.*)$", Marker::Fixme),
    (r"//\s*NOTE:?\s*(.*)$", Marker::Note),
    (r"//\s*HACK:?\s*(.*)$", Marker::Hack),
    (r"/\*\s*TODO:?\s*(.*?)\s*\*/", Marker::Todo),
    (r"/\*\s*FIXME:?\s*(.*?)\s*\*/", Marker::Fixme),
];

/// Phrases that suggest deferred work without an explicit tag.
pub const SEMANTIC_PATTERNS: &[&str] = &[
    r"//.*\b(fix this|clean ?up|reconsider|revisit)\b",
    r"//.*\b(temporary|workaround|should be changed)\b",
    r"//.*\b(will need to|should eventually|needs to be)\b",
];

/// A marker matched on one line, before it is tied to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub marker: Marker,
    pub text: String,
}

/// Compiled marker patterns for one scan.
#[derive(Debug)]
pub struct MarkerPatterns {
    explicit: Vec<(Regex, Marker)>,
    semantic: Vec<Regex>,
    comment: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid marker pattern: {pattern}"))
}

impl MarkerPatterns {
    /// Compiles the built-in pattern tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::from_tables(EXPLICIT_PATTERNS, SEMANTIC_PATTERNS)
    }

    /// Compiles custom pattern tables. Explicit patterns keep their order.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that fails to compile.
    pub fn from_tables(explicit: &[(&str, Marker)], semantic: &[&str]) -> Result<Self> {
        let explicit = explicit
            .iter()
            .map(|(pattern, marker)| Ok((compile(pattern)?, *marker)))
            .collect::<Result<Vec<_>>>()?;
        let semantic = semantic
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>>>()?;
        let comment = Regex::new(r"//\s*(.*)$").context("Invalid comment pattern")?;

        Ok(Self {
            explicit,
            semantic,
            comment,
        })
    }

    /// Classifies a single line. Returns the untruncated text.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<LineMatch> {
        for (regex, marker) in &self.explicit {
            if let Some(caps) = regex.captures(line) {
                let text = caps.get(1).map_or(line, |m| m.as_str()).trim();
                return Some(LineMatch {
                    marker: *marker,
                    text: text.to_owned(),
                });
            }
        }

        if self.semantic.iter().any(|regex| regex.is_match(line)) {
            return self
                .comment
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| LineMatch {
                    marker: Marker::Semantic,
                    text: m.as_str().trim().to_owned(),
                });
        }

        None
    }

    /// Scans the full text of one file, producing at most one finding per line.
    #[must_use]
    pub fn scan_text(
        &self,
        content: &str,
        file: &str,
        owner: &str,
        max_text_len: usize,
    ) -> Vec<Finding> {
        content
            .lines()
            .enumerate()
            .filter_map(|(line_index, line)| {
                self.match_line(line).map(|found| Finding {
                    file: file.to_owned(),
                    line: line_index.saturating_add(1),
                    marker: found.marker,
                    text: truncate_chars(&found.text, max_text_len),
                    owner: owner.to_owned(),
                })
            })
            .collect()
    }
}
