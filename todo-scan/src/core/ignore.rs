// src/core/ignore.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::Path;

use crate::utils::to_slash_path;

/// Glob patterns for paths the walker must skip.
///
/// Patterns are matched against the `/`-separated path relative to the scan
/// root and against the bare file name:
/// - `!pattern` re-includes a path an earlier pattern excluded
/// - `/pattern` is anchored to the root and only matches the relative path
/// - a trailing `/` is dropped, so `generated/` prunes every `generated` dir
#[derive(Debug, Default)]
pub struct Patterns {
    patterns: Vec<(Pattern, bool, bool)>, // (pattern, is_negation, is_anchored)
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compiles every pattern in `globs`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern with invalid glob syntax.
    pub fn from_globs<I, S>(globs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Self::new();
        for glob in globs {
            patterns.add_pattern(glob.as_ref())?;
        }
        Ok(patterns)
    }

    /// Adds one pattern. Blank lines and `#` comments are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not valid glob syntax.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (pattern, is_negation) = pattern
            .strip_prefix('!')
            .map_or((pattern, false), |stripped| (stripped, true));
        let (pattern, is_anchored) = pattern
            .strip_prefix('/')
            .map_or((pattern, false), |stripped| (stripped, true));
        let pattern = pattern.trim_end_matches('/');

        let compiled =
            Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
        self.patterns.push((compiled, is_negation, is_anchored));

        // Unanchored patterns with a path also match at any depth.
        if !is_anchored && pattern.contains('/') && !pattern.starts_with("**/") {
            let nested = format!("**/{pattern}");
            let compiled = Pattern::new(&nested)
                .with_context(|| format!("Invalid ignore pattern: {nested}"))?;
            self.patterns.push((compiled, is_negation, false));
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Checks a root-relative path against the patterns. Negations win.
    #[must_use]
    pub fn matches(&self, relative_path: impl AsRef<Path>) -> bool {
        let relative_path = relative_path.as_ref();
        let path_str = to_slash_path(relative_path);
        let filename = relative_path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        let hit = |pattern: &Pattern, anchored: bool| {
            pattern.matches(&path_str) || (!anchored && pattern.matches(&filename))
        };

        if self
            .patterns
            .iter()
            .any(|(pattern, is_neg, anchored)| *is_neg && hit(pattern, *anchored))
        {
            return false;
        }

        self.patterns
            .iter()
            .any(|(pattern, is_neg, anchored)| !*is_neg && hit(pattern, *anchored))
    }
}
