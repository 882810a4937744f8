// src/models/marker.rs
use serde::Serialize;
use std::fmt;

/// Classification of a matched comment.
///
/// The explicit kinds come from a literal tag in the comment. `Semantic` is the
/// low-confidence catch-all for phrases like "workaround" or "revisit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Marker {
    Todo,
    Fixme,
    Note,
    Hack,
    Semantic,
}

impl Marker {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Fixme => "FIXME",
            Self::Note => "NOTE",
            Self::Hack => "HACK",
            Self::Semantic => "SEMANTIC",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
