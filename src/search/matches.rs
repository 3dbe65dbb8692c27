//! Match records and result sets.

use crate::geometry::Rect;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One located occurrence of the search pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    match_id: usize,
    page_number: usize,
    location: Rect,
    context_location: Rect,
    context: String,
}

impl Match {
    /// Create a match record.
    pub fn new(
        match_id: usize,
        page_number: usize,
        location: Rect,
        context_location: Rect,
        context: impl Into<String>,
    ) -> Self {
        Self {
            match_id,
            page_number,
            location,
            context_location,
            context: context.into(),
        }
    }

    /// Identifier unique within one search run, assigned in discovery order.
    pub fn match_id(&self) -> usize {
        self.match_id
    }

    /// Zero-based page index.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Tight bounding box of the matched text.
    pub fn location(&self) -> &Rect {
        &self.location
    }

    /// Padded box around the match used for context text and highlighting.
    pub fn context_location(&self) -> &Rect {
        &self.context_location
    }

    /// Text inside [`Match::context_location`]; empty when extraction failed.
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Matches per file, keyed by absolute path in discovery order.
///
/// Only files with at least one match are present.
pub type SearchResults = IndexMap<PathBuf, Vec<Match>>;

/// Why the engine skipped a file or page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The root is not a readable directory
    NotADirectory(String),
    /// A directory entry could not be read during the walk
    Walk(String),
    /// The file could not be opened as a document
    Open(String),
    /// A page could not be loaded
    Page(String),
    /// The literal search failed on a page
    Search(String),
    /// Context extraction failed; the match was still recorded
    Extract(String),
}

/// A file or page the engine did not fully process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skip {
    /// File or directory concerned
    pub path: PathBuf,
    /// Page concerned, if the skip is page-level
    pub page: Option<usize>,
    /// What went wrong
    pub reason: SkipReason,
}

/// Results of a search run together with everything that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Matches per file
    pub results: SearchResults,
    /// Skipped files and pages, in traversal order
    pub skipped: Vec<Skip>,
}

impl SearchReport {
    /// Total number of matches across all files.
    pub fn match_count(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    /// Number of files with at least one match.
    pub fn file_count(&self) -> usize {
        self.results.len()
    }

    /// Look up a match by id, together with the file it belongs to.
    pub fn find(&self, match_id: usize) -> Option<(&Path, &Match)> {
        self.results.iter().find_map(|(path, matches)| {
            matches
                .iter()
                .find(|m| m.match_id == match_id)
                .map(|m| (path.as_path(), m))
        })
    }
}
