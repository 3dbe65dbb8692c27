//! Error types for the search library.
//!
//! Backends report failures through [`Error`]. The search engine recovers from
//! all of them locally; they only reach callers through the backend traits,
//! the folder browser and the overlay helpers.

use std::path::PathBuf;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while opening and searching documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened as a document
    #[error("Failed to open document {}: {reason}", path.display())]
    Open {
        /// Path of the file that failed to open
        path: PathBuf,
        /// Reason reported by the backend
        reason: String,
    },

    /// Page index outside the document
    #[error("Page {page} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested zero-based page index
        page: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// The backend could not load a page
    #[error("Failed to load page {page}: {reason}")]
    Page {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the backend
        reason: String,
    },

    /// Literal text search failed on a page
    #[error("Search failed on page {page}: {reason}")]
    Search {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the backend
        reason: String,
    },

    /// Text extraction inside a rectangle failed
    #[error("Text extraction failed on page {page}: {reason}")]
    Extract {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the backend
        reason: String,
    },

    /// Page or canvas dimensions that cannot be scaled
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width that was supplied
        width: f32,
        /// Height that was supplied
        height: f32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDFium library error
    #[cfg(feature = "pdfium")]
    #[error("PDFium error: {0}")]
    Pdfium(String),
}
