//! Document backends.
//!
//! The search engine only talks to documents through the traits in this
//! module: open a file, count and load pages, run a literal search on a page,
//! extract the text inside a rectangle and query the page size. All
//! rectangles crossing this boundary are in page space (top-left origin, y
//! down, see [`crate::geometry`]).
//!
//! Two implementations ship with the crate:
//! - [`MemoryBackend`]: documents described in memory, used by tests and by
//!   callers that already hold extracted text with positions
//! - `PdfiumBackend` (feature `pdfium`): real PDF files through PDFium

use crate::error::Result;
use crate::geometry::Rect;
use std::path::Path;

pub mod memory;
#[cfg(feature = "pdfium")]
#[cfg_attr(docsrs, doc(cfg(feature = "pdfium")))]
pub mod pdfium;

pub use memory::{MemoryBackend, MemoryDocument, MemoryPage, TextSpan};
#[cfg(feature = "pdfium")]
pub use pdfium::PdfiumBackend;

/// Opens files as searchable documents.
pub trait DocumentBackend {
    /// Open document type, possibly borrowing from the backend.
    type Document<'a>: Document
    where
        Self: 'a;

    /// Open the file at `path`.
    ///
    /// Fails with [`crate::Error::Open`] when the file is not a readable
    /// document.
    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>>;
}

/// An open document.
pub trait Document {
    /// Loaded page type, possibly borrowing from the document.
    type Page<'p>: Page
    where
        Self: 'p;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Load the page at a zero-based index.
    fn page(&self, index: usize) -> Result<Self::Page<'_>>;
}

/// A loaded page.
pub trait Page {
    /// Page dimensions as `(width, height)` in points.
    fn size(&self) -> (f32, f32);

    /// Find every occurrence of a literal pattern.
    ///
    /// Returns one tight rectangle per occurrence (or per line fragment of
    /// an occurrence that wraps), in reading order.
    fn search(&self, pattern: &str) -> Result<Vec<Rect>>;

    /// Extract the text that lies inside `rect`.
    fn text_in_rect(&self, rect: &Rect) -> Result<String>;
}
