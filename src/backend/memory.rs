//! In-memory document backend.
//!
//! Documents are registered against file paths and made of pages holding
//! positioned text spans. Glyphs inside a span are treated as equally wide,
//! which is enough to locate sub-span matches and to extract the text inside
//! a rectangle.

use super::{Document, DocumentBackend, Page};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Left margin used by [`MemoryPage::from_lines`].
const LEFT_MARGIN: f32 = 72.0;
/// Top margin used by [`MemoryPage::from_lines`].
const TOP_MARGIN: f32 = 72.0;
/// Glyph height used by [`MemoryPage::from_lines`].
const LINE_HEIGHT: f32 = 12.0;
/// Baseline-to-baseline distance used by [`MemoryPage::from_lines`].
const LINE_SPACING: f32 = 14.0;
/// Glyph advance used by [`MemoryPage::from_lines`].
const GLYPH_WIDTH: f32 = 6.0;

/// A run of text with its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The text of the run
    pub text: String,
    /// Bounding box of the whole run
    pub bbox: Rect,
}

impl TextSpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }

    fn glyph_width(&self) -> f32 {
        let count = self.text.chars().count();
        if count == 0 {
            0.0
        } else {
            self.bbox.width() / count as f32
        }
    }
}

/// A page of positioned text.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPage {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Text spans on the page, in reading order
    pub spans: Vec<TextSpan>,
    /// Make every search on this page fail
    pub fail_search: bool,
    /// Make every text extraction on this page fail
    pub fail_extract: bool,
}

impl MemoryPage {
    /// Create an empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            spans: Vec::new(),
            fail_search: false,
            fail_extract: false,
        }
    }

    /// Create a US Letter page with one span per line of text.
    ///
    /// Lines start at (72, 72) and are 14 points apart; every glyph is
    /// 6 points wide and 12 points tall.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_multisearch::backend::MemoryPage;
    ///
    /// let page = MemoryPage::from_lines(&["first line", "second line"]);
    /// assert_eq!(page.spans.len(), 2);
    /// assert_eq!(page.spans[1].bbox.y0, 86.0);
    /// ```
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut page = Self::new(612.0, 792.0);
        for (i, line) in lines.iter().enumerate() {
            let y0 = TOP_MARGIN + i as f32 * LINE_SPACING;
            let width = line.chars().count() as f32 * GLYPH_WIDTH;
            page = page.with_span(
                *line,
                Rect::new(LEFT_MARGIN, y0, LEFT_MARGIN + width, y0 + LINE_HEIGHT),
            );
        }
        page
    }

    /// Add a span.
    pub fn with_span(mut self, text: impl Into<String>, bbox: Rect) -> Self {
        self.spans.push(TextSpan::new(text, bbox));
        self
    }

    /// Make searches on this page fail.
    pub fn with_failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Make text extraction on this page fail.
    pub fn with_failing_extract(mut self) -> Self {
        self.fail_extract = true;
        self
    }
}

/// A document made of [`MemoryPage`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    /// Pages in order
    pub pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page.
    pub fn with_page(mut self, page: MemoryPage) -> Self {
        self.pages.push(page);
        self
    }
}

/// Backend serving registered [`MemoryDocument`]s.
///
/// Opening a path with no registered document fails, the same way a real
/// backend fails on a file that is not a PDF.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    documents: HashMap<PathBuf, MemoryDocument>,
}

impl MemoryBackend {
    /// Create a backend with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for `path`.
    pub fn with_document(mut self, path: impl AsRef<Path>, document: MemoryDocument) -> Self {
        self.insert(path, document);
        self
    }

    /// Register a document for `path`, replacing any previous one.
    ///
    /// Existing paths are stored canonicalized so they match the paths the
    /// search engine produces.
    pub fn insert(&mut self, path: impl AsRef<Path>, document: MemoryDocument) {
        self.documents.insert(normalize(path.as_ref()), document);
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl DocumentBackend for MemoryBackend {
    type Document<'a> = &'a MemoryDocument where Self: 'a;

    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>> {
        self.documents.get(&normalize(path)).ok_or_else(|| Error::Open {
            path: path.to_path_buf(),
            reason: "no document registered for path".to_string(),
        })
    }
}

impl<'d> Document for &'d MemoryDocument {
    type Page<'p> = MemoryPageRef<'d> where Self: 'p;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Self::Page<'_>> {
        let document: &'d MemoryDocument = *self;
        let page = document.pages.get(index).ok_or(Error::PageOutOfRange {
            page: index,
            count: document.pages.len(),
        })?;
        Ok(MemoryPageRef { index, page })
    }
}

/// A page loaded from a [`MemoryDocument`].
#[derive(Debug, Clone, Copy)]
pub struct MemoryPageRef<'d> {
    index: usize,
    page: &'d MemoryPage,
}

impl Page for MemoryPageRef<'_> {
    fn size(&self) -> (f32, f32) {
        (self.page.width, self.page.height)
    }

    fn search(&self, pattern: &str) -> Result<Vec<Rect>> {
        if self.page.fail_search {
            return Err(Error::Search {
                page: self.index,
                reason: "search rejected by page".to_string(),
            });
        }
        if pattern.is_empty() {
            return Ok(Vec::new());
        }

        let pattern_len = pattern.chars().count() as f32;
        let mut rects = Vec::new();

        for span in &self.page.spans {
            let glyph = span.glyph_width();
            for (offset, _) in span.text.match_indices(pattern) {
                let start = span.text[..offset].chars().count() as f32;
                let x0 = span.bbox.x0 + start * glyph;
                rects.push(Rect::new(x0, span.bbox.y0, x0 + pattern_len * glyph, span.bbox.y1));
            }
        }

        Ok(rects)
    }

    fn text_in_rect(&self, rect: &Rect) -> Result<String> {
        if self.page.fail_extract {
            return Err(Error::Extract {
                page: self.index,
                reason: "extraction rejected by page".to_string(),
            });
        }

        let mut lines = Vec::new();
        for span in &self.page.spans {
            if span.bbox.y0 >= rect.y1 || span.bbox.y1 <= rect.y0 {
                continue;
            }
            // A glyph belongs to the rectangle when its horizontal center does.
            let glyph = span.glyph_width();
            let line: String = span
                .text
                .chars()
                .enumerate()
                .filter(|(i, _)| {
                    let center = span.bbox.x0 + (*i as f32 + 0.5) * glyph;
                    center >= rect.x0 && center <= rect.x1
                })
                .map(|(_, c)| c)
                .collect();
            if !line.is_empty() {
                lines.push(line);
            }
        }

        Ok(lines.join("\n"))
    }
}
