//! PDFium document backend.
//!
//! Binds to the PDFium shared library at runtime through `pdfium-render`.
//! PDFium measures pages from the bottom-left corner; rectangles are flipped
//! into page space (top-left origin) on the way out and back on the way in.

use super::{Document, DocumentBackend, Page};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use pdfium_render::prelude::*;
use std::path::Path;

impl From<PdfiumError> for Error {
    fn from(e: PdfiumError) -> Self {
        Error::Pdfium(e.to_string())
    }
}

/// Backend that opens real PDF files with PDFium.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Bind to PDFium.
    ///
    /// Looks for the library in the current directory first, then falls back
    /// to the system library search path.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())?;
        Ok(Self::from_pdfium(Pdfium::new(bindings)))
    }

    /// Bind to a PDFium library located in `dir`.
    pub fn from_library_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let bindings =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir.as_ref()))?;
        Ok(Self::from_pdfium(Pdfium::new(bindings)))
    }

    /// Wrap an already bound PDFium instance.
    pub fn from_pdfium(pdfium: Pdfium) -> Self {
        Self { pdfium }
    }
}

impl DocumentBackend for PdfiumBackend {
    type Document<'a> = PdfiumDocument<'a> where Self: 'a;

    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Open {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(PdfiumDocument { document })
    }
}

/// A PDF opened through PDFium.
pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl<'a> Document for PdfiumDocument<'a> {
    type Page<'p> = PdfiumPage<'a> where Self: 'p;

    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page(&self, index: usize) -> Result<Self::Page<'_>> {
        let count = self.page_count();
        let page_index = PdfPageIndex::try_from(index)
            .ok()
            .filter(|_| index < count)
            .ok_or(Error::PageOutOfRange { page: index, count })?;
        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| Error::Page {
                page: index,
                reason: e.to_string(),
            })?;
        Ok(PdfiumPage { index, page })
    }
}

/// A page loaded through PDFium.
pub struct PdfiumPage<'a> {
    index: usize,
    page: PdfPage<'a>,
}

impl PdfiumPage<'_> {
    fn height(&self) -> f32 {
        self.page.height().value
    }

    fn to_page_space(&self, rect: &PdfRect) -> Rect {
        let height = self.height();
        Rect::new(
            rect.left().value,
            height - rect.top().value,
            rect.right().value,
            height - rect.bottom().value,
        )
    }

    fn to_pdfium_space(&self, rect: &Rect) -> PdfRect {
        let height = self.height();
        PdfRect::new_from_values(height - rect.y1, rect.x0, height - rect.y0, rect.x1)
    }
}

impl Page for PdfiumPage<'_> {
    fn size(&self) -> (f32, f32) {
        (self.page.width().value, self.height())
    }

    fn search(&self, pattern: &str) -> Result<Vec<Rect>> {
        let search_error = |e: PdfiumError| Error::Search {
            page: self.index,
            reason: e.to_string(),
        };

        let text = self.page.text().map_err(search_error)?;
        let search = text
            .search(pattern, &PdfSearchOptions::new())
            .map_err(search_error)?;

        let mut rects = Vec::new();
        for segments in search.iter(PdfSearchDirection::SearchForward) {
            for segment in segments.iter() {
                rects.push(self.to_page_space(&segment.bounds()));
            }
        }
        Ok(rects)
    }

    fn text_in_rect(&self, rect: &Rect) -> Result<String> {
        let text = self.page.text().map_err(|e| Error::Extract {
            page: self.index,
            reason: e.to_string(),
        })?;
        Ok(text.inside_rect(self.to_pdfium_space(rect)))
    }
}
