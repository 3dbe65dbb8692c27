// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Multisearch
//!
//! Search whole folders of PDF files for a literal pattern and locate every
//! match on its page.
//!
//! ## Core Features
//!
//! - **Folder Search**: recursive walk with deterministic order, `.pdf` files
//!   matched case-insensitively
//! - **Match Localization**: tight bounding box per occurrence plus a padded
//!   context window and the text inside it
//! - **Soft Failure**: unreadable roots, broken files and failing pages are
//!   skipped and reported, never raised
//! - **Pluggable Backends**: in-memory documents for tests, PDFium for real
//!   files (`pdfium` feature)
//! - **Viewer Helpers**: folder tree listing and highlight overlay geometry
//!
//! ## Quick Start
//!
//! ```
//! use pdf_multisearch::backend::{MemoryBackend, MemoryDocument, MemoryPage};
//! use pdf_multisearch::search::Searcher;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("notes.pdf");
//! File::create(&path)?;
//!
//! let backend = MemoryBackend::new().with_document(
//!     &path,
//!     MemoryDocument::new().with_page(MemoryPage::from_lines(&["the quick brown fox"])),
//! );
//!
//! let results = Searcher::new(&backend).search(dir.path(), "brown");
//! let matches = &results[0];
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].match_id(), 0);
//! assert!(matches[0].context().contains("quick brown fox"));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Geometry
pub mod geometry;

// Configuration
pub mod config;

// Document backends
pub mod backend;

// Text search
pub mod search;

// Folder tree listing
pub mod browse;

// Highlight overlays
pub mod highlight;

// Re-exports
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use geometry::Rect;
pub use search::{search, Match, SearchReport, SearchResults, Searcher};
