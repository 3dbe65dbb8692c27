//! Literal text search across folders of PDF files.
//!
//! For every occurrence of the pattern the engine records the tight bounding
//! box of the match and a padded context window around it, plus the text
//! inside that window. Results are grouped per file in discovery order and
//! match ids run across the whole search.
//!
//! ## Example
//!
//! ```ignore
//! use pdf_multisearch::backend::PdfiumBackend;
//! use pdf_multisearch::search::Searcher;
//!
//! let backend = PdfiumBackend::new()?;
//! let results = Searcher::new(&backend).search("/home/me/papers", "entropy");
//!
//! for (path, matches) in &results {
//!     for m in matches {
//!         println!("{} p{}: {}", path.display(), m.page_number() + 1, m.context());
//!     }
//! }
//! ```

mod context;
mod engine;
mod matches;

pub use context::context_window;
pub use engine::{search, Searcher};
pub(crate) use engine::is_pdf_name;
pub use matches::{Match, SearchReport, SearchResults, Skip, SkipReason};
