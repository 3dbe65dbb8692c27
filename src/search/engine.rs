//! Directory-wide search engine.
//!
//! Walks one or more root folders, opens every `.pdf` file through a
//! [`DocumentBackend`] and records a [`Match`] for each occurrence of a literal
//! pattern. Every failure below the root is recovered locally as a [`Skip`];
//! nothing aborts the traversal.

use super::context::context_window;
use super::matches::{Match, SearchReport, SearchResults, Skip, SkipReason};
use crate::backend::{Document, DocumentBackend, Page};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::geometry::Rect;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Outcome of one stage of the pipeline.
enum Stage<T> {
    Found(T),
    Skip(SkipReason),
}

impl<T> Stage<T> {
    fn from_result(result: Result<T>, reason: impl FnOnce(String) -> SkipReason) -> Self {
        match result {
            Ok(value) => Stage::Found(value),
            Err(e) => Stage::Skip(reason(e.to_string())),
        }
    }
}

/// A located occurrence before its id is assigned.
struct Hit {
    path: PathBuf,
    page_number: usize,
    location: Rect,
    context_location: Rect,
    context: String,
}

/// Searches directory trees for a literal pattern.
///
/// # Example
///
/// ```
/// use pdf_multisearch::backend::MemoryBackend;
/// use pdf_multisearch::search::Searcher;
///
/// let backend = MemoryBackend::new();
/// let searcher = Searcher::new(&backend);
///
/// // Not a directory: soft failure, empty results.
/// assert!(searcher.search("/definitely/not/here", "pattern").is_empty());
/// ```
pub struct Searcher<'b, B> {
    backend: &'b B,
    config: SearchConfig,
}

impl<'b, B: DocumentBackend> Searcher<'b, B> {
    /// Create a searcher with the default configuration.
    pub fn new(backend: &'b B) -> Self {
        Self::with_config(backend, SearchConfig::default())
    }

    /// Create a searcher with a custom configuration.
    pub fn with_config(backend: &'b B, config: SearchConfig) -> Self {
        Self { backend, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search every PDF below `root` for `pattern`.
    ///
    /// Returns an empty mapping when `root` is not a readable directory.
    pub fn search(&self, root: impl AsRef<Path>, pattern: &str) -> SearchResults {
        self.report(root, pattern).results
    }

    /// Search several roots, in order, sharing one id sequence.
    pub fn search_all<P: AsRef<Path>>(&self, roots: &[P], pattern: &str) -> SearchResults {
        self.report_all(roots, pattern).results
    }

    /// Like [`Searcher::search`], also returning what was skipped.
    pub fn report(&self, root: impl AsRef<Path>, pattern: &str) -> SearchReport {
        self.report_all(&[root], pattern)
    }

    /// Like [`Searcher::search_all`], also returning what was skipped.
    pub fn report_all<P: AsRef<Path>>(&self, roots: &[P], pattern: &str) -> SearchReport {
        let mut hits = Vec::new();
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for root in roots {
            let root = root.as_ref();
            let files = match self.pdf_files(root, &mut skipped) {
                Stage::Found(files) => files,
                Stage::Skip(reason) => {
                    log::warn!("Skipping search root {}: {:?}", root.display(), reason);
                    skipped.push(Skip {
                        path: root.to_path_buf(),
                        page: None,
                        reason,
                    });
                    continue;
                },
            };

            for path in files {
                if seen.insert(path.clone()) {
                    self.scan_file(&path, pattern, &mut hits, &mut skipped);
                }
            }
        }

        let results = assign_ids(hits);
        log::info!(
            "Found {} matches for {:?} in {} files ({} skipped)",
            results.values().map(Vec::len).sum::<usize>(),
            pattern,
            results.len(),
            skipped.len()
        );

        SearchReport { results, skipped }
    }

    /// List the PDF files below `root` in traversal order.
    fn pdf_files(&self, root: &Path, skipped: &mut Vec<Skip>) -> Stage<Vec<PathBuf>> {
        let root = match fs::canonicalize(root) {
            Ok(root) if root.is_dir() => root,
            Ok(_) => return Stage::Skip(SkipReason::NotADirectory("not a directory".to_string())),
            Err(e) => return Stage::Skip(SkipReason::NotADirectory(e.to_string())),
        };

        let mut walker = WalkDir::new(&root)
            .follow_links(self.config.follow_links)
            .sort_by(files_first_by_name);
        if let Some(depth) = self.config.max_depth {
            // Files directly inside the root sit at walkdir depth 1.
            walker = walker.max_depth(depth.saturating_add(1));
        }

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if is_pdf_name(entry.file_name()) && is_file_entry(&entry) => {
                    files.push(entry.into_path());
                },
                Ok(_) => {},
                Err(e) => {
                    let path = e.path().map_or_else(|| root.clone(), Path::to_path_buf);
                    log::debug!("Skipping unreadable entry {}: {}", path.display(), e);
                    skipped.push(Skip {
                        path,
                        page: None,
                        reason: SkipReason::Walk(e.to_string()),
                    });
                },
            }
        }

        Stage::Found(files)
    }

    /// Scan one file, appending hits in page order.
    fn scan_file(&self, path: &Path, pattern: &str, hits: &mut Vec<Hit>, skipped: &mut Vec<Skip>) {
        let document = match Stage::from_result(self.backend.open(path), SkipReason::Open) {
            Stage::Found(document) => document,
            Stage::Skip(reason) => {
                log::debug!("Skipping {}: {:?}", path.display(), reason);
                skipped.push(Skip {
                    path: path.to_path_buf(),
                    page: None,
                    reason,
                });
                return;
            },
        };

        for page_number in 0..document.page_count() {
            let page = match Stage::from_result(document.page(page_number), SkipReason::Page) {
                Stage::Found(page) => page,
                Stage::Skip(reason) => {
                    log::debug!("Skipping {} page {}: {:?}", path.display(), page_number, reason);
                    skipped.push(Skip {
                        path: path.to_path_buf(),
                        page: Some(page_number),
                        reason,
                    });
                    continue;
                },
            };

            let locations = match Stage::from_result(page.search(pattern), SkipReason::Search) {
                Stage::Found(locations) => locations,
                Stage::Skip(reason) => {
                    log::debug!(
                        "Search failed in {} page {}: {:?}",
                        path.display(),
                        page_number,
                        reason
                    );
                    skipped.push(Skip {
                        path: path.to_path_buf(),
                        page: Some(page_number),
                        reason,
                    });
                    continue;
                },
            };

            let (_, page_height) = page.size();
            for location in locations {
                let context_location = context_window(&location, page_height, &self.config);
                let extracted = page.text_in_rect(&context_location);
                let context = match Stage::from_result(extracted, SkipReason::Extract) {
                    Stage::Found(context) => context,
                    Stage::Skip(reason) => {
                        skipped.push(Skip {
                            path: path.to_path_buf(),
                            page: Some(page_number),
                            reason,
                        });
                        String::new()
                    },
                };

                hits.push(Hit {
                    path: path.to_path_buf(),
                    page_number,
                    location,
                    context_location,
                    context,
                });
            }
        }
    }
}

/// Search every PDF below `root` with the default configuration.
///
/// See [`Searcher::search`].
pub fn search<B: DocumentBackend>(
    backend: &B,
    root: impl AsRef<Path>,
    pattern: &str,
) -> SearchResults {
    Searcher::new(backend).search(root, pattern)
}

/// Number hits in discovery order and group them by file.
fn assign_ids(hits: Vec<Hit>) -> SearchResults {
    let mut results = SearchResults::new();
    for (match_id, hit) in hits.into_iter().enumerate() {
        results.entry(hit.path).or_default().push(Match::new(
            match_id,
            hit.page_number,
            hit.location,
            hit.context_location,
            hit.context,
        ));
    }
    results
}

/// Regular files before subdirectories, each group by name.
fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Regular file, or a symlink resolving to one when links are not followed.
///
/// Directory symlinks are never descended unless `follow_links` is set.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        || (entry.path_is_symlink()
            && fs::metadata(entry.path()).map_or(false, |meta| meta.is_file()))
}

/// Case-insensitive `.pdf` suffix check on a file name.
pub(crate) fn is_pdf_name(name: &OsStr) -> bool {
    name.to_string_lossy().to_ascii_lowercase().ends_with(".pdf")
}
