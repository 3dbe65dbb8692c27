//! Integration tests for folder search.
//!
//! Documents are served by the in-memory backend, registered against real
//! files inside a temporary directory so the directory walk sees them.

use pdf_multisearch::backend::{MemoryBackend, MemoryDocument, MemoryPage};
use pdf_multisearch::search::{SkipReason, Searcher};
use pdf_multisearch::{search, Rect, SearchConfig};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Helper functions for building fixture trees

fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(&path).unwrap();
    fs::canonicalize(&path).unwrap()
}

fn document(pages: &[&[&str]]) -> MemoryDocument {
    pages
        .iter()
        .fold(MemoryDocument::new(), |doc, lines| doc.with_page(MemoryPage::from_lines(lines)))
}

fn fixture(files: &[(&str, MemoryDocument)]) -> (TempDir, MemoryBackend, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = MemoryBackend::new();
    let mut paths = Vec::new();
    for (relative, doc) in files {
        let path = touch(dir.path(), relative);
        backend.insert(&path, doc.clone());
        paths.push(path);
    }
    (dir, backend, paths)
}

// ============================================================================
// Core scenarios
// ============================================================================

#[test]
fn test_single_match_on_first_page() {
    let (dir, backend, paths) =
        fixture(&[("paper.pdf", document(&[&["a needle in a haystack"]]))]);

    let results = search(&backend, dir.path(), "needle");

    assert_eq!(results.len(), 1);
    let matches = &results[&paths[0]];
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_id(), 0);
    assert_eq!(matches[0].page_number(), 0);
}

#[test]
fn test_matches_on_non_adjacent_pages() {
    let doc = document(&[&["needle here"], &["nothing to see"], &["another needle"]]);
    let (dir, backend, paths) = fixture(&[("book.pdf", doc)]);

    let results = search(&backend, dir.path(), "needle");

    assert_eq!(results.len(), 1);
    let matches = &results[&paths[0]];
    let pages: Vec<usize> = matches.iter().map(|m| m.page_number()).collect();
    let ids: Vec<usize> = matches.iter().map(|m| m.match_id()).collect();
    assert_eq!(pages, vec![0, 2]);
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_non_pdf_and_corrupted_files_yield_nothing() {
    let (dir, mut backend, _) = fixture(&[]);
    // Readable by the backend, but the extension excludes it from the walk.
    let notes = touch(dir.path(), "notes.txt");
    backend.insert(&notes, document(&[&["needle"]]));
    // Has the extension, but the backend cannot open it.
    touch(dir.path(), "broken.pdf");

    let report = Searcher::new(&backend).report(dir.path(), "needle");

    assert!(report.results.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].path.ends_with("broken.pdf"));
    assert!(matches!(report.skipped[0].reason, SkipReason::Open(_)));
}

#[test]
fn test_empty_pattern_yields_nothing() {
    let (dir, backend, _) = fixture(&[("paper.pdf", document(&[&["some text"]]))]);

    assert!(search(&backend, dir.path(), "").is_empty());
}

#[test]
fn test_match_ids_shared_across_files() {
    let (dir, backend, paths) = fixture(&[
        ("b.pdf", document(&[&["needle"]])),
        ("a.pdf", document(&[&["needle"]])),
    ]);

    let results = search(&backend, dir.path(), "needle");

    assert_eq!(results.len(), 2);
    // a.pdf is visited first regardless of creation order.
    let (first, first_matches) = results.get_index(0).unwrap();
    assert_eq!(first, &paths[1]);
    assert_eq!(first_matches[0].match_id(), 0);
    assert_eq!(results[&paths[0]][0].match_id(), 1);
}

// ============================================================================
// Match geometry
// ============================================================================

#[test]
fn test_location_and_context_window() {
    let (dir, backend, paths) =
        fixture(&[("paper.pdf", document(&[&["needle in a haystack"]]))]);

    let results = search(&backend, dir.path(), "needle");
    let m = &results[&paths[0]][0];

    // Six glyphs of six points starting at (72, 72), twelve points tall.
    assert_eq!(*m.location(), Rect::new(72.0, 72.0, 108.0, 84.0));
    // Half the match height vertically, fifty points horizontally.
    assert_eq!(*m.context_location(), Rect::new(22.0, 66.0, 158.0, 90.0));
    assert!(m.context_location().contains(m.location()));
    assert!(m.context().starts_with("needle in a"));
}

#[test]
fn test_context_window_clamped_to_page_top() {
    let page = MemoryPage::new(200.0, 100.0).with_span("edge", Rect::new(10.0, 0.0, 34.0, 12.0));
    let (dir, backend, paths) =
        fixture(&[("edge.pdf", MemoryDocument::new().with_page(page))]);

    let results = search(&backend, dir.path(), "edge");
    let context = *results[&paths[0]][0].context_location();

    assert_eq!(context.y0, 0.0);
    assert_eq!(context.y1, 18.0);
    // Horizontal expansion is not clamped to the page.
    assert_eq!(context.x0, -40.0);
    assert_eq!(context.x1, 84.0);
}

#[test]
fn test_context_window_clamped_to_page_bottom() {
    let page =
        MemoryPage::new(200.0, 100.0).with_span("floor", Rect::new(10.0, 96.0, 40.0, 100.0));
    let (dir, backend, paths) =
        fixture(&[("floor.pdf", MemoryDocument::new().with_page(page))]);

    let results = search(&backend, dir.path(), "floor");
    let context = *results[&paths[0]][0].context_location();

    // Short matches still get the minimum vertical padding.
    assert_eq!(context.y0, 91.0);
    assert_eq!(context.y1, 100.0);
}

#[test]
fn test_custom_context_margins() {
    let (dir, backend, paths) = fixture(&[("paper.pdf", document(&[&["needle"]]))]);
    let config = SearchConfig::new()
        .with_context_margin_x(10.0)
        .with_pad_y_ratio(1.0);

    let results = Searcher::with_config(&backend, config).search(dir.path(), "needle");
    let context = *results[&paths[0]][0].context_location();

    assert_eq!(context, Rect::new(62.0, 60.0, 118.0, 96.0));
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_extension_is_case_insensitive() {
    let (dir, backend, paths) = fixture(&[("SHOUTING.PDF", document(&[&["needle"]]))]);

    let results = search(&backend, dir.path(), "needle");

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&paths[0]));
}

#[test]
fn test_files_without_matches_are_absent() {
    let (dir, backend, paths) = fixture(&[
        ("hit.pdf", document(&[&["needle"]])),
        ("miss.pdf", document(&[&["hay"], &["more hay"]])),
    ]);

    let results = search(&backend, dir.path(), "needle");

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&paths[0]));
    assert!(!results.contains_key(&paths[1]));
}

#[test]
fn test_files_before_subdirectories() {
    let (dir, backend, _) = fixture(&[
        ("a/inner.pdf", document(&[&["needle"]])),
        ("z.pdf", document(&[&["needle"]])),
        ("b/deep/last.pdf", document(&[&["needle"]])),
        ("b/first.pdf", document(&[&["needle"]])),
    ]);

    let results = search(&backend, dir.path(), "needle");
    let order: Vec<String> = results
        .keys()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(order, vec!["z.pdf", "inner.pdf", "first.pdf", "last.pdf"]);
    let ids: Vec<usize> = results.values().map(|m| m[0].match_id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_result_paths_are_absolute() {
    let (dir, backend, _) = fixture(&[("nested/doc.pdf", document(&[&["needle"]]))]);

    let results = search(&backend, dir.path(), "needle");

    assert!(results.keys().all(|p| p.is_absolute()));
}

#[test]
fn test_max_depth_limits_walk() {
    let (dir, backend, paths) = fixture(&[
        ("top.pdf", document(&[&["needle"]])),
        ("one/mid.pdf", document(&[&["needle"]])),
        ("one/two/low.pdf", document(&[&["needle"]])),
    ]);

    let shallow = Searcher::with_config(&backend, SearchConfig::new().with_max_depth(0))
        .search(dir.path(), "needle");
    assert_eq!(shallow.keys().collect::<Vec<_>>(), vec![&paths[0]]);

    let middle = Searcher::with_config(&backend, SearchConfig::new().with_max_depth(1))
        .search(dir.path(), "needle");
    assert_eq!(middle.len(), 2);
    assert!(!middle.contains_key(&paths[2]));
}

#[test]
fn test_missing_root_is_soft_failure() {
    let backend = MemoryBackend::new();
    let report = Searcher::new(&backend).report("/definitely/not/here", "needle");

    assert!(report.results.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(report.skipped[0].reason, SkipReason::NotADirectory(_)));
}

#[test]
fn test_root_that_is_a_file_is_soft_failure() {
    let (_dir, backend, paths) = fixture(&[("single.pdf", document(&[&["needle"]]))]);

    let report = Searcher::new(&backend).report(&paths[0], "needle");

    assert!(report.results.is_empty());
    assert!(matches!(report.skipped[0].reason, SkipReason::NotADirectory(_)));
}

// ============================================================================
// Page-level failures
// ============================================================================

#[test]
fn test_failing_page_search_skips_only_that_page() {
    let doc = MemoryDocument::new()
        .with_page(MemoryPage::from_lines(&["needle"]))
        .with_page(MemoryPage::from_lines(&["needle"]).with_failing_search())
        .with_page(MemoryPage::from_lines(&["needle"]));
    let (dir, backend, paths) = fixture(&[("mixed.pdf", doc)]);

    let report = Searcher::new(&backend).report(dir.path(), "needle");

    let pages: Vec<usize> = report.results[&paths[0]].iter().map(|m| m.page_number()).collect();
    assert_eq!(pages, vec![0, 2]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].page, Some(1));
    assert!(matches!(report.skipped[0].reason, SkipReason::Search(_)));
}

#[test]
fn test_failing_extraction_keeps_match_with_empty_context() {
    let doc = MemoryDocument::new()
        .with_page(MemoryPage::from_lines(&["needle"]).with_failing_extract());
    let (dir, backend, paths) = fixture(&[("quiet.pdf", doc)]);

    let report = Searcher::new(&backend).report(dir.path(), "needle");

    let m = &report.results[&paths[0]][0];
    assert_eq!(m.context(), "");
    assert_eq!(*m.location(), Rect::new(72.0, 72.0, 108.0, 84.0));
    assert!(matches!(report.skipped[0].reason, SkipReason::Extract(_)));
}

#[test]
fn test_broken_file_does_not_stop_later_files() {
    let (dir, backend, _) = fixture(&[("b.pdf", document(&[&["needle"]]))]);
    touch(dir.path(), "a.pdf");

    let report = Searcher::new(&backend).report(dir.path(), "needle");

    assert_eq!(report.file_count(), 1);
    assert_eq!(report.match_count(), 1);
    assert_eq!(report.results[0][0].match_id(), 0);
}

// ============================================================================
// Multiple roots
// ============================================================================

#[test]
fn test_search_all_shares_counter_across_roots() {
    let (first, first_backend, first_paths) = fixture(&[("one.pdf", document(&[&["needle"]]))]);
    let second = tempfile::tempdir().unwrap();
    let second_path = touch(second.path(), "two.pdf");
    let backend = first_backend.with_document(&second_path, document(&[&["needle needle"]]));

    let results =
        Searcher::new(&backend).search_all(&[second.path(), first.path()], "needle");

    let (path, matches) = results.get_index(0).unwrap();
    assert_eq!(path, &second_path);
    assert_eq!(matches.iter().map(|m| m.match_id()).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(results[&first_paths[0]][0].match_id(), 2);
}

#[test]
fn test_search_all_visits_overlapping_roots_once() {
    let (dir, backend, paths) = fixture(&[("sub/doc.pdf", document(&[&["needle"]]))]);
    let sub = dir.path().join("sub");

    let report = Searcher::new(&backend).report_all(&[dir.path(), sub.as_path()], "needle");

    assert_eq!(report.match_count(), 1);
    assert!(report.results.contains_key(&paths[0]));
}

#[test]
fn test_search_all_continues_past_bad_root() {
    let (dir, backend, _) = fixture(&[("doc.pdf", document(&[&["needle"]]))]);
    let missing = dir.path().join("missing");

    let report = Searcher::new(&backend).report_all(&[missing.as_path(), dir.path()], "needle");

    assert_eq!(report.match_count(), 1);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_report_serializes_to_json() {
    let (dir, backend, _) = fixture(&[("doc.pdf", document(&[&["needle"]]))]);

    let report = Searcher::new(&backend).report(dir.path(), "needle");
    let json = serde_json::to_value(&report).unwrap();

    let matches = json["results"].as_object().unwrap().values().next().unwrap();
    assert_eq!(matches[0]["match_id"], 0);
    assert_eq!(matches[0]["location"]["x0"], 72.0);
    assert!(json["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn test_unbounded_max_depth_searches_everything() {
    let (dir, backend, _) = fixture(&[
        ("top.pdf", document(&[&["needle"]])),
        ("one/two/three/low.pdf", document(&[&["needle"]])),
    ]);

    let config = SearchConfig::new().with_max_depth(usize::MAX);
    let results = Searcher::with_config(&backend, config).search(dir.path(), "needle");

    assert_eq!(results.len(), 2);
}

// ============================================================================
// Symbolic links
// ============================================================================

#[cfg(unix)]
#[test]
fn test_file_symlink_is_searched() {
    use std::os::unix::fs::symlink;

    let (_outside, backend, paths) = fixture(&[("real.pdf", document(&[&["needle"]]))]);
    let dir = tempfile::tempdir().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    symlink(&paths[0], root.join("link.pdf")).unwrap();

    let results = search(&backend, &root, "needle");

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&root.join("link.pdf")));
    assert_eq!(results[0][0].match_id(), 0);
}

#[cfg(unix)]
#[test]
fn test_directory_symlink_followed_only_when_enabled() {
    use std::os::unix::fs::symlink;

    let (outside, backend, _) = fixture(&[("shelf/doc.pdf", document(&[&["needle"]]))]);
    let dir = tempfile::tempdir().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    symlink(outside.path().join("shelf"), root.join("linked")).unwrap();

    assert!(search(&backend, &root, "needle").is_empty());

    let config = SearchConfig::new().with_follow_links(true);
    let results = Searcher::with_config(&backend, config).search(&root, "needle");

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&root.join("linked").join("doc.pdf")));
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_recorded_as_walk_skip() {
    use std::os::unix::fs::symlink;

    let (dir, backend, paths) = fixture(&[
        ("real.pdf", document(&[&["needle"]])),
        ("sub/inner.pdf", document(&[&["needle"]])),
    ]);
    symlink("..", dir.path().join("sub").join("loop")).unwrap();

    let config = SearchConfig::new().with_follow_links(true);
    let report = Searcher::with_config(&backend, config).report(dir.path(), "needle");

    assert_eq!(report.file_count(), 2);
    assert_eq!(report.match_count(), 2);
    assert!(report.results.contains_key(&paths[0]));
    assert!(report.results.contains_key(&paths[1]));
    assert!(report
        .skipped
        .iter()
        .any(|skip| matches!(skip.reason, SkipReason::Walk(_))));
}
