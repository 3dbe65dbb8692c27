//! Folder and PDF listing for tree views.
//!
//! Builds a depth-limited tree of the folders under a root and the PDF files
//! they contain. Hidden entries (names starting with `.`) are left out and
//! everything is sorted by name.

use crate::search::is_pdf_name;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of directory levels listed by [`browse`].
pub const DEFAULT_BROWSE_DEPTH: usize = 3;

/// A node in the folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FolderEntry {
    /// A directory and its listed contents
    Folder {
        /// File name of the directory
        name: String,
        /// Full path of the directory
        path: PathBuf,
        /// Sub-folders and PDF files, empty beyond the depth limit
        children: Vec<FolderEntry>,
    },
    /// A PDF file
    Pdf {
        /// File name
        name: String,
        /// Full path of the file
        path: PathBuf,
    },
}

impl FolderEntry {
    /// Display name of the entry.
    pub fn name(&self) -> &str {
        match self {
            FolderEntry::Folder { name, .. } | FolderEntry::Pdf { name, .. } => name,
        }
    }

    /// Full path of the entry.
    pub fn path(&self) -> &Path {
        match self {
            FolderEntry::Folder { path, .. } | FolderEntry::Pdf { path, .. } => path,
        }
    }

    /// Number of PDF files in this subtree.
    pub fn pdf_count(&self) -> usize {
        match self {
            FolderEntry::Folder { children, .. } => children.iter().map(Self::pdf_count).sum(),
            FolderEntry::Pdf { .. } => 1,
        }
    }
}

/// List folders and PDF files below `root`.
///
/// Only the first `max_depth` levels below the root are listed; folders on
/// the last listed level appear with no children. An unreadable directory
/// lists as empty.
///
/// # Examples
///
/// ```
/// use pdf_multisearch::browse::browse;
///
/// assert!(browse("/definitely/not/here", 3).is_empty());
/// ```
pub fn browse(root: impl AsRef<Path>, max_depth: usize) -> Vec<FolderEntry> {
    list_dir(root.as_ref(), max_depth, 0)
}

fn list_dir(dir: &Path, max_depth: usize, depth: usize) -> Vec<FolderEntry> {
    if depth >= max_depth {
        return Vec::new();
    }

    let mut names: Vec<_> = match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.file_name()).collect(),
        Err(e) => {
            log::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        },
    };
    names.sort();

    let mut entries = Vec::new();
    for file_name in names {
        let name = file_name.to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = dir.join(&file_name);
        if path.is_dir() {
            let children = list_dir(&path, max_depth, depth + 1);
            entries.push(FolderEntry::Folder {
                name,
                path,
                children,
            });
        } else if path.is_file() && is_pdf_name(&file_name) {
            entries.push(FolderEntry::Pdf { name, path });
        }
    }

    entries
}
