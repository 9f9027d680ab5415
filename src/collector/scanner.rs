use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{
    CollectOptions,
    filter::{
        file_suffix, passes_exclude_filter, passes_extension_filter, passes_size_filter,
    },
};

/// A file that passed every filter and will become one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Path as printed in the block header.
    pub display: String,
    pub suffix: String,
    pub size: u64,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in traversal order.
    pub entries: Vec<FileEntry>,
    /// Entries that could not be walked or stat'ed.
    pub skipped_count: usize,
}

/// Walk `options.root` and return every file that passes the filters.
///
/// Entries within a directory are visited in file-name order, so the result
/// is stable across runs and platforms. Directories whose path already
/// contains an exclude substring are not descended into. A root that is
/// missing or is not a directory yields nothing.
pub fn scan_files(options: &CollectOptions) -> ScanResult {
    let root = options.root.as_path();
    let mut result = ScanResult::default();

    if !root.is_dir() {
        debug!(root = %root.display(), "root is not a directory, nothing to collect");
        return result;
    }

    let skip_path = options
        .skip_path
        .as_deref()
        .and_then(|p| p.canonicalize().ok());

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !e.file_type().is_dir()
                || passes_exclude_filter(&display_path(e.path()), &options.excludes)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("Cannot access path: {}", e);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !passes_extension_filter(path, &options.extensions) {
            continue;
        }

        let rendered = display_path(path);
        if !passes_exclude_filter(&rendered, &options.excludes) {
            continue;
        }

        // Follows symlinks so a link to a regular file is sized by its target.
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                result.skipped_count += 1;
                warn!("Cannot read metadata for {}: {}", rendered, e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        if !passes_size_filter(metadata.len(), options.max_file_size) {
            debug!(path = %rendered, size = metadata.len(), "file too large, skipping");
            continue;
        }

        if let Some(skip) = &skip_path {
            if is_same_file(path, skip) {
                debug!(path = %rendered, "skipping output file");
                continue;
            }
        }

        result.entries.push(FileEntry {
            path: path.to_path_buf(),
            suffix: file_suffix(path).unwrap_or_default(),
            display: rendered,
            size: metadata.len(),
        });
    }

    result
}

/// Render a walked path for the block header: `.` components are dropped,
/// so `./a/b.py` prints as `a/b.py`.
pub fn display_path(path: &Path) -> String {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

/// Compares resolved paths, so a symlink to the skipped file also matches.
fn is_same_file(path: &Path, canonical: &Path) -> bool {
    path.canonicalize().is_ok_and(|p| p == canonical)
}
