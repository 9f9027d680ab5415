//! Collects matching files under a root into one payload.
//!
//! ## Pipeline
//!
//! 1. `scan_files` walks the root in file-name order and applies the
//!    extension, exclude and size filters.
//! 2. Each matching file is read and decoded best-effort as UTF-8.
//! 3. Each file becomes a block (`\n\n--- FILE: <path> ---\n<contents>`)
//!    appended to the payload.
//!
//! Files that vanish or cannot be read between the walk and the read are
//! skipped with a warning; the rest of the payload is still produced.

mod block;
mod decode;
mod filter;
mod scanner;

use std::{convert::Infallible, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

pub use block::{render_block, write_block};
pub use decode::{Decode, decode_bytes, read_contents};
pub use filter::{
    DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE, ExtensionSet, file_suffix,
    normalize_extension,
};
pub use scanner::{FileEntry, ScanResult, display_path, scan_files};

/// Everything a single collection run needs. Built once per call.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    /// A file is dropped if its path contains any of these substrings.
    pub excludes: Vec<String>,
    /// Exclusive upper bound on file size, in bytes.
    pub max_file_size: u64,
    pub decode: Decode,
    /// A file never to collect, typically the payload being written.
    pub skip_path: Option<PathBuf>,
}

impl CollectOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_path = Some(path.into());
        self
    }
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: ExtensionSet::default(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            decode: Decode::default(),
            skip_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Number of blocks in the payload.
    pub file_count: usize,
    /// Payload length in bytes.
    pub byte_count: usize,
    /// Entries left out because they could not be walked or read.
    pub skipped_count: usize,
}

/// An in-memory payload and its summary.
#[derive(Debug)]
pub struct Collection {
    pub payload: String,
    pub summary: CollectSummary,
}

/// Build the whole payload in memory.
pub fn collect_files(options: &CollectOptions) -> Collection {
    let mut payload = String::new();
    let Ok(summary) = collect_with(options, |entry, contents| {
        let block = render_block(&entry.display, contents);
        payload.push_str(&block);
        Ok::<usize, Infallible>(block.len())
    });
    Collection { payload, summary }
}

/// Stream the payload into `writer`, one block at a time.
///
/// Read failures are skipped; write failures abort the run.
pub fn write_payload<W: Write>(
    options: &CollectOptions,
    writer: &mut W,
) -> Result<CollectSummary> {
    let summary = collect_with(options, |entry, contents| {
        write_block(writer, &entry.display, contents)
            .with_context(|| format!("Failed to write block for {}", entry.display))
    })?;
    writer.flush().context("Failed to flush payload")?;
    Ok(summary)
}

fn collect_with<F, E>(options: &CollectOptions, mut emit: F) -> Result<CollectSummary, E>
where
    F: FnMut(&FileEntry, &str) -> Result<usize, E>,
{
    let ScanResult {
        entries,
        skipped_count,
    } = scan_files(options);

    let mut summary = CollectSummary {
        skipped_count,
        ..CollectSummary::default()
    };

    for entry in &entries {
        let contents = match read_contents(&entry.path, options.decode) {
            Ok(c) => c,
            Err(e) => {
                summary.skipped_count += 1;
                warn!("Cannot read {}: {}", entry.display, e);
                continue;
            }
        };
        summary.byte_count += emit(entry, &contents)?;
        summary.file_count += 1;
        debug!(path = %entry.display, size = entry.size, "collected");
    }

    Ok(summary)
}
