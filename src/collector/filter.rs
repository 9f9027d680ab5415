//! Predicates deciding which walked files become blocks.

use std::{collections::BTreeSet, path::Path};

pub const DEFAULT_EXTENSIONS: &[&str] = &[".md", ".py", ".js"];

pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules"];

/// Files of this size or larger are left out of the payload.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100_000;

/// Accepted file suffixes, each stored with its leading dot.
///
/// Matching is exact and case-sensitive: `.md` accepts `README.md` but not
/// `README.MD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: BTreeSet<String>,
}

impl ExtensionSet {
    /// Build a set from suffixes with or without the leading dot.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|s| normalize_extension(s.as_ref()))
                .collect(),
        }
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(suffix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// Prefix `ext` with a dot unless it already has one.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Suffix of the final path component, including the leading dot.
///
/// Dotfiles such as `.bashrc` have no suffix.
pub fn file_suffix(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
}

pub fn passes_extension_filter(path: &Path, extensions: &ExtensionSet) -> bool {
    file_suffix(path).is_some_and(|suffix| extensions.contains(&suffix))
}

/// True when `rendered_path` contains none of the exclude substrings.
pub fn passes_exclude_filter(rendered_path: &str, excludes: &[String]) -> bool {
    !excludes
        .iter()
        .any(|needle| rendered_path.contains(needle.as_str()))
}

pub fn passes_size_filter(size: u64, max_file_size: u64) -> bool {
    size < max_file_size
}
