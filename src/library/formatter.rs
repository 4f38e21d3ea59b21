// file: src/library/formatter.rs
// description: display titles and canonical paths derived from document locations
// reference: pure path arithmetic, no filesystem access

use crate::extractor::patterns::strip_date_prefix;
use crate::utils::Validator;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPath {
    pub title: String,
    pub canonical_path: String,
}

#[derive(Debug, Clone)]
pub struct TitlePathFormatter {
    root: PathBuf,
    suffix: String,
}

impl TitlePathFormatter {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    pub fn format(&self, path: &Path) -> FormattedPath {
        let relative = self.relative_path(path);
        FormattedPath {
            title: format_title(&relative),
            canonical_path: strip_date_prefix(&relative),
        }
    }

    pub fn canonical_path(&self, path: &Path) -> String {
        strip_date_prefix(&self.relative_path(path))
    }

    /// Root-relative, forward-slash separated, document suffix removed.
    /// Paths outside the root are used as given.
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative = Validator::sanitize_file_path(&relative.to_string_lossy());

        match relative.strip_suffix(&self.suffix) {
            Some(stem) => stem.to_string(),
            None => relative,
        }
    }
}

/// Turns a relative path into a display title: date prefix removed,
/// separators become spaces, each word starts upper-case.
pub fn format_title(relative_path: &str) -> String {
    let cleaned = strip_date_prefix(relative_path).replace(['_', '-'], " ");

    cleaned
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
