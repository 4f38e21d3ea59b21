// file: src/library/scanner.rs
// description: Directory walking and document discovery
// reference: https://docs.rs/walkdir

use crate::error::{Result, SearchError};
use crate::models::DocumentHandle;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DocumentScanner {
    root: PathBuf,
    suffix: String,
}

impl DocumentScanner {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_document(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&self.suffix))
            .unwrap_or(false)
    }

    /// Walks the tree in file-name order and hands every document to
    /// `visit` until it returns `false`. The first walk error stops the
    /// walk; documents already visited stay visited.
    pub fn walk<F>(&self, mut visit: F) -> Result<usize>
    where
        F: FnMut(DocumentHandle) -> bool,
    {
        debug!("Walking directory: {}", self.root.display());
        let mut visited = 0;

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| SearchError::Traversal {
                root: self.root.clone(),
                source,
            })?;

            if !entry.file_type().is_file() || !self.is_document(entry.path()) {
                continue;
            }

            visited += 1;
            if !visit(DocumentHandle::new(entry.into_path())) {
                debug!("Walk stopped early after {} documents", visited);
                break;
            }
        }

        Ok(visited)
    }

    pub fn first_document(&self) -> Result<Option<DocumentHandle>> {
        let mut first = None;
        self.walk(|handle| {
            first = Some(handle);
            false
        })?;
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn library() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("search_results_20241022_214351")).unwrap();
        fs::write(temp.path().join("b.html"), "<title>B</title>").unwrap();
        fs::write(temp.path().join("a.html"), "<title>A</title>").unwrap();
        fs::write(temp.path().join("notes.txt"), "not a document").unwrap();
        fs::write(temp.path().join("page.html.bak"), "backup").unwrap();
        fs::write(
            temp.path().join("search_results_20241022_214351/c.html"),
            "<title>C</title>",
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_walk_filters_documents() {
        let temp = library();
        let scanner = DocumentScanner::new(temp.path(), "html");

        let mut names = Vec::new();
        let visited = scanner
            .walk(|document| {
                let name = document.path().file_name().unwrap().to_string_lossy();
                names.push(name.to_string());
                true
            })
            .unwrap();

        assert_eq!(visited, 3);
        assert_eq!(names, vec!["a.html", "b.html", "c.html"]);
    }

    #[test]
    fn test_walk_stops_when_visitor_declines() {
        let temp = library();
        let scanner = DocumentScanner::new(temp.path(), "html");

        let mut seen = 0;
        let visited = scanner
            .walk(|_| {
                seen += 1;
                seen < 2
            })
            .unwrap();

        assert_eq!(visited, 2);
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_first_document() {
        let temp = library();
        let scanner = DocumentScanner::new(temp.path(), "html");

        let first = scanner.first_document().unwrap().unwrap();
        assert!(first.path().ends_with("a.html"));

        let empty = TempDir::new().unwrap();
        let scanner = DocumentScanner::new(empty.path(), "html");
        assert!(scanner.first_document().unwrap().is_none());
    }

    #[test]
    fn test_missing_root_is_traversal_error() {
        let scanner = DocumentScanner::new("/nonexistent/articles", "html");
        let err = scanner.walk(|_| true).unwrap_err();
        assert!(matches!(err, SearchError::Traversal { .. }));
    }

    #[test]
    fn test_is_document() {
        let scanner = DocumentScanner::new("/srv", "html");
        assert!(scanner.is_document(Path::new("/srv/a.html")));
        assert!(!scanner.is_document(Path::new("/srv/a.htm")));
        assert!(!scanner.is_document(Path::new("/srv/a.html.bak")));
    }
}
