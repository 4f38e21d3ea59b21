// file: src/engine/related.rs
// description: related-article suggestions for a given title
// reference: first documents in traversal order, no relevance ranking

use crate::library::{DocumentScanner, TitlePathFormatter};
use crate::models::RelatedFile;
use tracing::{debug, warn};

pub struct RelatedFinder {
    scanner: DocumentScanner,
    formatter: TitlePathFormatter,
    limit: usize,
    placeholder_image: String,
}

impl RelatedFinder {
    pub fn new(
        scanner: DocumentScanner,
        formatter: TitlePathFormatter,
        limit: usize,
        placeholder_image: impl Into<String>,
    ) -> Self {
        Self {
            scanner,
            formatter,
            limit,
            placeholder_image: placeholder_image.into(),
        }
    }

    /// `title` does not influence the selection yet; the first `limit`
    /// documents in walk order are returned. Walk errors keep whatever was
    /// collected before them.
    pub fn find(&self, title: &str) -> Vec<RelatedFile> {
        debug!("Looking up related documents for {:?}", title);

        let mut related = Vec::with_capacity(self.limit);
        let walked = self.scanner.walk(|document| {
            related.push(RelatedFile::new(
                self.placeholder_image.clone(),
                self.formatter.canonical_path(document.path()),
            ));
            related.len() < self.limit
        });

        if let Err(e) = walked {
            warn!("Related lookup walk failed: {}", e);
        }

        related
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn finder(root: &std::path::Path, limit: usize) -> RelatedFinder {
        RelatedFinder::new(
            DocumentScanner::new(root, "html"),
            TitlePathFormatter::new(root, "html"),
            limit,
            "/placeholder.jpg",
        )
    }

    #[test]
    fn test_related_is_capped() {
        let temp = TempDir::new().unwrap();
        for i in 0..8 {
            fs::write(temp.path().join(format!("article_{}.html", i)), "<p>x</p>").unwrap();
        }

        let related = finder(temp.path(), 5).find("anything");

        assert_eq!(related.len(), 5);
        assert_eq!(related[0].path, "article_0");
        for entry in &related {
            assert_eq!(entry.image, "/placeholder.jpg");
            assert!(!entry.path.is_empty());
        }
    }

    #[test]
    fn test_related_ignores_title() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("search_results_20241022_214351")).unwrap();
        fs::write(
            temp.path().join("search_results_20241022_214351/deep_sea.html"),
            "",
        )
        .unwrap();
        fs::write(temp.path().join("rainforest.html"), "").unwrap();

        let finder = finder(temp.path(), 5);
        let paths: Vec<String> = finder.find("Deep Sea").into_iter().map(|r| r.path).collect();

        assert_eq!(paths, vec!["rainforest", "deep_sea"]);
        assert_eq!(
            finder.find("unrelated"),
            finder.find("Deep Sea")
        );
    }

    #[test]
    fn test_related_missing_root_is_empty() {
        let related = finder(std::path::Path::new("/nonexistent/articles"), 5).find("x");
        assert!(related.is_empty());
    }
}
