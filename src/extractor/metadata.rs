// file: src/extractor/metadata.rs
// description: bounded prefix reads and metadata extraction from html documents
// reference: metadata lives near the top of each article, so only a prefix is inspected

use crate::error::{Result, SearchError};
use crate::extractor::patterns::{HEAD, META_DESCRIPTION, PARAGRAPH, TITLE, strip_tags};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct DocumentMetadataReader {
    max_bytes: usize,
}

/// Metadata found in a document prefix. Missing elements are `None`,
/// which is an ordinary negative result rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw markup between `<head>` and `</head>`
    pub head: Option<String>,
    /// Text of the first paragraph with markup stripped
    pub first_paragraph: Option<String>,
}

impl DocumentMetadataReader {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Reads at most `max_bytes` from the start of the file. A multi-byte
    /// character cut at the boundary is replaced rather than rejected.
    pub fn read_prefix(&self, path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let mut buffer = Vec::with_capacity(self.max_bytes);
        file.take(self.max_bytes as u64)
            .read_to_end(&mut buffer)
            .map_err(|source| SearchError::FileOperation {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn read(&self, path: &Path) -> Result<DocumentMetadata> {
        let content = self.read_prefix(path)?;
        Ok(DocumentMetadata::parse(&content))
    }
}

impl DocumentMetadata {
    pub fn parse(content: &str) -> Self {
        Self {
            title: first_capture(&TITLE, content),
            description: first_capture(&META_DESCRIPTION, content),
            head: first_capture(&HEAD, content),
            first_paragraph: first_capture(&PARAGRAPH, content).map(|p| strip_tags(&p)),
        }
    }
}

fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Defining Post-Normal Science</title>
<meta name="description" content="Science under uncertainty">
</head>
<body>
<p>Post-normal science applies <em>when stakes are high</em>.</p>
<p>Second paragraph.</p>
</body>
</html>"#;

    #[test]
    fn test_parse_full_document() {
        let metadata = DocumentMetadata::parse(ARTICLE);

        assert_eq!(metadata.title.as_deref(), Some("Defining Post-Normal Science"));
        assert_eq!(metadata.description.as_deref(), Some("Science under uncertainty"));
        assert!(metadata.head.unwrap().contains("<title>"));
        assert_eq!(
            metadata.first_paragraph.as_deref(),
            Some("Post-normal science applies when stakes are high.")
        );
    }

    #[test]
    fn test_parse_malformed_document() {
        let metadata = DocumentMetadata::parse("<html><title>Unclosed<body>text");
        assert_eq!(metadata, DocumentMetadata::default());
    }

    #[test]
    fn test_read_prefix_is_bounded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("large.html");
        fs::write(&path, "a".repeat(20_000)).unwrap();

        let reader = DocumentMetadataReader::new(8192);
        let prefix = reader.read_prefix(&path).unwrap();
        assert_eq!(prefix.len(), 8192);
    }

    #[test]
    fn test_metadata_past_ceiling_is_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep.html");
        let content = format!("{}<title>Too deep</title>", " ".repeat(8192));
        fs::write(&path, content).unwrap();

        let reader = DocumentMetadataReader::new(8192);
        let metadata = reader.read(&path).unwrap();
        assert_eq!(metadata.title, None);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let reader = DocumentMetadataReader::new(8192);
        let err = reader.read(Path::new("/nonexistent/page.html")).unwrap_err();
        assert!(matches!(err, SearchError::FileOperation { .. }));
    }
}
