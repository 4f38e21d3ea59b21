// file: src/extractor/snippet.rs
// description: match decision and snippet synthesis from document metadata
// reference: title and description first, then a head-region fallback

use crate::extractor::metadata::{DocumentMetadata, DocumentMetadataReader};
use crate::utils::Validator;
use std::path::Path;
use tracing::warn;

pub const METADATA_FALLBACK: &str = "Found in document metadata";

const SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetMatch {
    pub snippet: Option<String>,
    pub matched: bool,
}

impl SnippetMatch {
    pub fn none() -> Self {
        Self::default()
    }
}

pub struct SnippetExtractor {
    reader: DocumentMetadataReader,
    max_chars: usize,
}

impl SnippetExtractor {
    pub fn new(reader: DocumentMetadataReader, max_chars: usize) -> Self {
        Self { reader, max_chars }
    }

    /// `query_lower` must already be lowercased. Unreadable documents count
    /// as a miss.
    pub fn extract(&self, path: &Path, query_lower: &str) -> SnippetMatch {
        match self.reader.read(path) {
            Ok(metadata) => self.extract_from_metadata(metadata, query_lower),
            Err(e) => {
                warn!("Skipping metadata for {}: {}", path.display(), e);
                SnippetMatch::none()
            }
        }
    }

    pub fn extract_from_content(&self, content: &str, query_lower: &str) -> SnippetMatch {
        self.extract_from_metadata(DocumentMetadata::parse(content), query_lower)
    }

    fn extract_from_metadata(
        &self,
        metadata: DocumentMetadata,
        query_lower: &str,
    ) -> SnippetMatch {
        let title = matching(metadata.title.as_deref(), query_lower);
        let description = matching(metadata.description.as_deref(), query_lower);

        if title.is_some() || description.is_some() {
            let joined = [title, description]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(SEPARATOR);

            let snippet = if joined.is_empty() {
                metadata.first_paragraph.unwrap_or_default()
            } else {
                joined
            };

            return self.matched(snippet);
        }

        if let Some(head) = metadata.head.as_deref()
            && head.to_lowercase().contains(query_lower)
        {
            let snippet = metadata
                .first_paragraph
                .unwrap_or_else(|| METADATA_FALLBACK.to_string());
            return self.matched(snippet);
        }

        SnippetMatch::none()
    }

    fn matched(&self, snippet: String) -> SnippetMatch {
        let snippet = Validator::truncate_text(&snippet, self.max_chars);
        SnippetMatch {
            snippet: (!snippet.is_empty()).then_some(snippet),
            matched: true,
        }
    }
}

fn matching<'a>(text: Option<&'a str>, query_lower: &str) -> Option<&'a str> {
    text.filter(|t| !t.is_empty() && t.to_lowercase().contains(query_lower))
}
