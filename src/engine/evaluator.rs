// file: src/engine/evaluator.rs
// description: decides whether a single document belongs in a search result set
// reference: one evaluation unit per discovered document

use crate::extractor::SnippetExtractor;
use crate::library::TitlePathFormatter;
use crate::models::{DocumentHandle, SearchResult};
use tracing::debug;

pub struct DocumentEvaluator {
    formatter: TitlePathFormatter,
    extractor: SnippetExtractor,
}

impl DocumentEvaluator {
    pub fn new(formatter: TitlePathFormatter, extractor: SnippetExtractor) -> Self {
        Self {
            formatter,
            extractor,
        }
    }

    /// A title or path hit always includes the document, snippet or not.
    /// Otherwise inclusion rests on the document metadata alone.
    pub fn evaluate(&self, document: &DocumentHandle, query_lower: &str) -> Option<SearchResult> {
        let formatted = self.formatter.format(document.path());

        let name_hit = formatted.title.to_lowercase().contains(query_lower)
            || formatted.canonical_path.to_lowercase().contains(query_lower);

        let extracted = self.extractor.extract(document.path(), query_lower);

        if !name_hit && !extracted.matched {
            return None;
        }

        debug!(
            "Matched {} (by {})",
            formatted.canonical_path,
            if name_hit { "title/path" } else { "metadata" }
        );

        Some(SearchResult::new(
            formatted.title,
            formatted.canonical_path,
            extracted.snippet,
        ))
    }
}
