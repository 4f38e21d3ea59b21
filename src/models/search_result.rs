// file: src/models/search_result.rs
// description: Search result model returned to the transport layer
// reference: serialized as the JSON records consumed by the article front end

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title derived from the relative path
    pub title: String,

    /// Root-relative path, extension and date-stamped prefix removed
    pub path: String,

    /// Excerpt explaining the match, when one could be extracted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl SearchResult {
    pub fn new(title: String, path: String, snippet: Option<String>) -> Self {
        Self {
            title,
            path,
            snippet: snippet.filter(|s| !s.is_empty()),
        }
    }

    /// Format as a summary string for display
    pub fn format_summary(&self) -> String {
        match &self.snippet {
            Some(snippet) => format!("{} ({})\n{}\n", self.title, self.path, snippet),
            None => format!("{} ({})\n", self.title, self.path),
        }
    }
}
