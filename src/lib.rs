// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod engine;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod library;
pub mod models;
pub mod utils;

pub use config::{Config, LibraryConfig, SearchConfig, ServerConfig};
pub use engine::{SearchEngine, SearchOutcome, SearchStats};
pub use error::{Result, SearchError};
pub use exporter::JsonExporter;
pub use extractor::{DocumentMetadata, DocumentMetadataReader, SnippetExtractor, SnippetMatch};
pub use library::{DocumentScanner, FormattedPath, TitlePathFormatter};
pub use models::{DocumentHandle, RelatedFile, SearchResult};
pub use utils::{HealthCheck, HealthReport, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let engine = SearchEngine::new(config);
        assert!(engine.is_ok());
    }
}
