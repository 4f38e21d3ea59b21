// file: src/extractor/mod.rs
// description: metadata extraction module exports
// reference: internal module structure

pub mod metadata;
pub mod patterns;
pub mod snippet;

pub use metadata::{DocumentMetadata, DocumentMetadataReader};
pub use snippet::{METADATA_FALLBACK, SnippetExtractor, SnippetMatch};
