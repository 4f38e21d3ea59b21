// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod related_file;
pub mod search_result;

pub use document::DocumentHandle;
pub use related_file::RelatedFile;
pub use search_result::SearchResult;
