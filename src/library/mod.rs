// file: src/library/mod.rs
// description: Document library operations module exports
// reference: Internal module structure

pub mod formatter;
pub mod scanner;

pub use formatter::{FormattedPath, TitlePathFormatter, format_title};
pub use scanner::DocumentScanner;
