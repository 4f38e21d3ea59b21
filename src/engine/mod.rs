// file: src/engine/mod.rs
// description: search engine module exports and public api
// reference: search coordination

mod coordinator;
mod evaluator;
mod related;
mod stats;

pub use coordinator::{SearchEngine, SearchOutcome};
pub use evaluator::DocumentEvaluator;
pub use related::RelatedFinder;
pub use stats::SearchStats;
