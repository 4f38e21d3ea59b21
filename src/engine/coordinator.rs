// file: src/engine/coordinator.rs
// description: coordinates the directory walk, concurrent evaluation, and result collection
// reference: bounded fan-out over blocking file reads with a single collecting consumer

use crate::config::Config;
use crate::engine::evaluator::DocumentEvaluator;
use crate::engine::related::RelatedFinder;
use crate::engine::stats::SearchStats;
use crate::error::{Result, SearchError};
use crate::extractor::{DocumentMetadataReader, SnippetExtractor};
use crate::library::{DocumentScanner, TitlePathFormatter};
use crate::models::{DocumentHandle, RelatedFile, SearchResult};
use crate::utils::{HealthCheck, HealthReport, OperationTimer, Validator};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Results of one search. When the walk aborted, `results` holds whatever
/// the already dispatched documents produced and `error` says why.
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub error: Option<SearchError>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn rejected(error: SearchError) -> Self {
        Self {
            results: Vec::new(),
            error: Some(error),
            stats: SearchStats::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<SearchResult>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.results),
        }
    }
}

pub struct SearchEngine {
    config: Config,
    scanner: DocumentScanner,
    evaluator: Arc<DocumentEvaluator>,
    related: Arc<RelatedFinder>,
}

impl SearchEngine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let root = &config.library.root_dir;
        let extension = &config.library.extension;
        let scanner = DocumentScanner::new(root, extension);
        let formatter = TitlePathFormatter::new(root, extension);

        let extractor = SnippetExtractor::new(
            DocumentMetadataReader::new(config.search.max_read_bytes),
            config.search.snippet_max_chars,
        );
        let evaluator = Arc::new(DocumentEvaluator::new(formatter.clone(), extractor));

        let related = Arc::new(RelatedFinder::new(
            scanner.clone(),
            formatter,
            config.search.related_limit,
            config.search.placeholder_image.clone(),
        ));

        Ok(Self {
            config,
            scanner,
            evaluator,
            related,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Case-insensitive search over every document under the root. Result
    /// order is unspecified.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        if let Err(e) = Validator::validate_query(query) {
            return SearchOutcome::rejected(e);
        }

        info!(
            "Searching {} for {:?}",
            self.scanner.root().display(),
            query
        );
        let timer = OperationTimer::start("search");
        let query_lower: Arc<str> = Arc::from(query.to_lowercase());
        let workers = self.config.search.max_concurrent_tasks;

        let (tx, mut rx) = mpsc::channel::<DocumentHandle>(workers);
        let scanner = self.scanner.clone();
        let walker = tokio::task::spawn_blocking(move || {
            scanner.walk(|document| tx.blocking_send(document).is_ok())
        });

        let evaluations = stream::poll_fn(|cx| rx.poll_recv(cx))
            .map(|document| {
                let evaluator = Arc::clone(&self.evaluator);
                let query_lower = Arc::clone(&query_lower);
                tokio::task::spawn_blocking(move || evaluator.evaluate(&document, &query_lower))
            })
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        let mut stats = SearchStats::new();
        let mut results = Vec::new();

        for evaluation in evaluations {
            match evaluation {
                Ok(Some(result)) => {
                    stats.record_evaluation(true);
                    results.push(result);
                }
                Ok(None) => stats.record_evaluation(false),
                Err(e) => {
                    stats.record_failure();
                    error!("Document evaluation task failed: {}", e);
                }
            }
        }

        let error = match walker.await {
            Ok(Ok(walked)) => {
                debug!("Walk dispatched {} documents", walked);
                None
            }
            Ok(Err(e)) => {
                error!("Search aborted, returning partial results: {}", e);
                Some(e)
            }
            Err(e) => Some(SearchError::Task(format!("directory walk failed: {}", e))),
        };

        stats.finish(timer.stop());

        info!(
            "Search for {:?} matched {} of {} documents ({:.1}%) in {}ms ({:.2} docs/sec)",
            query,
            stats.documents_matched,
            stats.documents_evaluated,
            stats.match_rate(),
            stats.duration_ms,
            stats.documents_per_second()
        );

        SearchOutcome {
            results,
            error,
            stats,
        }
    }

    pub async fn related(&self, title: &str) -> Vec<RelatedFile> {
        let finder = Arc::clone(&self.related);
        let title = title.to_string();

        match tokio::task::spawn_blocking(move || finder.find(&title)).await {
            Ok(related) => related,
            Err(e) => {
                error!("Related lookup task failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Fails when the root is missing or holds no documents at all.
    pub async fn health(&self) -> HealthReport {
        let scanner = self.scanner.clone();
        let checks = tokio::task::spawn_blocking(move || health_checks(&scanner))
            .await
            .unwrap_or_else(|e| {
                vec![HealthCheck::fail(
                    "health_probe",
                    e.to_string(),
                    Duration::ZERO,
                )]
            });

        HealthReport::new(checks, env!("CARGO_PKG_VERSION"))
    }
}

fn health_checks(scanner: &DocumentScanner) -> Vec<HealthCheck> {
    let root = scanner.root();

    let timer = OperationTimer::start("root directory check");
    let root_check = match Validator::validate_directory(root) {
        Ok(()) => HealthCheck::pass("root_directory", root.display().to_string(), timer.stop()),
        Err(e) => return vec![HealthCheck::fail("root_directory", e.to_string(), timer.stop())],
    };

    let timer = OperationTimer::start("document check");
    let documents_check = match scanner.first_document() {
        Ok(Some(document)) => HealthCheck::pass(
            "documents",
            format!("Found example document: {}", document.path().display()),
            timer.stop(),
        ),
        Ok(None) => HealthCheck::fail(
            "documents",
            format!("No documents found in {}", root.display()),
            timer.stop(),
        ),
        Err(e) => HealthCheck::fail("documents", e.to_string(), timer.stop()),
    };

    vec![root_check, documents_check]
}
