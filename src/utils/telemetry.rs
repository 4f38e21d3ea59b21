// file: src/utils/telemetry.rs
// description: readiness checks for the document library and search timing
// reference: rendered by the `health` command, timer feeds SearchStats

use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// One readiness check against the document library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    pub component: &'static str,
    pub passed: bool,
    pub detail: String,
    pub elapsed: Duration,
}

impl HealthCheck {
    pub fn pass(component: &'static str, detail: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            component,
            passed: true,
            detail: detail.into(),
            elapsed,
        }
    }

    pub fn fail(component: &'static str, detail: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            component,
            passed: false,
            detail: detail.into(),
            elapsed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub checks: Vec<HealthCheck>,
    pub version: &'static str,
}

impl HealthReport {
    pub fn new(checks: Vec<HealthCheck>, version: &'static str) -> Self {
        Self { checks, version }
    }

    /// Ready only when at least one check ran and none failed.
    pub fn is_healthy(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|check| check.passed)
    }
}

fn mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} article_search {}: {}",
            mark(self.is_healthy()),
            self.version,
            if self.is_healthy() { "ready" } else { "not ready" }
        )?;

        for check in &self.checks {
            writeln!(
                f,
                "  {} {} ({}ms): {}",
                mark(check.passed),
                check.component,
                check.elapsed.as_millis(),
                check.detail
            )?;
        }

        Ok(())
    }
}

/// Wall-clock timer for a single search or probe.
pub struct OperationTimer {
    label: &'static str,
    started: Instant,
}

impl OperationTimer {
    pub fn start(label: &'static str) -> Self {
        debug!("{} started", label);
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn stop(self) -> Duration {
        let elapsed = self.started.elapsed();
        debug!("{} finished in {:?}", self.label, elapsed);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_ready_when_every_check_passes() {
        let report = HealthReport::new(
            vec![
                HealthCheck::pass("root_directory", "/srv/articles", Duration::from_millis(1)),
                HealthCheck::pass("documents", "first document: a.html", Duration::ZERO),
            ],
            "0.1.0",
        );

        assert!(report.is_healthy());
        let rendered = report.to_string();
        assert!(rendered.starts_with("✓ article_search 0.1.0: ready"));
        assert!(rendered.contains("documents (0ms): first document: a.html"));
    }

    #[test]
    fn test_one_failed_check_fails_the_report() {
        let report = HealthReport::new(
            vec![
                HealthCheck::pass("root_directory", "/srv/articles", Duration::ZERO),
                HealthCheck::fail("documents", "No documents found", Duration::ZERO),
            ],
            "0.1.0",
        );

        assert!(!report.is_healthy());
        assert!(report.to_string().contains("✗ documents"));
    }

    #[test]
    fn test_empty_report_is_not_ready() {
        assert!(!HealthReport::new(Vec::new(), "0.1.0").is_healthy());
    }

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::start("search");
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.stop() >= Duration::from_millis(10));
    }
}
