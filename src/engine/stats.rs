// file: src/engine/stats.rs
// description: per-search statistics reported alongside the result set
// reference: tracks evaluation counts and wall-clock duration

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub documents_evaluated: usize,
    pub documents_matched: usize,
    pub evaluation_failures: usize,
    pub duration_ms: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_evaluation(&mut self, matched: bool) {
        self.documents_evaluated += 1;
        if matched {
            self.documents_matched += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.evaluation_failures += 1;
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.duration_ms = elapsed.as_millis() as u64;
    }

    pub fn documents_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.documents_evaluated as f64 / (self.duration_ms as f64 / 1000.0)
    }

    pub fn match_rate(&self) -> f64 {
        if self.documents_evaluated == 0 {
            return 0.0;
        }
        (self.documents_matched as f64 / self.documents_evaluated as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_stats_calculations() {
        let mut stats = SearchStats::new();
        for i in 0..10 {
            stats.record_evaluation(i % 5 == 0);
        }
        stats.finish(Duration::from_millis(500));

        assert_eq!(stats.documents_evaluated, 10);
        assert_eq!(stats.documents_matched, 2);
        assert_eq!(stats.documents_per_second(), 20.0);
        assert!((stats.match_rate() - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_search_stats_zero_duration() {
        let stats = SearchStats::new();
        assert_eq!(stats.documents_per_second(), 0.0);
        assert_eq!(stats.match_rate(), 0.0);
    }

    #[test]
    fn test_search_stats_failures() {
        let mut stats = SearchStats::new();
        stats.record_failure();
        stats.record_failure();
        assert_eq!(stats.evaluation_failures, 2);
        assert_eq!(stats.documents_evaluated, 0);
    }
}
