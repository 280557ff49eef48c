//! Per-run bookkeeping of what happened to each term record.

use std::fmt::Display;

/// Summary of one formatter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records written to the output.
    pub processed: usize,
    /// Records whose term matched the exclusion pattern.
    pub excluded: usize,
    /// Terms of records skipped for a missing term or definition, in first-seen order.
    pub invalid: Vec<String>,
}

impl RunStats {
    /// Number of records accounted for by any counter.
    pub fn total(&self) -> usize {
        self.processed + self.excluded + self.invalid.len()
    }

    /// Logs the summary the way the CLI reports it after each run.
    pub fn log(&self) {
        tracing::info!(
            processed = self.processed,
            excluded = self.excluded,
            invalid = self.invalid.len(),
            "{}",
            self
        );
        if !self.invalid.is_empty() {
            tracing::warn!(terms = ?self.invalid, "skipped terms without a definition");
        }
    }
}

impl Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} terms processed, {} excluded, {} invalid",
            self.processed,
            self.excluded,
            self.invalid.len()
        )
    }
}

/// Accumulates [`RunStats`] during a single pass over the records.
#[derive(Debug, Default)]
pub struct StatsCollector {
    stats: RunStats,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_invalid(&mut self, term: &str) {
        tracing::debug!(term, "skipping incomplete term");
        self.stats.invalid.push(term.to_string());
    }

    pub fn record_excluded(&mut self) {
        self.stats.excluded += 1;
    }

    pub fn record_processed(&mut self) {
        self.stats.processed += 1;
    }

    pub fn snapshot(&self) -> &RunStats {
        &self.stats
    }

    pub fn finish(self) -> RunStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_counts() {
        let mut collector = StatsCollector::new();
        collector.record_processed();
        collector.record_processed();
        collector.record_excluded();
        collector.record_invalid("missing_one");
        collector.record_invalid("");

        assert_eq!(collector.snapshot().processed, 2);
        let stats = collector.finish();
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.invalid, vec!["missing_one".to_string(), String::new()]);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_display() {
        let stats = RunStats {
            processed: 3,
            excluded: 1,
            invalid: vec!["a".to_string()],
        };
        assert_eq!(stats.to_string(), "3 terms processed, 1 excluded, 1 invalid");
    }
}
