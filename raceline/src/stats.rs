use web_time::{Duration, Instant};

use crate::Accuracy;

/// Session timing and per-pass counters
///
/// Tracks when a session started, whether it has completed, and how many
/// comparison passes ended with a pending mistake. Owned by the comparator;
/// updated on every pass that had input to scan.
///
/// Nothing here is persisted: the figures live and die with the session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    started_at: Option<Instant>,
    completed_at: Option<Instant>,
    passes: usize,
    error_passes: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one comparison pass
    ///
    /// Starts the session clock on the first recorded pass.
    pub(crate) fn record_pass(&mut self, had_error: bool) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }

        self.passes += 1;

        if had_error {
            self.error_passes += 1;
        }
    }

    /// Mark the session as completed
    pub(crate) fn mark_completed(&mut self) {
        if self.completed_at.is_none() {
            self.completed_at = Some(Instant::now());
        }
    }

    /// Check if timing has started
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Check if the session has been completed
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Input passes recorded so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Input passes that ended with a pending mistake
    pub fn error_passes(&self) -> usize {
        self.error_passes
    }

    /// Time elapsed since the first pass
    ///
    /// Frozen at the completion time once the session completes. `None`
    /// before any pass has been recorded.
    pub fn elapsed(&self) -> Option<Duration> {
        let started_at = self.started_at?;

        Some(match self.completed_at {
            Some(completed_at) => completed_at.duration_since(started_at),
            None => started_at.elapsed(),
        })
    }

    /// Share of passes that ended clean, as a percentage
    ///
    /// `None` before any pass has been recorded.
    pub fn accuracy(&self) -> Option<Accuracy> {
        if self.passes == 0 {
            return None;
        }

        Some(Accuracy::calculate(
            self.passes - self.error_passes,
            self.passes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_stats_counters() {
        let mut stats = SessionStats::new();

        assert!(!stats.has_started());
        assert!(stats.elapsed().is_none());
        assert!(stats.accuracy().is_none());

        stats.record_pass(false);
        assert!(stats.has_started());
        assert_eq!(stats.passes(), 1);
        assert_eq!(stats.error_passes(), 0);
        assert!(stats.elapsed().is_some());

        stats.record_pass(true);
        stats.record_pass(true);
        stats.record_pass(false);
        assert_eq!(stats.passes(), 4);
        assert_eq!(stats.error_passes(), 2);
        assert_eq!(stats.accuracy().unwrap().0, 50.0);
    }

    #[test]
    fn test_elapsed_freezes_on_completion() {
        let mut stats = SessionStats::new();

        stats.record_pass(false);
        assert!(!stats.is_completed());

        stats.mark_completed();
        assert!(stats.is_completed());

        let first = stats.elapsed().unwrap();
        let second = stats.elapsed().unwrap();
        assert_eq!(first, second);

        // Completing again keeps the original completion time
        stats.mark_completed();
        assert_eq!(stats.elapsed().unwrap(), first);
    }

    #[test]
    fn test_perfect_accuracy() {
        let mut stats = SessionStats::new();

        stats.record_pass(false);
        stats.record_pass(false);

        assert_eq!(stats.accuracy().unwrap().0, 100.0);
    }
}
