//! Execution timeline model.
//!
//! The timeline is the Gantt-chart view of a run: an ordered, non-overlapping
//! sequence of segments recording which process held the CPU over which
//! interval. Preemptive and Round-Robin policies execute in short slices;
//! [`Timeline::record`] coalesces contiguous slices of the same process as
//! they are emitted, so the stored segments are always maximal.
//!
//! # Invariants
//! - Segments are ordered by start tick and never overlap.
//! - No segment is zero-length.
//! - Adjacent segments never share a process id.
//! - Per process, segment durations sum to its burst time (work conservation).

use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU time given to a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the interval (inclusive).
    pub start: i64,
    /// End of the interval (exclusive); always greater than `start`.
    pub end: i64,
}

impl TimelineSegment {
    /// Creates a segment.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Number of ticks covered (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An ordered execution trace for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one executed slice.
    ///
    /// A slice contiguous with the previous segment of the same process is
    /// merged into it; zero-length slices are dropped. Slices must be
    /// appended in clock order.
    pub fn record(&mut self, process_id: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.segments.last().map_or(true, |s| s.end <= start),
            "slices must be recorded in clock order"
        );
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(TimelineSegment::new(process_id, start, end));
    }

    /// The recorded segments, in start order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Makespan: the tick at which the last segment ends.
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// All segments belonging to one process.
    pub fn segments_for(&self, process_id: &str) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Tick at which the given process's last segment ends.
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.end)
            .max()
    }

    /// Total ticks spent executing any process.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total ticks in `[0, makespan)` during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline {
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P2", 2, 4);
        t.record("P1", 4, 6);
        t
    }

    #[test]
    fn test_record_and_order() {
        let t = sample();
        assert_eq!(t.segment_count(), 3);
        assert_eq!(t.segments()[0], TimelineSegment::new("P1", 0, 2));
        assert_eq!(t.segments()[1], TimelineSegment::new("P2", 2, 4));
    }

    #[test]
    fn test_contiguous_same_process_merges() {
        let mut t = Timeline::new();
        t.record("P1", 0, 1);
        t.record("P1", 1, 2);
        t.record("P1", 2, 5);
        assert_eq!(t.segment_count(), 1);
        assert_eq!(t.segments()[0], TimelineSegment::new("P1", 0, 5));
    }

    #[test]
    fn test_gap_prevents_merge() {
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P1", 5, 6);
        assert_eq!(t.segment_count(), 2);
    }

    #[test]
    fn test_different_process_not_merged() {
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P2", 2, 4);
        assert_eq!(t.segment_count(), 2);
    }

    #[test]
    fn test_zero_length_dropped() {
        let mut t = Timeline::new();
        t.record("P1", 3, 3);
        assert!(t.is_empty());
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let t = sample();
        assert_eq!(t.makespan(), 6);
        assert_eq!(t.busy_time(), 6);
        assert_eq!(t.idle_time(), 0);
    }

    #[test]
    fn test_idle_time_counts_gaps() {
        let mut t = Timeline::new();
        t.record("P1", 2, 4); // idle [0,2)
        t.record("P2", 7, 9); // idle [4,7)
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.busy_time(), 4);
        assert_eq!(t.idle_time(), 5);
    }

    #[test]
    fn test_completion_time() {
        let t = sample();
        assert_eq!(t.completion_time("P1"), Some(6));
        assert_eq!(t.completion_time("P2"), Some(4));
        assert_eq!(t.completion_time("P9"), None);
    }

    #[test]
    fn test_segments_for() {
        let t = sample();
        assert_eq!(t.segments_for("P1").len(), 2);
        assert_eq!(t.segments_for("P2").len(), 1);
        assert!(t.segments_for("P9").is_empty());
    }

    #[test]
    fn test_duration() {
        assert_eq!(TimelineSegment::new("P1", 3, 8).duration(), 5);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.segment_count(), 0);
    }
}
