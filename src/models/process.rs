//! Process (workload unit) model.
//!
//! A process is the unit of work submitted to the simulator: it becomes
//! runnable at its arrival time and needs `burst_time` ticks of CPU to
//! finish. The descriptor is immutable: the engine keeps its own mutable
//! remaining-time bookkeeping per run and writes results into a fresh
//! [`SimulationKpi`](crate::simulator::SimulationKpi), never back into the
//! input.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Priority
/// `priority` is consulted only by the priority policies; the convention is
/// **lower value = higher priority**. It defaults to 0, both in
/// [`Process::new`] and when deserializing input that omits the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run (≥ 0).
    pub arrival_time: i64,
    /// Total CPU ticks the process requires (≥ 1).
    pub burst_time: i64,
    /// Scheduling priority (lower = higher priority).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process with default (0) priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new("P1", 0, 1).priority, 0);
    }

    #[test]
    fn test_deserialize_omitted_priority() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P1","arrival_time":0,"burst_time":5}"#).unwrap();
        assert_eq!(p.priority, 0);
        assert_eq!(p.burst_time, 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Process::new("P9", 4, 2).with_priority(-1);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
