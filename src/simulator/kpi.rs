//! Simulation quality metrics (KPIs).
//!
//! Derives per-process timing metrics and batch aggregates from a completed
//! timeline and its input processes. Results are built fresh on every call;
//! inputs are never written to.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | End of the process's last segment |
//! | Turnaround time | completion − arrival |
//! | Waiting time | turnaround − burst |
//! | Makespan | Latest completion time |
//! | CPU utilization | busy time / makespan |
//!
//! Averages are exact `f64` means; display rounding is the caller's concern.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Timing metrics for one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Tick at which the process's last segment ends.
    pub completion_time: i64,
    /// Completion − arrival.
    pub turnaround_time: i64,
    /// Turnaround − burst; ticks spent ready but not running.
    pub waiting_time: i64,
}

/// Batch-level simulation metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Tick at which the last process finishes.
    pub makespan: i64,
    /// Mean waiting time across the batch.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across the batch.
    pub avg_turnaround_time: f64,
    /// Fraction of `[0, makespan)` the CPU spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Per-process metrics, keyed by process id.
    pub per_process: HashMap<String, ProcessMetrics>,
}

impl SimulationKpi {
    /// Computes KPIs from a timeline and its input processes.
    ///
    /// Completion times are read from the timeline; a process without
    /// segments (possible only when called outside the engine) is skipped
    /// and excluded from the averages.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Self {
        let mut per_process = HashMap::with_capacity(processes.len());
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut counted: usize = 0;

        for process in processes {
            if let Some(completion_time) = timeline.completion_time(&process.id) {
                let turnaround_time = completion_time - process.arrival_time;
                let waiting_time = turnaround_time - process.burst_time;
                total_waiting += waiting_time;
                total_turnaround += turnaround_time;
                counted += 1;
                per_process.insert(
                    process.id.clone(),
                    ProcessMetrics {
                        completion_time,
                        turnaround_time,
                        waiting_time,
                    },
                );
            }
        }

        let makespan = timeline.makespan();
        let cpu_utilization = if makespan > 0 {
            timeline.busy_time() as f64 / makespan as f64
        } else {
            0.0
        };
        let (avg_waiting_time, avg_turnaround_time) = if counted == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / counted as f64,
                total_turnaround as f64 / counted as f64,
            )
        };

        Self {
            makespan,
            avg_waiting_time,
            avg_turnaround_time,
            cpu_utilization,
            per_process,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    fn fcfs_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record("P1", 0, 5);
        t.record("P2", 5, 8);
        t.record("P3", 8, 16);
        t
    }

    #[test]
    fn test_per_process_metrics() {
        let kpi = SimulationKpi::calculate(&fcfs_timeline(), &make_processes());
        assert_eq!(kpi.per_process["P1"].waiting_time, 0);
        assert_eq!(kpi.per_process["P1"].turnaround_time, 5);
        assert_eq!(kpi.per_process["P2"].waiting_time, 4);
        assert_eq!(kpi.per_process["P2"].turnaround_time, 7);
        assert_eq!(kpi.per_process["P3"].waiting_time, 6);
        assert_eq!(kpi.per_process["P3"].turnaround_time, 14);
        assert_eq!(kpi.per_process["P3"].completion_time, 16);
    }

    #[test]
    fn test_averages() {
        let kpi = SimulationKpi::calculate(&fcfs_timeline(), &make_processes());
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_makespan_and_utilization() {
        let kpi = SimulationKpi::calculate(&fcfs_timeline(), &make_processes());
        assert_eq!(kpi.makespan, 16);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_with_idle() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 2)];
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P2", 6, 8);
        let kpi = SimulationKpi::calculate(&t, &processes);
        // Busy 4 of 8 ticks.
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_from_late_start() {
        // Arrives at 3, runs [7, 10): waited 4, turnaround 7.
        let processes = vec![Process::new("P1", 3, 3)];
        let mut t = Timeline::new();
        t.record("P1", 7, 10);
        let kpi = SimulationKpi::calculate(&t, &processes);
        assert_eq!(kpi.per_process["P1"].waiting_time, 4);
        assert_eq!(kpi.per_process["P1"].turnaround_time, 7);
    }

    #[test]
    fn test_process_without_segments_skipped() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("ghost", 0, 2)];
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        let kpi = SimulationKpi::calculate(&t, &processes);
        assert_eq!(kpi.per_process.len(), 1);
        assert!(!kpi.per_process.contains_key("ghost"));
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let kpi = SimulationKpi::calculate(&Timeline::new(), &[]);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!(kpi.per_process.is_empty());
    }
}
