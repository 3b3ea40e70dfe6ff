//! The discrete-time simulation engine.
//!
//! # Algorithm
//!
//! 1. Validate the request; nothing runs on invalid input.
//! 2. Admit processes into the ready set as the clock reaches their arrival.
//! 3. Run the selected process for a policy-determined slice, recording the
//!    interval on the timeline.
//! 4. When no process is ready, jump the clock straight to the next arrival.
//! 5. Repeat until every process has consumed its full burst, then derive
//!    the KPIs from the timeline.
//!
//! Ranked policies (everything except Round-Robin) keep the ready set in a
//! binary min-heap keyed `(rank, original index)`, giving `O(log n)` per
//! scheduling decision with the index as the universal tie-break. Keys are
//! stable while a process waits (only the running process's remaining time
//! changes, and it re-enters the heap with a fresh key), so no decrease-key
//! is ever needed.
//!
//! Preemptive policies nominally re-evaluate after every tick. A waiting
//! process's rank cannot change between arrivals, and the running process's
//! rank only improves (SRT) or stays constant (priority), so the engine runs
//! each selected process until `min(remaining, next arrival)` and produces a
//! tick-identical timeline in `O(n log n)` total decisions.
//!
//! Round-Robin instead keeps a FIFO queue: each turn lasts
//! `min(quantum, remaining)`, and processes arriving during the turn enter
//! the queue before the preempted process returns to it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::dispatching::{Policy, ReadyContext, SelectionRule};
use crate::models::{Process, Timeline};
use crate::validation::{validate_request, ValidationError};

use super::kpi::SimulationKpi;

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in caller order. The position of each process
    /// in this list is its tie-break index for the whole run.
    pub processes: Vec<Process>,
    /// Scheduling policy to execute.
    pub policy: Policy,
    /// Round-Robin quantum (ticks); ignored by every other policy.
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<Process>, policy: Policy) -> Self {
        Self {
            processes,
            policy,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The execution timeline (Gantt chart data).
    pub timeline: Timeline,
    /// Per-process metrics and batch aggregates.
    pub kpi: SimulationKpi,
}

/// Runs one complete schedule.
///
/// Pure and synchronous: the whole schedule is computed before returning,
/// the inputs are never mutated, and independent requests may run
/// concurrently. Invalid requests are rejected up front with every detected
/// problem and no partial result.
///
/// # Example
///
/// ```
/// use schedsim::dispatching::Policy;
/// use schedsim::models::Process;
/// use schedsim::simulator::{simulate, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)],
///     Policy::Fcfs,
/// );
/// let result = simulate(&request).unwrap();
/// assert_eq!(result.timeline.makespan(), 8);
/// assert_eq!(result.kpi.per_process["P2"].waiting_time, 4);
/// ```
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_request(request)?;

    let timeline = match request.policy.selection_rule() {
        Some(rule) => run_ranked(&request.processes, rule, request.policy.is_preemptive()),
        // Validation guarantees Round-Robin carries a quantum ≥ 1.
        None => run_round_robin(&request.processes, request.quantum.unwrap_or(1)),
    };
    let kpi = SimulationKpi::calculate(&timeline, &request.processes);

    Ok(SimulationResult { timeline, kpi })
}

/// Process indices ordered by (arrival, original index): the admission order
/// shared by every policy.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].arrival_time, i));
    order
}

/// Shared loop for the five rule-ranked policies.
fn run_ranked(processes: &[Process], rule: &dyn SelectionRule, preemptive: bool) -> Timeline {
    let n = processes.len();
    let order = arrival_order(processes);
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut ready: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::with_capacity(n);
    let mut timeline = Timeline::new();
    let mut cursor = 0;
    let mut now: i64 = 0;
    let mut completed = 0;

    while completed < n {
        while cursor < n && processes[order[cursor]].arrival_time <= now {
            let idx = order[cursor];
            let ctx = ReadyContext::new(now, &remaining);
            ready.push(Reverse((rule.rank(idx, &processes[idx], &ctx), idx)));
            cursor += 1;
        }

        let Some(Reverse((_, idx))) = ready.pop() else {
            // Nothing ready: jump the clock to the next arrival.
            now = processes[order[cursor]].arrival_time;
            continue;
        };

        // Non-preemptive slices run to completion. Preemptive slices stop at
        // the next arrival, the only point where the selection can change.
        let slice = if preemptive {
            match order.get(cursor) {
                Some(&next) => remaining[idx].min(processes[next].arrival_time - now),
                None => remaining[idx],
            }
        } else {
            remaining[idx]
        };

        timeline.record(&processes[idx].id, now, now + slice);
        now += slice;
        remaining[idx] -= slice;

        if remaining[idx] == 0 {
            completed += 1;
        } else {
            let ctx = ReadyContext::new(now, &remaining);
            ready.push(Reverse((rule.rank(idx, &processes[idx], &ctx), idx)));
        }
    }

    timeline
}

/// Round-Robin: FIFO queue, fixed quantum per turn.
fn run_round_robin(processes: &[Process], quantum: i64) -> Timeline {
    let n = processes.len();
    let order = arrival_order(processes);
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut timeline = Timeline::new();
    let mut cursor = 0;
    let mut now: i64 = 0;
    let mut completed = 0;

    while completed < n {
        while cursor < n && processes[order[cursor]].arrival_time <= now {
            queue.push_back(order[cursor]);
            cursor += 1;
        }

        let Some(idx) = queue.pop_front() else {
            now = processes[order[cursor]].arrival_time;
            continue;
        };

        let slice = quantum.min(remaining[idx]);
        timeline.record(&processes[idx].id, now, now + slice);
        now += slice;
        remaining[idx] -= slice;

        // Processes that arrived during the slice join the queue before the
        // preempted process returns to it.
        while cursor < n && processes[order[cursor]].arrival_time <= now {
            queue.push_back(order[cursor]);
            cursor += 1;
        }

        if remaining[idx] == 0 {
            completed += 1;
        } else {
            queue.push_back(idx);
        }
    }

    timeline
}
