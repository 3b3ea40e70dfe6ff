//! Built-in selection rules.
//!
//! One rule per ranking field the policies need: arrival time, total burst,
//! remaining burst, and priority value.
//!
//! # Rank Convention
//! All rules return lower ranks for processes that should run first. Equal
//! ranks are resolved by the engine using the original input index.

use super::{RankScore, ReadyContext, SelectionRule};
use crate::models::Process;

/// Earliest arrival first (FCFS).
///
/// Once a process starts under FCFS the ready set never offers a better
/// candidate, so ranking by arrival and running to completion reproduces
/// the classic queue behavior.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn rank(&self, _index: usize, process: &Process, _ctx: &ReadyContext) -> RankScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "Earliest arrival time"
    }
}

/// Shortest total burst first (non-preemptive SJF).
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn rank(&self, _index: usize, process: &Process, _ctx: &ReadyContext) -> RankScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest total burst time"
    }
}

/// Shortest remaining time first (preemptive SJF / SRT).
///
/// Ranks on the engine's live remaining-time table rather than the static
/// burst, so a partially executed process competes with its residual work.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn rank(&self, index: usize, _process: &Process, ctx: &ReadyContext) -> RankScore {
        ctx.remaining[index]
    }

    fn description(&self) -> &'static str {
        "Shortest remaining burst time"
    }
}

/// Smallest priority value first.
///
/// Lower `Process::priority` means higher priority, so the value itself is
/// the rank. Shared by both priority policies; preemption is the engine's
/// concern.
#[derive(Debug, Clone, Copy)]
pub struct SmallestPriorityValue;

impl SelectionRule for SmallestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn rank(&self, _index: usize, process: &Process, _ctx: &ReadyContext) -> RankScore {
        process.priority as RankScore
    }

    fn description(&self) -> &'static str {
        "Smallest priority value"
    }
}
