//! Scheduling policies and selection rules.
//!
//! A [`SelectionRule`] ranks the ready set; the engine always runs the
//! ready process with the lowest rank. [`Policy`] is the catalogue of the
//! six supported policies, each mapping to a rule and a preemption mode
//! (Round-Robin uses FIFO queue order instead of a rule).
//!
//! # Usage
//!
//! ```
//! use schedsim::dispatching::Policy;
//!
//! let policy = Policy::SjfPreemptive;
//! assert!(policy.is_preemptive());
//! assert_eq!(policy.selection_rule().unwrap().name(), "SRT");
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

mod context;
pub mod rules;

pub use context::ReadyContext;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::Process;

/// Rank returned by a selection rule.
///
/// **Lower rank = selected first.** Ranks are exact integers: every
/// ranking field (arrival, burst, remaining time, priority) is integral,
/// and exact ties are what the engine's index tie-break must see to stay
/// reproducible.
pub type RankScore = i64;

/// A rule that ranks ready processes for selection.
///
/// # Rank Convention
/// **Lower rank = higher claim on the CPU.** The engine breaks equal ranks
/// by the process's original input index, uniformly for every policy, so a
/// rule never needs its own tie-breaking.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Ranks one ready process given the current simulation state.
    ///
    /// `index` is the process's position in the original input list.
    fn rank(&self, index: usize, process: &Process, ctx: &ReadyContext) -> RankScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The six supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served: earliest arrival runs to completion.
    Fcfs,
    /// Shortest Job First: smallest burst among the ready runs to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time: re-evaluated every tick.
    SjfPreemptive,
    /// Smallest priority value among the ready runs to completion.
    PriorityNonPreemptive,
    /// Smallest priority value, re-evaluated every tick.
    PriorityPreemptive,
    /// FIFO queue with a fixed quantum per turn.
    RoundRobin,
}

impl Policy {
    /// Human-readable policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::SjfNonPreemptive => "SJF (non-preemptive)",
            Policy::SjfPreemptive => "SJF (preemptive)",
            Policy::PriorityNonPreemptive => "Priority (non-preemptive)",
            Policy::PriorityPreemptive => "Priority (preemptive)",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// The rule ranking the ready set, or `None` for Round-Robin, whose
    /// FIFO order is positional rather than value-ranked.
    pub fn selection_rule(&self) -> Option<&'static dyn SelectionRule> {
        match self {
            Policy::Fcfs => Some(&rules::EarliestArrival),
            Policy::SjfNonPreemptive => Some(&rules::ShortestBurst),
            Policy::SjfPreemptive => Some(&rules::ShortestRemaining),
            Policy::PriorityNonPreemptive | Policy::PriorityPreemptive => {
                Some(&rules::SmallestPriorityValue)
            }
            Policy::RoundRobin => None,
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::SjfPreemptive | Policy::PriorityPreemptive | Policy::RoundRobin
        )
    }

    /// Whether the policy needs a quantum in the request.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}
