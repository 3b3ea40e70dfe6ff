//! The simulation engine and KPI evaluation.
//!
//! Provides the discrete-time driver shared by all six policies and the
//! metrics derived from a completed run.
//!
//! # Algorithm
//!
//! [`simulate`] validates the request, replays the batch under the chosen
//! policy (ranked policies through a min-heap ready set, Round-Robin
//! through a FIFO queue), and reads the resulting timeline back into
//! per-process and batch metrics.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod engine;
mod kpi;

pub use engine::{simulate, SimulationRequest, SimulationResult};
pub use kpi::{ProcessMetrics, SimulationKpi};
