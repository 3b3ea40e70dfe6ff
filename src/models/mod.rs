//! Simulation domain models.
//!
//! Provides the core data types for describing a scheduling workload and
//! its outcome: the immutable [`Process`] input descriptor and the
//! [`Timeline`] of executed [`TimelineSegment`]s.
//!
//! All times are abstract integer ticks relative to the simulation epoch
//! (t=0); the consumer decides what one tick means.

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Timeline, TimelineSegment};
