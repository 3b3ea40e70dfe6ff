//! Ready-set context for selection rule evaluation.

/// Runtime simulation state passed to selection rules.
///
/// Carries the current clock and the remaining burst per process, indexed
/// by original input position; this is the only mutable state a rule may
/// consult.
/// Rules that rank on static fields (arrival, burst, priority) ignore it.
#[derive(Debug, Clone, Copy)]
pub struct ReadyContext<'a> {
    /// Current simulation tick.
    pub now: i64,
    /// Remaining burst per process, indexed by original input position.
    pub remaining: &'a [i64],
}

impl<'a> ReadyContext<'a> {
    /// Creates a context for the given clock and remaining-time table.
    pub fn new(now: i64, remaining: &'a [i64]) -> Self {
        Self { now, remaining }
    }
}
