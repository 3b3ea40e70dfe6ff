//! Input validation for simulation requests.
//!
//! Checks the integrity of a [`SimulationRequest`] before any simulation
//! work. Detects:
//! - Empty process batches
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process ids
//! - Round-Robin selected without a positive quantum
//!
//! Validation is all-or-nothing: every problem is reported, nothing is
//! simulated, and no input is touched.

use std::collections::HashSet;
use std::fmt;

use crate::simulator::SimulationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A process has a burst time below 1.
    InvalidBurstTime,
    /// A process has a negative arrival time.
    InvalidArrivalTime,
    /// Two processes share the same id.
    DuplicateProcessId,
    /// Round-Robin was selected without a positive quantum.
    MissingQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a simulation request.
///
/// Checks:
/// 1. At least one process is supplied
/// 2. Every burst time is ≥ 1
/// 3. Every arrival time is ≥ 0
/// 4. Process ids are unique
/// 5. Round-Robin requests carry a quantum ≥ 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "No processes supplied",
        ));
    }

    let mut seen_ids = HashSet::new();
    for process in &request.processes {
        if process.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Process '{}' has burst time {}, expected at least 1",
                    process.id, process.burst_time
                ),
            ));
        }
        if process.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Process '{}' has negative arrival time {}",
                    process.id, process.arrival_time
                ),
            ));
        }
        if !seen_ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProcessId,
                format!("Duplicate process id: {}", process.id),
            ));
        }
    }

    if request.policy.requires_quantum() && request.quantum.map_or(true, |q| q < 1) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingQuantum,
            "Round-Robin requires a quantum of at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
