//! Counting outcomes over a run.

use layered_facts::{AssertionError, Fact, SourcePosition, Succeeded};

/// Counts of succeeded, canceled and failed outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Total outcomes recorded.
    pub total: usize,
    pub succeeded: usize,
    /// Vacuously true outcomes.
    pub canceled: usize,
    pub failed: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome produced by `Fact::to_assertion`.
    pub fn record(&mut self, outcome: &Result<Succeeded, AssertionError>) {
        self.total += 1;
        match outcome {
            Ok(Succeeded) => self.succeeded += 1,
            Err(AssertionError::Canceled { .. }) => self.canceled += 1,
            Err(AssertionError::Failed { .. }) => self.failed += 1,
        }
    }

    /// Convert `fact` at the caller's position, record it and hand back the outcome.
    #[track_caller]
    pub fn check(&mut self, fact: &Fact) -> Result<Succeeded, AssertionError> {
        let outcome = fact.to_assertion_at(SourcePosition::caller());
        self.record(&outcome);
        outcome
    }

    /// No failures. Cancellations do not fail a run.
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Get the exit code (0 = pass, 1 = failures).
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}
