//! Deterministic fault injection for tests and demos.

use crate::step::StepName;

/// Optional directive forcing a named step to fail.
///
/// Consulted by the orchestrator before each step; when it matches, the
/// step is treated as failed without its service call ever running.
/// There is no production equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fault {
    /// No fault injected; every step runs its real service call.
    #[default]
    None,

    /// Fail immediately before the named step executes.
    FailBeforeStep(StepName),
}

impl Fault {
    /// Returns true if this fault fires for the given step.
    pub fn triggers(&self, step: StepName) -> bool {
        matches!(self, Fault::FailBeforeStep(name) if *name == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_never_triggers() {
        assert!(!Fault::None.triggers(StepName::ReserveInventory));
        assert!(!Fault::None.triggers(StepName::FinalizeOrder));
    }

    #[test]
    fn fail_before_step_matches_only_its_step() {
        let fault = Fault::FailBeforeStep(StepName::FinalizeOrder);
        assert!(fault.triggers(StepName::FinalizeOrder));
        assert!(!fault.triggers(StepName::ChargeUserBalance));
    }
}
