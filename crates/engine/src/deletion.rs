/// Two-phase gate in front of the only destructive operation.
///
/// `Idle -> Confirming -> Committing -> Idle`. Selecting a row opens the
/// confirmation carrying the target id; `confirm` hands the target out
/// exactly once for the network call; `finish` returns to `Idle` whether the
/// commit succeeded or failed. While not `Idle`, `select` is refused, so two
/// deletions can never be in flight at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    Confirming {
        target: String,
    },
    Committing {
        target: String,
    },
}

#[derive(Debug, Default)]
pub struct DeletionWorkflow {
    state: DeletionState,
}

impl DeletionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    /// Target awaiting user confirmation, if any.
    pub fn confirming_target(&self) -> Option<&str> {
        match &self.state {
            DeletionState::Confirming { target } => Some(target),
            _ => None,
        }
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.state, DeletionState::Committing { .. })
    }

    /// Picks a row for deletion and opens the confirmation. Refused (returns
    /// `false`) unless the workflow is idle.
    pub fn select(&mut self, target: impl Into<String>) -> bool {
        if self.state != DeletionState::Idle {
            return false;
        }
        self.state = DeletionState::Confirming {
            target: target.into(),
        };
        true
    }

    /// Discards the pending target without any network call.
    pub fn cancel(&mut self) {
        if matches!(self.state, DeletionState::Confirming { .. }) {
            self.state = DeletionState::Idle;
        }
    }

    /// Moves to `Committing` and yields the target the caller must delete.
    /// Returns `None` when there is nothing to confirm.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            DeletionState::Confirming { target } => {
                self.state = DeletionState::Committing {
                    target: target.clone(),
                };
                Some(target)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Clears the target after the commit resolved, regardless of outcome.
    pub fn finish(&mut self) {
        if matches!(self.state, DeletionState::Committing { .. }) {
            self.state = DeletionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_cancel_never_yields_a_target() {
        let mut workflow = DeletionWorkflow::new();

        assert!(workflow.select("x"));
        assert_eq!(workflow.confirming_target(), Some("x"));
        workflow.cancel();

        assert_eq!(workflow.state(), &DeletionState::Idle);
        assert_eq!(workflow.confirm(), None);
    }

    #[test]
    fn confirm_yields_the_target_exactly_once() {
        let mut workflow = DeletionWorkflow::new();
        workflow.select("x");

        assert_eq!(workflow.confirm(), Some("x".to_string()));
        assert!(workflow.is_committing());
        assert_eq!(workflow.confirm(), None);
    }

    #[test]
    fn finish_returns_to_idle_regardless_of_outcome() {
        let mut workflow = DeletionWorkflow::new();
        workflow.select("x");
        workflow.confirm();

        // Outcome of the network call does not matter to the workflow.
        workflow.finish();
        assert_eq!(workflow.state(), &DeletionState::Idle);
    }

    #[test]
    fn select_is_refused_while_committing() {
        let mut workflow = DeletionWorkflow::new();
        workflow.select("x");
        workflow.confirm();

        assert!(!workflow.select("y"));
        assert!(workflow.is_committing());
    }

    #[test]
    fn select_is_refused_while_confirming() {
        let mut workflow = DeletionWorkflow::new();
        workflow.select("x");

        assert!(!workflow.select("y"));
        assert_eq!(workflow.confirming_target(), Some("x"));
    }

    #[test]
    fn cancel_outside_confirming_is_a_no_op() {
        let mut workflow = DeletionWorkflow::new();
        workflow.cancel();
        assert_eq!(workflow.state(), &DeletionState::Idle);

        workflow.select("x");
        workflow.confirm();
        workflow.cancel();
        assert!(workflow.is_committing());
    }
}
