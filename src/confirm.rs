//! Two-step confirmation for side-effecting actions.

use serde::Serialize;

/// A pending action together with the sentence shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal<A> {
    pub summary: String,
    pub action: A,
}

/// Holds at most one pending action until it is confirmed or cancelled.
#[derive(Debug, Clone)]
pub struct ConfirmationGate<A> {
    pending: Option<Proposal<A>>,
}

impl<A> Default for ConfirmationGate<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> ConfirmationGate<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate with a new proposal, returning any proposal it replaced.
    pub fn propose(&mut self, summary: impl Into<String>, action: A) -> Option<Proposal<A>> {
        self.pending.replace(Proposal {
            summary: summary.into(),
            action,
        })
    }

    pub fn pending(&self) -> Option<&Proposal<A>> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Closes the gate and hands back the action for the caller to perform.
    pub fn confirm(&mut self) -> Option<Proposal<A>> {
        self.pending.take()
    }

    /// Closes the gate, discarding the pending action. Calling it on a closed
    /// gate does nothing and returns `false`.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_yields_the_action_once() {
        let mut gate = ConfirmationGate::new();
        assert!(gate.propose("Transfer $10.00?", 10).is_none());
        assert!(gate.is_open());
        assert_eq!(gate.pending().unwrap().summary, "Transfer $10.00?");

        let proposal = gate.confirm().unwrap();
        assert_eq!(proposal.action, 10);
        assert!(!gate.is_open());
        assert!(gate.confirm().is_none());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut gate = ConfirmationGate::new();
        gate.propose("Transfer $10.00?", 10);
        assert!(gate.cancel());
        assert!(!gate.cancel());
        assert!(gate.confirm().is_none());
    }

    #[test]
    fn proposing_again_replaces_the_pending_action() {
        let mut gate = ConfirmationGate::new();
        gate.propose("first", 1);
        let replaced = gate.propose("second", 2).unwrap();
        assert_eq!(replaced.action, 1);
        assert_eq!(gate.confirm().unwrap().action, 2);
    }
}
