//! The confirmation dialog state machine.
//!
//! Idle → AwaitingChallenge → Submitting → Idle. The flow is pure (no I/O);
//! the list controller owns dispatching the confirmed action to the backend
//! and reports the outcome back via [`ConfirmationFlow::settle`].

use rand::rngs::ThreadRng;
use rand::Rng;

use doorworks_core::{DomainError, DomainResult};

use crate::action::{ActionKind, PendingAction};
use crate::challenge::ChallengeState;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum FlowState {
    #[default]
    Idle,
    AwaitingChallenge {
        action: PendingAction,
        challenge: ChallengeState,
    },
    Submitting {
        action: PendingAction,
    },
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened: no dialog open, input empty, or a submit is already
    /// in flight. No regeneration is consumed.
    Ignored,
    /// The entered code did not match; a fresh code was generated and the
    /// input cleared.
    Mismatch,
    /// The code matched. The action is now submitting; dispatch it.
    Confirmed(PendingAction),
}

/// Gate for destructive operations: at most one [`PendingAction`] exists at a
/// time, and it is only released once the challenge is answered correctly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfirmationFlow {
    state: FlowState,
}

impl ConfirmationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a confirmation dialog for `action` with a fresh challenge.
    ///
    /// Rejected while another dialog is open or submitting.
    pub fn begin(&mut self, action: PendingAction) -> DomainResult<()> {
        self.begin_with(action, &mut rand::thread_rng())
    }

    pub fn begin_with<R: Rng + ?Sized>(
        &mut self,
        action: PendingAction,
        rng: &mut R,
    ) -> DomainResult<()> {
        if !matches!(self.state, FlowState::Idle) {
            return Err(DomainError::conflict("a confirmation is already in progress"));
        }
        self.state = FlowState::AwaitingChallenge {
            action,
            challenge: ChallengeState::new_with(rng),
        };
        Ok(())
    }

    /// Record the user's current challenge input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if let FlowState::AwaitingChallenge { challenge, .. } = &mut self.state {
            challenge.set_input(text);
        }
    }

    /// Record the free-text deletion reason typed in the open dialog.
    /// Whitespace-only input normalizes to no reason. Ignored for recover
    /// actions, which carry none.
    pub fn set_reason(&mut self, text: &str) {
        if let FlowState::AwaitingChallenge { action, .. } = &mut self.state {
            if action.kind == ActionKind::Delete {
                action.reason = doorworks_core::normalize_reason(text);
            }
        }
    }

    /// Attempt to confirm with the current input.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut rng: ThreadRng = rand::thread_rng();
        self.submit_with(&mut rng)
    }

    pub fn submit_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SubmitOutcome {
        let FlowState::AwaitingChallenge { action, challenge } = &mut self.state else {
            return SubmitOutcome::Ignored;
        };

        if challenge.input().trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        if !challenge.matches() {
            challenge.regenerate_with(rng);
            return SubmitOutcome::Mismatch;
        }

        let action = action.clone();
        self.state = FlowState::Submitting {
            action: action.clone(),
        };
        SubmitOutcome::Confirmed(action)
    }

    /// Close the dialog without confirming, discarding the pending action and
    /// its challenge. No effect while submitting.
    pub fn cancel(&mut self) {
        if matches!(self.state, FlowState::AwaitingChallenge { .. }) {
            self.state = FlowState::Idle;
        }
    }

    /// The submit finished (success or failure). Either way the dialog
    /// closes; failures surface at page level and are never retried here.
    pub fn settle(&mut self) {
        if matches!(self.state, FlowState::Submitting { .. }) {
            self.state = FlowState::Idle;
        }
    }

    /// The open dialog's challenge, if any.
    pub fn challenge(&self) -> Option<&ChallengeState> {
        match &self.state {
            FlowState::AwaitingChallenge { challenge, .. } => Some(challenge),
            _ => None,
        }
    }

    /// The action awaiting confirmation or currently submitting, if any.
    pub fn pending(&self) -> Option<&PendingAction> {
        match &self.state {
            FlowState::AwaitingChallenge { action, .. } | FlowState::Submitting { action } => {
                Some(action)
            }
            FlowState::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FlowState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FlowState::Submitting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, PendingAction};
    use crate::challenge::MISMATCH_MESSAGE;
    use doorworks_core::RecordId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn delete_action() -> PendingAction {
        PendingAction::delete(RecordId::new(42), "PP-1001", "")
    }

    #[test]
    fn begin_opens_a_dialog_with_a_fresh_challenge() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();

        let challenge = flow.challenge().unwrap();
        assert_eq!(challenge.code().len(), 5);
        assert_eq!(challenge.input(), "");
        assert_eq!(challenge.error(), None);
        assert!(flow.is_open());
    }

    #[test]
    fn begin_is_rejected_while_a_dialog_is_open() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();

        let err = flow.begin_with(delete_action(), &mut rng).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for a second begin"),
        }
    }

    #[test]
    fn empty_input_submit_is_a_no_op_without_regeneration() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();
        let code_before = flow.challenge().unwrap().code().to_string();

        flow.set_input("   ");
        assert_eq!(flow.submit_with(&mut rng), SubmitOutcome::Ignored);

        let challenge = flow.challenge().unwrap();
        assert_eq!(challenge.code(), code_before);
        assert_eq!(challenge.error(), None);
    }

    #[test]
    fn mismatch_regenerates_the_code_and_clears_the_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();
        let code_before = flow.challenge().unwrap().code().to_string();

        flow.set_input("xyz12");
        assert_eq!(flow.submit_with(&mut rng), SubmitOutcome::Mismatch);

        let challenge = flow.challenge().unwrap();
        assert_ne!(challenge.code(), code_before);
        assert_eq!(challenge.input(), "");
        assert_eq!(challenge.error(), Some(MISMATCH_MESSAGE));
        assert!(flow.is_open());
    }

    #[test]
    fn matching_input_confirms_case_insensitively() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();

        let lowered = flow.challenge().unwrap().code().to_lowercase();
        flow.set_input(lowered);
        match flow.submit_with(&mut rng) {
            SubmitOutcome::Confirmed(action) => {
                assert_eq!(action.kind, ActionKind::Delete);
            }
            other => panic!("Expected Confirmed, got {other:?}"),
        }
        assert!(flow.is_submitting());
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();
        let code = flow.challenge().unwrap().code().to_string();
        flow.set_input(code);

        assert!(matches!(
            flow.submit_with(&mut rng),
            SubmitOutcome::Confirmed(_)
        ));
        // A second rapid submit must not release the action again.
        assert_eq!(flow.submit_with(&mut rng), SubmitOutcome::Ignored);
    }

    #[test]
    fn cancel_discards_the_pending_action_and_challenge() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();

        flow.cancel();
        assert!(!flow.is_open());
        assert_eq!(flow.pending(), None);
        assert_eq!(flow.challenge(), None);

        // A new action can begin after cancel.
        flow.begin_with(delete_action(), &mut rng).unwrap();
    }

    #[test]
    fn settle_returns_to_idle_after_submission() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();
        let code = flow.challenge().unwrap().code().to_string();
        flow.set_input(code);
        flow.submit_with(&mut rng);

        flow.settle();
        assert!(!flow.is_open());
        assert_eq!(flow.pending(), None);
    }

    #[test]
    fn reason_typed_in_the_dialog_is_normalized_onto_the_action() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();

        flow.set_reason("  wrong party selected  ");
        let code = flow.challenge().unwrap().code().to_string();
        flow.set_input(code);
        match flow.submit_with(&mut rng) {
            SubmitOutcome::Confirmed(action) => {
                assert_eq!(action.reason.as_deref(), Some("wrong party selected"));
            }
            other => panic!("Expected Confirmed, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_reason_stays_absent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(delete_action(), &mut rng).unwrap();

        flow.set_reason("   ");
        assert_eq!(flow.pending().unwrap().reason, None);
    }

    #[test]
    fn mismatch_then_fresh_code_confirms() {
        // The full mismatch-retry path of the delete dialog.
        let mut rng = StdRng::seed_from_u64(9);
        let mut flow = ConfirmationFlow::new();
        flow.begin_with(
            PendingAction::delete(RecordId::new(42), "PP-1001", "  obsolete  "),
            &mut rng,
        )
        .unwrap();

        flow.set_input("xyz12");
        assert_eq!(flow.submit_with(&mut rng), SubmitOutcome::Mismatch);

        let fresh = flow.challenge().unwrap().code().to_string();
        flow.set_input(fresh);
        match flow.submit_with(&mut rng) {
            SubmitOutcome::Confirmed(action) => {
                assert_eq!(action.reason.as_deref(), Some("obsolete"));
            }
            other => panic!("Expected Confirmed, got {other:?}"),
        }
    }
}
