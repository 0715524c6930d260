//! `doorworks-confirm` — challenge-gated confirmation for destructive actions.
//!
//! Soft-delete and recover operations are gated behind a short random code
//! the user must retype. This is a UX speed-bump against accidental clicks,
//! **not** a security control: it provides no authentication or authorization
//! guarantee whatsoever.

pub mod action;
pub mod challenge;
pub mod flow;

pub use action::{ActionKind, ActionTarget, PendingAction};
pub use challenge::{generate, generate_with, ChallengeState, CODE_LEN, MISMATCH_MESSAGE};
pub use flow::{ConfirmationFlow, SubmitOutcome};
