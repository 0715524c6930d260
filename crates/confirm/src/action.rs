//! The destructive operation awaiting confirmation.

use doorworks_core::{normalize_reason, RecordId};

/// What the confirmed action will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Delete,
    Recover,
}

/// Which record(s) the action applies to.
///
/// "Recover all" is a typed variant, not a magic identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    One(RecordId),
    All,
}

/// A delete/recover operation awaiting challenge confirmation.
///
/// Created when the user clicks delete or recover, consumed only after the
/// challenge validates, discarded on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub target: ActionTarget,
    pub label: String,
    pub kind: ActionKind,
    pub reason: Option<String>,
}

impl PendingAction {
    /// A soft delete of one record. `reason_input` is the raw free-text
    /// reason; whitespace-only input becomes `None`.
    pub fn delete(id: RecordId, label: impl Into<String>, reason_input: &str) -> Self {
        Self {
            target: ActionTarget::One(id),
            label: label.into(),
            kind: ActionKind::Delete,
            reason: normalize_reason(reason_input),
        }
    }

    /// Recovery of one soft-deleted record.
    pub fn recover(id: RecordId, label: impl Into<String>) -> Self {
        Self {
            target: ActionTarget::One(id),
            label: label.into(),
            kind: ActionKind::Recover,
            reason: None,
        }
    }

    /// Recovery of every currently-known deleted record.
    ///
    /// The label is computed from the deleted-record count at the moment the
    /// action is initiated, not when the button was rendered.
    pub fn recover_all(deleted_count: usize, noun_plural: &str) -> Self {
        Self {
            target: ActionTarget::All,
            label: format!("All {deleted_count} {noun_plural}"),
            kind: ActionKind::Recover,
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_normalizes_whitespace_only_reason_to_none() {
        let action = PendingAction::delete(RecordId::new(42), "PP-1001", "   ");
        assert_eq!(action.reason, None);
        assert_eq!(action.kind, ActionKind::Delete);
        assert_eq!(action.target, ActionTarget::One(RecordId::new(42)));
    }

    #[test]
    fn delete_trims_the_reason() {
        let action = PendingAction::delete(RecordId::new(42), "PP-1001", "  duplicate  ");
        assert_eq!(action.reason.as_deref(), Some("duplicate"));
    }

    #[test]
    fn recover_all_label_reflects_count_at_initiation() {
        let action = PendingAction::recover_all(3, "production papers");
        assert_eq!(action.label, "All 3 production papers");
        assert_eq!(action.target, ActionTarget::All);
        assert_eq!(action.kind, ActionKind::Recover);
    }
}
