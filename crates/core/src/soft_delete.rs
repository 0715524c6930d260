//! Soft-delete metadata shared by recoverable record types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Soft-delete marker as returned by the backend.
///
/// Deleted records stay in the backend (with a timestamp and optional reason)
/// and can be recovered later; the client only ever reads these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDelete {
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub deletion_reason: Option<String>,
}

impl SoftDelete {
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

/// Normalize a user-entered deletion reason.
///
/// Whitespace-only input is treated as absent: the backend receives `null`,
/// never an empty string.
pub fn normalize_reason(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_reason_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_reason("  duplicate entry  "),
            Some("duplicate entry".to_string())
        );
    }

    #[test]
    fn normalize_reason_treats_whitespace_only_as_absent() {
        assert_eq!(normalize_reason("   "), None);
        assert_eq!(normalize_reason(""), None);
    }

    #[test]
    fn soft_delete_defaults_to_active() {
        let marker = SoftDelete::default();
        assert!(marker.is_active());
        assert_eq!(marker.deleted_at, None);
        assert_eq!(marker.deletion_reason, None);
    }
}
