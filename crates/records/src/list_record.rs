//! Common surface every list-view record exposes to the page controller.

use doorworks_core::RecordId;
use doorworks_filter::{Filterable, Searchable, Timestamped};

/// A record that can be shown, filtered, soft-deleted, and recovered in a
/// list view.
pub trait ListRecord: Searchable + Filterable + Timestamped {
    /// Singular noun for this record type, used in action notices
    /// (e.g. `"production paper"`).
    const NOUN: &'static str;

    /// Plural noun for this record type, used in recover-all labels
    /// (e.g. `"production papers"`).
    const NOUN_PLURAL: &'static str;

    fn record_id(&self) -> RecordId;

    fn is_deleted(&self) -> bool;

    /// Short human-readable label for confirmation dialogs (e.g. the paper
    /// number).
    fn display_label(&self) -> String;
}
