//! `doorworks-filter` — the record filter engine for list views.
//!
//! Given the full in-memory record set and a [`FilterCriteria`], the engine
//! deterministically computes the visible subset. Filtering is a pure
//! derivation: it is re-run in full on every change to the records or the
//! criteria, never patched incrementally.

pub mod criteria;
pub mod engine;
pub mod record;

pub use criteria::{DateRange, FilterCriteria};
pub use engine::apply;
pub use record::{Filterable, Searchable, Timestamped};
