//! Traits a record type implements to participate in filtering.

use chrono::NaiveDateTime;

/// Text-search participation: the values of the record's searchable fields.
///
/// Each record type configures its own field list (e.g. a production paper
/// exposes paper number, title, description, party name, and measurement
/// number). A record matches when ANY returned value contains the query as a
/// case-insensitive substring.
pub trait Searchable {
    fn search_values(&self) -> Vec<String>;
}

/// Equality-filter participation.
pub trait Filterable {
    /// The record's value for a filterable field, or `None` when the record
    /// has no value for it (which fails any active constraint on the field).
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Date-range participation.
pub trait Timestamped {
    /// The designated timestamp, as received from the backend.
    ///
    /// Naive on purpose: the comparison is on the date component as received,
    /// with no timezone conversion.
    fn timestamp(&self) -> Option<NaiveDateTime>;
}
