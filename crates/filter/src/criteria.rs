//! Filter criteria value object.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Inclusive calendar-date range.
///
/// Bounds are calendar dates; the engine widens the lower bound to the start
/// of day and the upper bound to the end of day when comparing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// The combined search text, equality constraints, and date range currently
/// applied to a list view.
///
/// Transient: rebuilt on every user interaction, never persisted. An absent
/// key in `equality_filters` is the "All" sentinel for that field (no
/// constraint).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub equality_filters: BTreeMap<String, String>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_equality(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equality_filters.insert(field.into(), value.into());
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_range = DateRange { from, to };
        self
    }

    /// Set or clear an equality constraint. `None` is the "All" sentinel.
    pub fn set_equality(&mut self, field: impl Into<String>, value: Option<String>) {
        let field = field.into();
        match value {
            Some(v) => {
                self.equality_filters.insert(field, v);
            }
            None => {
                self.equality_filters.remove(&field);
            }
        }
    }

    /// Reset every constraint (the "Clear Filters" affordance).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any constraint is active.
    pub fn is_active(&self) -> bool {
        !self.search_query.trim().is_empty()
            || !self.equality_filters.is_empty()
            || !self.date_range.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_equality_none_removes_the_constraint() {
        let mut criteria = FilterCriteria::new().with_equality("status", "active");
        assert!(criteria.is_active());

        criteria.set_equality("status", None);
        assert!(!criteria.is_active());
    }

    #[test]
    fn clear_resets_all_constraints() {
        let mut criteria = FilterCriteria::new()
            .with_search("door")
            .with_equality("status", "draft");
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn whitespace_only_search_is_not_active() {
        let criteria = FilterCriteria::new().with_search("   ");
        assert!(!criteria.is_active());
    }
}
