//! The filtering pipeline.

use crate::criteria::FilterCriteria;
use crate::record::{Filterable, Searchable, Timestamped};

/// Compute the visible subset of `records` under `criteria`.
///
/// Pure and idempotent. Stages apply in a fixed order, each narrowing the
/// previous stage's output:
///
/// 1. text search (case-insensitive ANY-field substring; empty query passes
///    everything),
/// 2. equality filters (logical AND across present fields),
/// 3. date range (inclusive; lower bound at start of day, upper bound at
///    23:59:59.999 of the given date).
pub fn apply<R>(records: &[R], criteria: &FilterCriteria) -> Vec<R>
where
    R: Clone + Searchable + Filterable + Timestamped,
{
    records
        .iter()
        .filter(|r| matches_search(*r, &criteria.search_query))
        .filter(|r| matches_equality(*r, criteria))
        .filter(|r| matches_date_range(*r, criteria))
        .cloned()
        .collect()
}

fn matches_search<R: Searchable>(record: &R, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    record
        .search_values()
        .iter()
        .any(|value| value.to_lowercase().contains(&query))
}

fn matches_equality<R: Filterable>(record: &R, criteria: &FilterCriteria) -> bool {
    criteria
        .equality_filters
        .iter()
        .all(|(field, expected)| record.field_value(field).as_deref() == Some(expected.as_str()))
}

fn matches_date_range<R: Timestamped>(record: &R, criteria: &FilterCriteria) -> bool {
    let range = &criteria.date_range;
    if range.is_empty() {
        return true;
    }
    // A record without the designated timestamp fails any active bound.
    let Some(ts) = record.timestamp() else {
        return false;
    };
    if let Some(from) = range.from {
        let start = from.and_hms_opt(0, 0, 0).expect("midnight is always valid");
        if ts < start {
            return false;
        }
    }
    if let Some(to) = range.to {
        let end = to
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("end of day is always valid");
        if ts > end {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[derive(Debug, Clone, PartialEq)]
    struct Paper {
        number: String,
        title: String,
        status: &'static str,
        party_id: Option<i64>,
        created_at: Option<NaiveDateTime>,
    }

    impl Searchable for Paper {
        fn search_values(&self) -> Vec<String> {
            vec![self.number.clone(), self.title.clone()]
        }
    }

    impl Filterable for Paper {
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.to_string()),
                "party_id" => self.party_id.map(|id| id.to_string()),
                _ => None,
            }
        }
    }

    impl Timestamped for Paper {
        fn timestamp(&self) -> Option<NaiveDateTime> {
            self.created_at
        }
    }

    fn paper(number: &str, title: &str, status: &'static str) -> Paper {
        Paper {
            number: number.to_string(),
            title: title.to_string(),
            status,
            party_id: None,
            created_at: date(2025, 3, 10).and_hms_opt(12, 0, 0),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_matches_any_configured_field_case_insensitively() {
        let records = vec![paper("A1", "Door", "active"), paper("B2", "Frame", "active")];
        let criteria = FilterCriteria::new().with_search("do");

        let visible = apply(&records, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].number, "A1");
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let records = vec![paper("A1", "Door", "active"), paper("B2", "Frame", "draft")];
        let criteria = FilterCriteria::new().with_search("   ");
        assert_eq!(apply(&records, &criteria).len(), 2);
    }

    #[test]
    fn equality_filters_and_together() {
        let mut a = paper("A1", "Door", "active");
        a.party_id = Some(7);
        let mut b = paper("B2", "Frame", "active");
        b.party_id = Some(8);
        let c = paper("C3", "Door", "draft");
        let records = vec![a, b, c];

        let criteria = FilterCriteria::new()
            .with_equality("status", "active")
            .with_equality("party_id", "7");

        let visible = apply(&records, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].number, "A1");
    }

    #[test]
    fn equality_result_is_independent_of_insertion_order() {
        let mut a = paper("A1", "Door", "active");
        a.party_id = Some(7);
        let records = vec![a, paper("B2", "Frame", "draft")];

        let forward = FilterCriteria::new()
            .with_equality("status", "active")
            .with_equality("party_id", "7");
        let reverse = FilterCriteria::new()
            .with_equality("party_id", "7")
            .with_equality("status", "active");

        assert_eq!(apply(&records, &forward), apply(&records, &reverse));
    }

    #[test]
    fn record_without_the_field_fails_an_active_constraint() {
        let records = vec![paper("A1", "Door", "active")];
        let criteria = FilterCriteria::new().with_equality("party_id", "7");
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn date_range_bounds_are_inclusive_to_the_millisecond() {
        let mut at_start = paper("A1", "Door", "active");
        at_start.created_at = date(2025, 3, 1).and_hms_milli_opt(0, 0, 0, 0);
        let mut at_end = paper("B2", "Frame", "active");
        at_end.created_at = date(2025, 3, 5).and_hms_milli_opt(23, 59, 59, 999);
        let mut before = paper("C3", "Door", "active");
        before.created_at = date(2025, 2, 28).and_hms_milli_opt(23, 59, 59, 999);
        let mut after = paper("D4", "Frame", "active");
        after.created_at = date(2025, 3, 6).and_hms_milli_opt(0, 0, 0, 0);

        let records = vec![at_start, at_end, before, after];
        let criteria =
            FilterCriteria::new().with_date_range(Some(date(2025, 3, 1)), Some(date(2025, 3, 5)));

        let visible = apply(&records, &criteria);
        let numbers: Vec<&str> = visible.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["A1", "B2"]);
    }

    #[test]
    fn record_without_timestamp_fails_an_active_date_bound() {
        let mut p = paper("A1", "Door", "active");
        p.created_at = None;
        let records = vec![p];

        let criteria = FilterCriteria::new().with_date_range(Some(date(2025, 3, 1)), None);
        assert!(apply(&records, &criteria).is_empty());

        let no_bounds = FilterCriteria::new();
        assert_eq!(apply(&records, &no_bounds).len(), 1);
    }

    #[test]
    fn stages_narrow_and_never_rewiden() {
        let mut a = paper("A1", "Front Door", "active");
        a.party_id = Some(7);
        let mut b = paper("B2", "Back Door", "draft");
        b.party_id = Some(7);
        let records = vec![a, b];

        let criteria = FilterCriteria::new()
            .with_search("door")
            .with_equality("status", "active");

        let visible = apply(&records, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].number, "A1");
    }

    #[test]
    fn filter_is_idempotent() {
        let records = vec![paper("A1", "Door", "active"), paper("B2", "Frame", "draft")];
        let criteria = FilterCriteria::new().with_search("a").with_equality("status", "active");

        let once = apply(&records, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_paper() -> impl Strategy<Value = Paper> {
            (
                "[A-Z][0-9]{1,4}",
                "[A-Za-z ]{0,12}",
                prop_oneof![Just("draft"), Just("active"), Just("completed")],
                proptest::option::of(1i64..50),
                (0u32..28, 0u32..24, 0u32..60),
            )
                .prop_map(|(number, title, status, party_id, (day, hour, min))| Paper {
                    number,
                    title,
                    status,
                    party_id,
                    created_at: date(2025, 3, day + 1).and_hms_opt(hour, min, 0),
                })
        }

        fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
            (
                "[a-z]{0,3}",
                proptest::option::of(prop_oneof![
                    Just("draft".to_string()),
                    Just("active".to_string()),
                ]),
                proptest::option::of(1u32..28),
            )
                .prop_map(|(query, status, from_day)| {
                    let mut criteria = FilterCriteria::new().with_search(query);
                    criteria.set_equality("status", status);
                    criteria.date_range.from = from_day.map(|d| date(2025, 3, d));
                    criteria
                })
        }

        proptest! {
            /// Property: filter(filter(r, c), c) == filter(r, c).
            #[test]
            fn filter_is_idempotent_for_arbitrary_inputs(
                records in proptest::collection::vec(arb_paper(), 0..40),
                criteria in arb_criteria(),
            ) {
                let once = apply(&records, &criteria);
                let twice = apply(&once, &criteria);
                prop_assert_eq!(once, twice);
            }

            /// Property: an empty search query never narrows the result.
            #[test]
            fn empty_search_never_narrows(
                records in proptest::collection::vec(arb_paper(), 0..40),
            ) {
                let criteria = FilterCriteria::new().with_search("");
                prop_assert_eq!(apply(&records, &criteria), records);
            }

            /// Property: the output is always a subset of the input.
            #[test]
            fn output_is_a_subset_of_input(
                records in proptest::collection::vec(arb_paper(), 0..40),
                criteria in arb_criteria(),
            ) {
                let visible = apply(&records, &criteria);
                for r in &visible {
                    prop_assert!(records.contains(r));
                }
            }
        }
    }
}
