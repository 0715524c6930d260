//! Grouping of visually-identical dimension rows.

use std::collections::HashMap;

use doorworks_records::{DimValue, MeasurementItem};

use crate::units::format_dimension;

/// Which dimension table a paper renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    Frame,
    Shutter,
}

/// One rendered row of the grouped dimension table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedRow {
    pub width: String,
    pub height: String,
    /// Building wing and flat, joined for display (`"A 203"`).
    pub location: String,
    pub wall: String,
    pub qty: f64,
}

fn raw_width(item: &MeasurementItem) -> Option<&DimValue> {
    item.ro_width
        .as_ref()
        .or(item.width.as_ref())
        .or(item.act_width.as_ref())
}

fn raw_height(item: &MeasurementItem) -> Option<&DimValue> {
    item.ro_height
        .as_ref()
        .or(item.height.as_ref())
        .or(item.act_height.as_ref())
}

fn key_part(value: Option<&DimValue>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Collapse rows with identical dimensions and placement into one row,
/// summing their quantities. Display formatting happens once per group from
/// the first row seen; insertion order is preserved.
pub fn group_rows(items: &[MeasurementItem], kind: DimensionKind) -> Vec<GroupedRow> {
    let mut rows: Vec<GroupedRow> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for item in items {
        let width = raw_width(item);
        let height = raw_height(item);
        let bldg = item.bldg.clone().unwrap_or_default();
        let flat = item.flat_no.clone().unwrap_or_default();
        let wall = item.wall.clone().unwrap_or_default();

        let key = format!(
            "{}-{}-{}-{}-{}",
            key_part(width),
            key_part(height),
            bldg,
            flat,
            wall
        );

        if let Some(&at) = index_by_key.get(&key) {
            rows[at].qty += item.quantity();
            continue;
        }

        let location = if flat.is_empty() {
            if bldg.is_empty() { "-".to_string() } else { bldg.clone() }
        } else if bldg.is_empty() {
            flat.clone()
        } else {
            format!("{bldg} {flat}")
        };

        index_by_key.insert(key, rows.len());
        rows.push(GroupedRow {
            width: width
                .map(|v| format_dimension(v, kind))
                .unwrap_or_else(|| "-".to_string()),
            height: height
                .map(|v| format_dimension(v, kind))
                .unwrap_or_else(|| "-".to_string()),
            location,
            wall: if wall.is_empty() { "-".to_string() } else { wall },
            qty: item.quantity(),
        });
    }

    rows
}

/// Footer total across the grouped rows.
pub fn total_quantity(rows: &[GroupedRow]) -> f64 {
    rows.iter().map(|r| r.qty).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(width: f64, height: f64, bldg: &str, flat: &str, qty: f64) -> MeasurementItem {
        MeasurementItem {
            width: Some(DimValue::Num(width)),
            height: Some(DimValue::Num(height)),
            bldg: Some(bldg.to_string()),
            flat_no: Some(flat.to_string()),
            qty: Some(DimValue::Num(qty)),
            ..MeasurementItem::default()
        }
    }

    #[test]
    fn identical_rows_collapse_and_sum_quantities() {
        let items = vec![
            item(914.0, 2100.0, "A", "203", 2.0),
            item(914.0, 2100.0, "A", "203", 3.0),
            item(914.0, 2100.0, "B", "101", 1.0),
        ];

        let rows = group_rows(&items, DimensionKind::Frame);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].qty, 5.0);
        assert_eq!(rows[0].location, "A 203");
        assert_eq!(rows[1].qty, 1.0);
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let items = vec![
            item(914.0, 2100.0, "B", "101", 1.0),
            item(762.0, 1980.0, "A", "203", 1.0),
            item(914.0, 2100.0, "B", "101", 1.0),
        ];

        let rows = group_rows(&items, DimensionKind::Frame);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].location, "B 101");
        assert_eq!(rows[1].location, "A 203");
    }

    #[test]
    fn wall_differences_keep_rows_apart() {
        let mut with_wall = item(914.0, 2100.0, "A", "203", 1.0);
        with_wall.wall = Some("9\"".to_string());
        let items = vec![item(914.0, 2100.0, "A", "203", 1.0), with_wall];

        let rows = group_rows(&items, DimensionKind::Frame);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn missing_placement_renders_dashes() {
        let items = vec![MeasurementItem {
            width: Some(DimValue::Num(914.0)),
            qty: Some(DimValue::Num(1.0)),
            ..MeasurementItem::default()
        }];

        let rows = group_rows(&items, DimensionKind::Frame);
        assert_eq!(rows[0].location, "-");
        assert_eq!(rows[0].wall, "-");
        assert_eq!(rows[0].height, "-");
    }

    #[test]
    fn total_quantity_sums_grouped_rows() {
        let items = vec![
            item(914.0, 2100.0, "A", "203", 2.0),
            item(762.0, 1980.0, "A", "204", 1.5),
        ];
        let rows = group_rows(&items, DimensionKind::Shutter);
        assert_eq!(total_quantity(&rows), 3.5);
    }
}
