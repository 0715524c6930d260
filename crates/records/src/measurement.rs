//! Measurement sheets and their dimension rows.
//!
//! The measurement wire format is the oldest in the backend and carries two
//! generations of shapes: dimension cells may be numbers or quoted-inch
//! strings, `items` may arrive as a JSON array or as a JSON-encoded string,
//! and a paper's selected items may be bare indices (legacy) or resolved
//! references. Every variant is decoded explicitly at this boundary so the
//! rest of the system sees one normalized shape.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{MeasurementId, PartyId, RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// A dimension cell: the backend sends numbers or strings like `"36\""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimValue {
    Num(f64),
    Text(String),
}

impl DimValue {
    /// Numeric value, stripping a trailing inch mark from text cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DimValue::Num(n) => Some(*n),
            DimValue::Text(s) => s.trim().trim_end_matches('"').parse::<f64>().ok(),
        }
    }
}

impl core::fmt::Display for DimValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DimValue::Num(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            DimValue::Num(n) => write!(f, "{n}"),
            DimValue::Text(s) => f.write_str(s),
        }
    }
}

/// One dimension row of a measurement sheet.
///
/// Field aliases cover the older column names still present in stored rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementItem {
    #[serde(default, alias = "serial", alias = "user_serial")]
    pub item_no: Option<DimValue>,
    #[serde(default, alias = "w")]
    pub width: Option<DimValue>,
    #[serde(default, alias = "h")]
    pub height: Option<DimValue>,
    #[serde(default)]
    pub ro_width: Option<DimValue>,
    #[serde(default)]
    pub ro_height: Option<DimValue>,
    #[serde(default)]
    pub act_width: Option<DimValue>,
    #[serde(default)]
    pub act_height: Option<DimValue>,
    #[serde(default)]
    pub act_sq_ft: Option<DimValue>,
    #[serde(default)]
    pub wall: Option<String>,
    #[serde(default, alias = "bldg_wing")]
    pub bldg: Option<String>,
    #[serde(default, alias = "flat")]
    pub flat_no: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default, alias = "quantity")]
    pub qty: Option<DimValue>,
}

impl MeasurementItem {
    /// Row quantity; missing or unparsable quantities count as one unit.
    pub fn quantity(&self) -> f64 {
        self.qty
            .as_ref()
            .and_then(DimValue::as_number)
            .filter(|q| *q > 0.0)
            .unwrap_or(1.0)
    }
}

/// The `items` column: either a JSON array or a JSON-encoded string of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementItems {
    Parsed(Vec<MeasurementItem>),
    Raw(String),
}

impl Default for MeasurementItems {
    fn default() -> Self {
        MeasurementItems::Parsed(Vec::new())
    }
}

impl MeasurementItems {
    /// The rows, decoding the stringified variant when needed.
    pub fn to_vec(&self) -> Result<Vec<MeasurementItem>, serde_json::Error> {
        match self {
            MeasurementItems::Parsed(items) => Ok(items.clone()),
            MeasurementItems::Raw(json) => serde_json::from_str(json),
        }
    }
}

/// A resolved selected-item reference (current wire shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItemRef {
    pub measurement_id: MeasurementId,
    pub item_index: usize,
    #[serde(default)]
    pub item_type: Option<String>,
}

/// A legacy index entry: a number, or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyIndex {
    Num(usize),
    Text(String),
}

impl LegacyIndex {
    pub fn index(&self) -> Option<usize> {
        match self {
            LegacyIndex::Num(i) => Some(*i),
            LegacyIndex::Text(s) => s.trim().parse::<usize>().ok(),
        }
    }
}

/// The selected measurement items attached to a production paper.
///
/// Older papers stored bare row indices into a single measurement; newer
/// ones store resolved references. Decoded as a tagged union instead of
/// runtime shape-sniffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedItems {
    Resolved(Vec<SelectedItemRef>),
    Legacy(Vec<LegacyIndex>),
}

impl SelectedItems {
    /// Normalize to resolved references.
    ///
    /// Legacy indices resolve against `fallback_measurement` (the paper's
    /// own `measurement_id`); without one, legacy entries have no meaning
    /// and are dropped.
    pub fn normalized(&self, fallback_measurement: Option<MeasurementId>) -> Vec<SelectedItemRef> {
        match self {
            SelectedItems::Resolved(refs) => refs.clone(),
            SelectedItems::Legacy(indices) => {
                let Some(measurement_id) = fallback_measurement else {
                    return Vec::new();
                };
                indices
                    .iter()
                    .filter_map(LegacyIndex::index)
                    .map(|item_index| SelectedItemRef {
                        measurement_id,
                        item_index,
                        item_type: None,
                    })
                    .collect()
            }
        }
    }
}

/// A measurement sheet as returned by `/production/measurements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: RecordId,
    #[serde(default)]
    pub measurement_type: Option<String>,
    pub measurement_number: String,
    #[serde(default)]
    pub party_name: Option<String>,
    #[serde(default)]
    pub party_id: Option<PartyId>,
    #[serde(default)]
    pub thickness: Option<String>,
    #[serde(default)]
    pub measurement_date: Option<String>,
    #[serde(default)]
    pub items: MeasurementItems,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub created_by_username: Option<String>,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
}

impl Searchable for Measurement {
    fn search_values(&self) -> Vec<String> {
        [
            Some(&self.measurement_number),
            self.party_name.as_ref(),
            self.measurement_type.as_ref(),
            self.created_by_username.as_ref(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

impl Filterable for Measurement {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "measurement_type" => self.measurement_type.clone(),
            "party_id" => self.party_id.map(|id| id.to_string()),
            "approval_status" => self.approval_status.clone(),
            "created_by" => self.created_by_username.clone(),
            _ => None,
        }
    }
}

impl Timestamped for Measurement {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.created_at)
    }
}

impl ListRecord for Measurement {
    const NOUN: &'static str = "measurement";
    const NOUN_PLURAL: &'static str = "measurements";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.measurement_number.clone()
    }
}
