//! Production papers: the door/shutter job sheets the production role manages.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{MeasurementId, PartyId, RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// Paper lifecycle status as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperStatus {
    Draft,
    Active,
    Completed,
}

impl PaperStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperStatus::Draft => "draft",
            PaperStatus::Active => "active",
            PaperStatus::Completed => "completed",
        }
    }
}

/// Embedded party reference on a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRef {
    pub id: PartyId,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Embedded measurement reference on a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRef {
    pub id: MeasurementId,
    pub measurement_number: String,
    #[serde(default)]
    pub party_name: Option<String>,
}

/// A production paper as returned by `/production/production-papers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPaper {
    pub id: RecordId,
    pub paper_number: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub party_id: Option<PartyId>,
    #[serde(default)]
    pub measurement_id: Option<MeasurementId>,
    pub status: PaperStatus,
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
    #[serde(default)]
    pub party: Option<PartyRef>,
    #[serde(default)]
    pub measurement: Option<MeasurementRef>,
}

impl Searchable for ProductionPaper {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.paper_number.clone(), self.title.clone()];
        if let Some(description) = &self.description {
            values.push(description.clone());
        }
        if let Some(party) = &self.party {
            values.push(party.name.clone());
        }
        if let Some(measurement) = &self.measurement {
            values.push(measurement.measurement_number.clone());
        }
        values
    }
}

impl Filterable for ProductionPaper {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "party_id" => self.party_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

impl Timestamped for ProductionPaper {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.created_at)
    }
}

impl ListRecord for ProductionPaper {
    const NOUN: &'static str = "production paper";
    const NOUN_PLURAL: &'static str = "production papers";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.paper_number.clone()
    }
}
