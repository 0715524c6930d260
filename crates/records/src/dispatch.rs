//! Dispatch orders for finished goods.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// Dispatch lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Draft,
    Approved,
    Dispatched,
    Delivered,
}

impl DispatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Draft => "draft",
            DispatchStatus::Approved => "approved",
            DispatchStatus::Dispatched => "dispatched",
            DispatchStatus::Delivered => "delivered",
        }
    }
}

/// A dispatch as returned by `/dispatch/dispatches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: RecordId,
    pub dispatch_number: String,
    #[serde(default)]
    pub party_name: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    pub status: DispatchStatus,
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
}

impl Searchable for Dispatch {
    fn search_values(&self) -> Vec<String> {
        [
            Some(&self.dispatch_number),
            self.party_name.as_ref(),
            self.vehicle_number.as_ref(),
            self.driver_name.as_ref(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

impl Filterable for Dispatch {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

impl Timestamped for Dispatch {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.created_at)
    }
}

impl ListRecord for Dispatch {
    const NOUN: &'static str = "dispatch";
    const NOUN_PLURAL: &'static str = "dispatches";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.dispatch_number.clone()
    }
}
