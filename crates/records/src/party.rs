//! Parties: customers and builders the papers are produced for.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// A party as returned by `/production/parties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: RecordId,
    #[serde(default)]
    pub party_type: Option<String>,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub customer_code: Option<String>,
    #[serde(default)]
    pub office_city: Option<String>,
    #[serde(default)]
    pub office_state: Option<String>,
    #[serde(default)]
    pub gstin_number: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    #[serde(default)]
    pub assigned_sales_executive: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
}

impl Party {
    /// Name shown in dropdowns: display name when present, legal name
    /// otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

impl Searchable for Party {
    fn search_values(&self) -> Vec<String> {
        [
            Some(&self.name),
            self.display_name.as_ref(),
            self.customer_code.as_ref(),
            self.office_city.as_ref(),
            self.office_state.as_ref(),
            self.gstin_number.as_ref(),
            self.assigned_sales_executive.as_ref(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

impl Filterable for Party {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "party_type" => self.party_type.clone(),
            "approval_status" => self.approval_status.clone(),
            "office_city" => self.office_city.clone(),
            _ => None,
        }
    }
}

impl Timestamped for Party {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

impl ListRecord for Party {
    const NOUN: &'static str = "party";
    const NOUN_PLURAL: &'static str = "parties";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.shown_name().to_string()
    }
}
