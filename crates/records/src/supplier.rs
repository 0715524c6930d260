//! Raw-material suppliers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// A supplier as returned by `/raw-material/suppliers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
}

fn default_true() -> bool {
    true
}

impl Searchable for Supplier {
    fn search_values(&self) -> Vec<String> {
        [
            Some(&self.name),
            self.code.as_ref(),
            self.contact_person.as_ref(),
            self.email.as_ref(),
            self.phone.as_ref(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

impl Filterable for Supplier {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

impl Timestamped for Supplier {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

impl ListRecord for Supplier {
    const NOUN: &'static str = "supplier";
    const NOUN_PLURAL: &'static str = "suppliers";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}
