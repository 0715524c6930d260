//! User accounts managed from the admin pages.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// A user account as returned by `/admin/users`.
///
/// Roles are free-form strings on the wire (`admin`, `supervisor`,
/// `raw_material_checker`, ...); the backend owns the role catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: RecordId,
    pub email: String,
    pub username: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub serial_number_prefix: Option<String>,
    #[serde(default)]
    pub serial_number_counter: Option<i64>,
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
}

impl Searchable for UserAccount {
    fn search_values(&self) -> Vec<String> {
        vec![self.username.clone(), self.email.clone(), self.role.clone()]
    }
}

impl Filterable for UserAccount {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "role" => Some(self.role.clone()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

impl Timestamped for UserAccount {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.created_at)
    }
}

impl ListRecord for UserAccount {
    const NOUN: &'static str = "user";
    const NOUN_PLURAL: &'static str = "users";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.username.clone()
    }
}
