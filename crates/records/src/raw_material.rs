//! Raw-material orders placed with suppliers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doorworks_core::{RecordId, SoftDelete};
use doorworks_filter::{Filterable, Searchable, Timestamped};

use crate::list_record::ListRecord;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Ordered,
    Delivered,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Ordered => "ordered",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
        }
    }
}

/// An order as returned by `/raw-material/orders`.
///
/// `total_amount` is backend-computed (`unit_price * quantity`); the client
/// never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterialOrder {
    pub id: RecordId,
    pub order_number: String,
    #[serde(default)]
    pub supplier_id: Option<RecordId>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub soft_delete: SoftDelete,
}

impl Searchable for RawMaterialOrder {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.order_number.clone()];
        if let Some(supplier) = &self.supplier_name {
            values.push(supplier.clone());
        }
        if let Some(material) = &self.material_name {
            values.push(material.clone());
        }
        values
    }
}

impl Filterable for RawMaterialOrder {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "supplier_id" => self.supplier_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

impl Timestamped for RawMaterialOrder {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.created_at)
    }
}

impl ListRecord for RawMaterialOrder {
    const NOUN: &'static str = "order";
    const NOUN_PLURAL: &'static str = "orders";

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.soft_delete.is_deleted
    }

    fn display_label(&self) -> String {
        self.order_number.clone()
    }
}
