use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

/// One row of the replenishment queue: how many units of a product are owed
/// to the sales floor from the warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentEntry {
    pub id: Uuid,
    pub inventory_id: Uuid,
    pub quantity_needed: i64,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A queue entry joined with its inventory row, ready for the picking list.
#[derive(Debug, Clone, Serialize)]
pub struct PendingProduct {
    pub inventory_id: Uuid,
    pub name: String,
    pub size: String,
    pub color: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub priority: Priority,
    pub quantity_needed: i64,
}
