use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Total stock below this counts as "low" in the inventory filters.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// One live inventory row as stored by the backend.
///
/// `stock_sala` is sales-floor stock, `stock_almacen` warehouse stock; both
/// are expected non-negative. Rows are soft-deleted via `deleted_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub size: String,
    pub color: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub stock_sala: i64,
    pub stock_almacen: i64,
    pub location: String,
    pub zone: String,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryRow {
    /// Combined floor and warehouse stock.
    pub fn total_stock(&self) -> i64 {
        self.stock_sala + self.stock_almacen
    }

    pub fn is_low_stock(&self) -> bool {
        self.total_stock() < LOW_STOCK_THRESHOLD
    }
}

/// Insert shape for `inventory`; the server fills id and timestamps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryInsert {
    pub sku: String,
    pub name: String,
    pub size: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub stock_sala: i64,
    pub stock_almacen: i64,
    pub location: String,
    pub zone: String,
}
