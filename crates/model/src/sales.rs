use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded sale, as read back from `sales_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: Uuid,
    pub product_name: String,
    pub sku: String,
    pub size: String,
    pub color: String,
    pub quantity_sold: i64,
    #[serde(default)]
    pub remaining_stock: Option<i64>,
    #[serde(default)]
    pub replenishment_generated: bool,
    pub sale_date: DateTime<Utc>,
    #[serde(default)]
    pub point_of_sale_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfSale {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosEventType {
    Sale,
    Return,
}

/// One point-of-sale stock movement, submitted to the atomic
/// `process_pos_event` procedure.
///
/// The backend applies each idempotency key at most once; replaying a key
/// returns the stored outcome instead of moving stock again, so a submit
/// interrupted mid-flight is safe to repeat.
#[derive(Debug, Clone, Serialize)]
pub struct PosEvent {
    pub idempotency_key: Uuid,
    pub event_type: PosEventType,
    pub sku: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_sale_id: Option<Uuid>,
}

/// What the procedure reports back after applying (or replaying) an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosEventOutcome {
    pub remaining_stock: i64,
    pub replenishment_generated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_event_wire_shape() {
        let event = PosEvent {
            idempotency_key: Uuid::nil(),
            event_type: PosEventType::Sale,
            sku: "ZR001-42-BC".into(),
            quantity: 1,
            point_of_sale_id: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "sale");
        assert_eq!(json["quantity"], 1);
        assert!(json.get("point_of_sale_id").is_none());
    }
}
