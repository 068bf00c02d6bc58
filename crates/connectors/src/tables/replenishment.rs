use crate::{api::ReplenishmentStore, error::BackendError, rest::RestClient};
use async_trait::async_trait;
use model::replenishment::ReplenishmentEntry;
use serde_json::json;
use uuid::Uuid;

const TABLE: &str = "replenishment_queue";

#[async_trait]
impl ReplenishmentStore for RestClient {
    async fn pending(&self) -> Result<Vec<ReplenishmentEntry>, BackendError> {
        self.select(
            TABLE,
            &[
                ("select", "*".to_string()),
                ("quantity_needed", "gt.0".to_string()),
                ("order", "inventory_id".to_string()),
            ],
        )
        .await
    }

    async fn for_inventory(
        &self,
        inventory_id: Uuid,
    ) -> Result<Option<ReplenishmentEntry>, BackendError> {
        let mut rows: Vec<ReplenishmentEntry> = self
            .select(
                TABLE,
                &[
                    ("select", "*".to_string()),
                    ("inventory_id", format!("eq.{inventory_id}")),
                ],
            )
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn set_quantity(&self, id: Uuid, quantity_needed: i64) -> Result<(), BackendError> {
        self.update(
            TABLE,
            &[("id", format!("eq.{id}"))],
            &json!({ "quantity_needed": quantity_needed }),
        )
        .await
    }

    async fn remove(&self, id: Uuid) -> Result<(), BackendError> {
        self.delete(TABLE, &[("id", format!("eq.{id}"))]).await
    }
}
