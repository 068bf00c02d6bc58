use crate::{api::InventoryStore, error::BackendError, rest::RestClient};
use async_trait::async_trait;
use chrono::Utc;
use model::inventory::{InventoryInsert, InventoryRow};
use serde_json::json;
use uuid::Uuid;

const TABLE: &str = "inventory";

fn not_deleted() -> (&'static str, String) {
    ("deleted_at", "is.null".to_string())
}

#[async_trait]
impl InventoryStore for RestClient {
    async fn list(&self) -> Result<Vec<InventoryRow>, BackendError> {
        self.select(
            TABLE,
            &[
                ("select", "*".to_string()),
                not_deleted(),
                ("order", "name.asc".to_string()),
            ],
        )
        .await
    }

    async fn by_ids(&self, ids: &[Uuid]) -> Result<Vec<InventoryRow>, BackendError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let joined = ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.select(
            TABLE,
            &[
                ("select", "*".to_string()),
                not_deleted(),
                ("id", format!("in.({joined})")),
            ],
        )
        .await
    }

    async fn get(&self, id: Uuid) -> Result<InventoryRow, BackendError> {
        self.select_one(
            TABLE,
            &[
                ("select", "*".to_string()),
                not_deleted(),
                ("id", format!("eq.{id}")),
            ],
        )
        .await
    }

    async fn insert(&self, row: &InventoryInsert) -> Result<InventoryRow, BackendError> {
        self.insert_one(TABLE, row).await
    }

    async fn update_stocks(
        &self,
        id: Uuid,
        stock_sala: i64,
        stock_almacen: i64,
    ) -> Result<(), BackendError> {
        self.update(
            TABLE,
            &[("id", format!("eq.{id}"))],
            &json!({ "stock_sala": stock_sala, "stock_almacen": stock_almacen }),
        )
        .await
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), BackendError> {
        self.update(
            TABLE,
            &[("id", format!("eq.{id}"))],
            &json!({ "deleted_at": Utc::now() }),
        )
        .await
    }
}
