use crate::{api::StagingStore, error::BackendError, rest::RestClient};
use async_trait::async_trait;
use model::{
    ingestion::{IngestionItem, IngestionItemInsert, IngestionRun},
    staging::StagedRecord,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

const RUNS_TABLE: &str = "ingestion_runs";
const ITEMS_TABLE: &str = "ingestion_items";

#[derive(Debug, Serialize)]
struct RunInsert<'a> {
    source: &'a str,
    notes: Option<&'a str>,
}

#[async_trait]
impl StagingStore for RestClient {
    async fn create_run(
        &self,
        source: &str,
        notes: Option<&str>,
    ) -> Result<IngestionRun, BackendError> {
        let run: IngestionRun = self.insert_one(RUNS_TABLE, &RunInsert { source, notes }).await?;
        info!("created ingestion run {}", run.id);
        Ok(run)
    }

    async fn insert_items(
        &self,
        run_id: Uuid,
        records: &[StagedRecord],
    ) -> Result<u64, BackendError> {
        if records.is_empty() {
            return Ok(0);
        }
        let payload: Vec<IngestionItemInsert> = records
            .iter()
            .map(|raw| IngestionItemInsert::new(run_id, raw.clone()))
            .collect();
        self.insert_bulk(ITEMS_TABLE, &payload).await
    }

    async fn fetch_run(&self, run_id: Uuid) -> Result<IngestionRun, BackendError> {
        self.select_one(
            RUNS_TABLE,
            &[
                ("select", "*".to_string()),
                ("id", format!("eq.{run_id}")),
            ],
        )
        .await
    }

    async fn run_items(&self, run_id: Uuid) -> Result<Vec<IngestionItem>, BackendError> {
        self.select(
            ITEMS_TABLE,
            &[
                ("select", "*".to_string()),
                ("run_id", format!("eq.{run_id}")),
                ("order", "id".to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[tokio::test]
    async fn empty_item_set_never_touches_the_network() {
        // Port 1 refuses connections, so any attempted request would error.
        let client =
            RestClient::new(&BackendConfig::new("http://127.0.0.1:1", "test-key")).unwrap();
        let count = client.insert_items(Uuid::new_v4(), &[]).await.unwrap();
        assert_eq!(count, 0);
    }
}
