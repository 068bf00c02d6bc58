use crate::{api::RemoteProcedures, error::BackendError, rest::RestClient};
use async_trait::async_trait;
use model::{
    ingestion::ProcessOutcome,
    sales::{PosEvent, PosEventOutcome, PosEventType},
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct ProcessRunArgs {
    p_run_id: Uuid,
    p_tenant_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct PosEventArgs<'a> {
    p_idempotency_key: Uuid,
    p_event_type: PosEventType,
    p_sku: &'a str,
    p_quantity: i64,
    p_point_of_sale_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct VerifyPasswordArgs<'a> {
    p_password: &'a str,
}

#[async_trait]
impl RemoteProcedures for RestClient {
    async fn process_ingestion_run(
        &self,
        run_id: Uuid,
        tenant_id: Option<Uuid>,
    ) -> Result<ProcessOutcome, BackendError> {
        let rows: Vec<ProcessOutcome> = self
            .rpc(
                "process_ingestion_run",
                &ProcessRunArgs {
                    p_run_id: run_id,
                    p_tenant_id: tenant_id,
                },
            )
            .await?;
        // The procedure returns a one-row set; an empty set means nothing
        // was staged, which the zero outcome already expresses.
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn process_pos_event(&self, event: &PosEvent) -> Result<PosEventOutcome, BackendError> {
        let rows: Vec<PosEventOutcome> = self
            .rpc(
                "process_pos_event",
                &PosEventArgs {
                    p_idempotency_key: event.idempotency_key,
                    p_event_type: event.event_type,
                    p_sku: &event.sku,
                    p_quantity: event.quantity,
                    p_point_of_sale_id: event.point_of_sale_id,
                },
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::NotFound("process_pos_event".to_string()))
    }

    async fn verify_csv_password(&self, password: &str) -> Result<bool, BackendError> {
        self.rpc("verify_csv_password", &VerifyPasswordArgs { p_password: password })
            .await
    }
}
