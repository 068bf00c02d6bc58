use crate::error::BackendError;
use async_trait::async_trait;
use model::{
    ingestion::{IngestionItem, IngestionRun, ProcessOutcome},
    inventory::{InventoryInsert, InventoryRow},
    replenishment::ReplenishmentEntry,
    sales::{PointOfSale, PosEvent, PosEventOutcome, SaleRecord},
    staging::StagedRecord,
};
use uuid::Uuid;

/// Staging tables behind the ingestion wizard.
#[async_trait]
pub trait StagingStore: Send + Sync {
    /// Inserts one `ingestion_runs` row and returns it.
    async fn create_run(
        &self,
        source: &str,
        notes: Option<&str>,
    ) -> Result<IngestionRun, BackendError>;

    /// Bulk-inserts mapped rows tied to `run_id` and returns the inserted
    /// count. Empty input is a no-op returning 0 without a network write.
    async fn insert_items(
        &self,
        run_id: Uuid,
        records: &[StagedRecord],
    ) -> Result<u64, BackendError>;

    async fn fetch_run(&self, run_id: Uuid) -> Result<IngestionRun, BackendError>;

    /// Staged rows of a run, including per-row status and error text.
    async fn run_items(&self, run_id: Uuid) -> Result<Vec<IngestionItem>, BackendError>;
}

/// The live `inventory` table.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Non-deleted rows, ordered by name.
    async fn list(&self) -> Result<Vec<InventoryRow>, BackendError>;

    async fn by_ids(&self, ids: &[Uuid]) -> Result<Vec<InventoryRow>, BackendError>;

    async fn get(&self, id: Uuid) -> Result<InventoryRow, BackendError>;

    async fn insert(&self, row: &InventoryInsert) -> Result<InventoryRow, BackendError>;

    async fn update_stocks(
        &self,
        id: Uuid,
        stock_sala: i64,
        stock_almacen: i64,
    ) -> Result<(), BackendError>;

    /// Soft delete: stamps `deleted_at`, the row itself stays.
    async fn soft_delete(&self, id: Uuid) -> Result<(), BackendError>;
}

/// The `replenishment_queue` table.
#[async_trait]
pub trait ReplenishmentStore: Send + Sync {
    /// Entries still owing stock (`quantity_needed > 0`), ordered by
    /// inventory id.
    async fn pending(&self) -> Result<Vec<ReplenishmentEntry>, BackendError>;

    async fn for_inventory(
        &self,
        inventory_id: Uuid,
    ) -> Result<Option<ReplenishmentEntry>, BackendError>;

    async fn set_quantity(&self, id: Uuid, quantity_needed: i64) -> Result<(), BackendError>;

    async fn remove(&self, id: Uuid) -> Result<(), BackendError>;
}

/// Read access to sales history and points of sale.
#[async_trait]
pub trait SalesStore: Send + Sync {
    async fn recent_sales(&self, limit: u32) -> Result<Vec<SaleRecord>, BackendError>;

    async fn points_of_sale(&self) -> Result<Vec<PointOfSale>, BackendError>;
}

/// Named remote procedures. Their bodies live in the backend; the client
/// only sees the contract.
#[async_trait]
pub trait RemoteProcedures: Send + Sync {
    /// Drains the staged rows of a run into the live inventory and reports
    /// summary counts.
    async fn process_ingestion_run(
        &self,
        run_id: Uuid,
        tenant_id: Option<Uuid>,
    ) -> Result<ProcessOutcome, BackendError>;

    /// Applies one point-of-sale stock movement atomically.
    async fn process_pos_event(&self, event: &PosEvent) -> Result<PosEventOutcome, BackendError>;

    /// Checks the supervisor password guarding the CSV wizard.
    async fn verify_csv_password(&self, password: &str) -> Result<bool, BackendError>;
}
