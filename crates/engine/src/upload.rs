use crate::error::EngineError;
use connectors::api::StagingStore;
use model::{ingestion::IngestionRun, staging::StagedRecord};
use tracing::info;

/// Result of staging one CSV upload.
#[derive(Debug, Clone)]
pub struct StagedUpload {
    pub run: IngestionRun,
    pub staged: u64,
}

/// Creates an ingestion run and stages every mapped record under it.
///
/// The whole record set goes out as a single bulk insert, no chunking, and
/// failures from either round trip propagate unmodified. The staged rows sit
/// untouched until the remote processor consumes the run.
pub async fn stage_upload<S>(
    backend: &S,
    source: &str,
    notes: Option<&str>,
    records: &[StagedRecord],
) -> Result<StagedUpload, EngineError>
where
    S: StagingStore + ?Sized,
{
    if records.is_empty() {
        return Err(EngineError::validation("no mapped rows to import"));
    }

    let run = backend.create_run(source, notes).await?;
    let staged = backend.insert_items(run.id, records).await?;
    info!("staged {staged} rows under run {}", run.id);

    Ok(StagedUpload { run, staged })
}
