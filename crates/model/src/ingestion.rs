use crate::staging::StagedRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle of one CSV-upload attempt.
///
/// The client creates runs as `pending`; every later transition belongs to
/// the remote processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Processing,
    Done,
    Error,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Processing => "processing",
            RunStatus::Done => "done",
            RunStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Done | RunStatus::Error)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One upload attempt, tracked as a staging record with row counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionRun {
    pub id: Uuid,
    pub source: String,
    pub status: RunStatus,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub total_rows: i64,
    #[serde(default)]
    pub processed_rows: i64,
    #[serde(default)]
    pub error_rows: i64,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Done,
    Error,
}

/// One uninterpreted row of a run, held until the remote processor consumes
/// it. Its lifetime is tied to the run; the client never deletes items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionItem {
    pub id: Uuid,
    pub run_id: Uuid,
    pub raw: StagedRecord,
    #[serde(default)]
    pub normalized: Option<serde_json::Value>,
    pub status: ItemStatus,
    #[serde(default)]
    pub error_text: Option<String>,
    #[serde(default)]
    pub row_hash: Option<String>,
}

/// Insert shape for `ingestion_items`; the content hash is computed at
/// staging time so the processor can detect duplicate rows cheaply.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionItemInsert {
    pub run_id: Uuid,
    pub raw: StagedRecord,
    pub row_hash: String,
}

impl IngestionItemInsert {
    pub fn new(run_id: Uuid, raw: StagedRecord) -> Self {
        let row_hash = raw.row_hash();
        IngestionItemInsert {
            run_id,
            raw,
            row_hash,
        }
    }
}

/// Summary counts returned by the remote run processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub processed: i64,
    pub succeeded: i64,
    pub failed: i64,
}

impl ProcessOutcome {
    pub fn is_partial_failure(&self) -> bool {
        self.failed > 0 && self.processed > 0
    }
}
