use connectors::api::RemoteProcedures;
use model::ingestion::ProcessOutcome;
use tracing::{info, warn};
use uuid::Uuid;

/// Client-side view of one processing attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingState {
    Idle,
    Running,
    Success(ProcessOutcome),
    Error(String),
}

impl ProcessingState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingState::Success(_) | ProcessingState::Error(_))
    }
}

/// Drives the remote run processor exactly once.
///
/// Owns the `idle → running → {success, error}` transitions of the
/// processing step: the single RPC either returns or throws, a terminal
/// state is final, and repeat calls never reach the network again. There is
/// no retry, cancellation or progress streaming.
#[derive(Debug)]
pub struct ProcessingFlow {
    run_id: String,
    tenant_id: Option<Uuid>,
    state: ProcessingState,
}

impl ProcessingFlow {
    pub fn new(run_id: impl Into<String>, tenant_id: Option<Uuid>) -> Self {
        ProcessingFlow {
            run_id: run_id.into(),
            tenant_id,
            state: ProcessingState::Idle,
        }
    }

    pub fn state(&self) -> &ProcessingState {
        &self.state
    }

    pub async fn execute<P>(&mut self, backend: &P) -> &ProcessingState
    where
        P: RemoteProcedures + ?Sized,
    {
        if self.state != ProcessingState::Idle {
            return &self.state;
        }

        let run_id = match Uuid::parse_str(self.run_id.trim()) {
            Ok(id) => id,
            Err(_) => {
                self.state = ProcessingState::Error(format!("invalid run id: '{}'", self.run_id));
                return &self.state;
            }
        };

        self.state = ProcessingState::Running;
        self.state = match backend.process_ingestion_run(run_id, self.tenant_id).await {
            Ok(outcome) => {
                info!(
                    "run {run_id} processed: {} rows, {} ok, {} failed",
                    outcome.processed, outcome.succeeded, outcome.failed
                );
                ProcessingState::Success(outcome)
            }
            Err(err) => {
                warn!("run {run_id} failed to process: {err}");
                ProcessingState::Error(err.to_string())
            }
        };
        &self.state
    }
}
