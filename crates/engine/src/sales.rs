use crate::error::EngineError;
use connectors::api::RemoteProcedures;
use model::sales::{PosEvent, PosEventOutcome, PosEventType};
use tracing::info;
use uuid::Uuid;

/// One "register sale" action from the floor.
#[derive(Debug, Clone)]
pub struct SaleRequest {
    pub sku: String,
    pub quantity: i64,
    pub point_of_sale_id: Option<Uuid>,
}

/// Submits the sale as a single atomic point-of-sale event.
///
/// Stock decrement, history insert and replenishment queueing all happen
/// inside the remote procedure, so there is no window where the three
/// records can drift apart. The fresh idempotency key makes an interrupted
/// submit safe to repeat.
pub async fn register_sale<P>(
    backend: &P,
    request: &SaleRequest,
) -> Result<PosEventOutcome, EngineError>
where
    P: RemoteProcedures + ?Sized,
{
    if request.sku.trim().is_empty() {
        return Err(EngineError::validation("sku is required"));
    }
    if request.quantity < 1 {
        return Err(EngineError::validation("quantity must be at least 1"));
    }

    let event = PosEvent {
        idempotency_key: Uuid::new_v4(),
        event_type: PosEventType::Sale,
        sku: request.sku.trim().to_string(),
        quantity: request.quantity,
        point_of_sale_id: request.point_of_sale_id,
    };

    let outcome = backend.process_pos_event(&event).await?;
    if outcome.replenishment_generated {
        info!("sale of '{}' emptied the floor; replenishment queued", event.sku);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use connectors::{api::RemoteProcedures, error::BackendError};
    use model::ingestion::ProcessOutcome;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGateway {
        events: Mutex<Vec<PosEvent>>,
    }

    #[async_trait]
    impl RemoteProcedures for FakeGateway {
        async fn process_ingestion_run(
            &self,
            _run_id: Uuid,
            _tenant_id: Option<Uuid>,
        ) -> Result<ProcessOutcome, BackendError> {
            unreachable!("not exercised here")
        }

        async fn process_pos_event(
            &self,
            event: &PosEvent,
        ) -> Result<PosEventOutcome, BackendError> {
            self.events.lock().unwrap().push(event.clone());
            Ok(PosEventOutcome {
                remaining_stock: 3,
                replenishment_generated: false,
            })
        }

        async fn verify_csv_password(&self, _password: &str) -> Result<bool, BackendError> {
            unreachable!("not exercised here")
        }
    }

    #[tokio::test]
    async fn submits_one_sale_event_with_a_fresh_key() {
        let gateway = FakeGateway::default();
        let request = SaleRequest {
            sku: " ZR001-42-BC ".into(),
            quantity: 2,
            point_of_sale_id: None,
        };

        let outcome = register_sale(&gateway, &request).await.unwrap();
        assert_eq!(outcome.remaining_stock, 3);

        let events = gateway.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sku, "ZR001-42-BC");
        assert_eq!(events[0].event_type, PosEventType::Sale);
        assert_ne!(events[0].idempotency_key, Uuid::nil());
    }

    #[tokio::test]
    async fn rejects_blank_sku_and_zero_quantity_before_the_network() {
        let gateway = FakeGateway::default();

        let blank = SaleRequest {
            sku: "   ".into(),
            quantity: 1,
            point_of_sale_id: None,
        };
        assert!(matches!(
            register_sale(&gateway, &blank).await,
            Err(EngineError::Validation(_))
        ));

        let zero = SaleRequest {
            sku: "A1".into(),
            quantity: 0,
            point_of_sale_id: None,
        };
        assert!(matches!(
            register_sale(&gateway, &zero).await,
            Err(EngineError::Validation(_))
        ));

        assert!(gateway.events.lock().unwrap().is_empty());
    }
}
