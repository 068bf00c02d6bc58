use crate::error::EngineError;
use connectors::api::{InventoryStore, ReplenishmentStore};
use model::replenishment::PendingProduct;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Sort key for a warehouse location code like `P3-R-E2-A1`.
///
/// Aisle number first, right side before left, then the shelf code.
/// Unparseable parts sort after everything else.
fn location_sort_key(location: &str) -> (u32, u8, String) {
    let mut parts = location.split('-');
    let aisle = parts
        .next()
        .and_then(|p| p.trim_start_matches('P').parse::<u32>().ok())
        .unwrap_or(999);
    let side = match parts.next() {
        Some("R") => 0,
        _ => 1,
    };
    let shelf = parts
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("ZZZ")
        .to_string();
    (aisle, side, shelf)
}

/// The picking list: every queue entry still owing stock, joined with its
/// inventory row and ordered by warehouse location so one pass through the
/// aisles covers it. Queue entries whose product has disappeared are
/// skipped.
pub async fn pending_products<B>(backend: &B) -> Result<Vec<PendingProduct>, EngineError>
where
    B: ReplenishmentStore + InventoryStore + ?Sized,
{
    let queue = backend.pending().await?;
    if queue.is_empty() {
        return Ok(Vec::new());
    }

    let mut ids: Vec<Uuid> = queue.iter().map(|entry| entry.inventory_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let inventory: HashMap<Uuid, _> = backend
        .by_ids(&ids)
        .await?
        .into_iter()
        .map(|row| (row.id, row))
        .collect();

    let mut products: Vec<PendingProduct> = queue
        .iter()
        .filter_map(|entry| {
            let row = inventory.get(&entry.inventory_id)?;
            Some(PendingProduct {
                inventory_id: row.id,
                name: row.name.clone(),
                size: row.size.clone(),
                color: row.color.clone(),
                location: row.location.clone(),
                price: row.price,
                priority: entry.priority,
                quantity_needed: entry.quantity_needed,
            })
        })
        .collect();

    products.sort_by(|a, b| location_sort_key(&a.location).cmp(&location_sort_key(&b.location)));
    Ok(products)
}

/// What came of one "mark as restocked" click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockOutcome {
    Restocked { remaining_needed: i64 },
    /// Nothing to move: the warehouse itself is empty.
    NoWarehouseStock,
}

/// Moves one unit from the warehouse to the sales floor and shrinks the
/// queue entry, deleting it once nothing more is owed.
///
/// Three separate round trips with no transaction around them; an
/// interruption in between can leave the records inconsistent until the
/// next restock pass.
pub async fn mark_restocked<B>(
    backend: &B,
    inventory_id: Uuid,
) -> Result<RestockOutcome, EngineError>
where
    B: InventoryStore + ReplenishmentStore + ?Sized,
{
    let row = backend.get(inventory_id).await?;
    if row.stock_almacen <= 0 {
        return Ok(RestockOutcome::NoWarehouseStock);
    }

    backend
        .update_stocks(inventory_id, row.stock_sala + 1, (row.stock_almacen - 1).max(0))
        .await?;

    let Some(entry) = backend.for_inventory(inventory_id).await? else {
        return Ok(RestockOutcome::Restocked { remaining_needed: 0 });
    };

    let remaining = (entry.quantity_needed - 1).max(0);
    if remaining > 0 {
        backend.set_quantity(entry.id, remaining).await?;
    } else {
        backend.remove(entry.id).await?;
    }
    info!("restocked '{}': {remaining} still owed to the floor", row.name);

    Ok(RestockOutcome::Restocked { remaining_needed: remaining })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use connectors::error::BackendError;
    use model::{
        inventory::{InventoryInsert, InventoryRow},
        replenishment::{Priority, ReplenishmentEntry},
    };
    use std::sync::Mutex;

    struct FakeBackend {
        inventory: Mutex<Vec<InventoryRow>>,
        queue: Mutex<Vec<ReplenishmentEntry>>,
    }

    fn inventory_row(name: &str, location: &str, sala: i64, almacen: i64) -> InventoryRow {
        InventoryRow {
            id: Uuid::new_v4(),
            sku: format!("{name}-sku"),
            name: name.into(),
            size: "M".into(),
            color: "Azul".into(),
            gender: None,
            brand: None,
            category: None,
            price: Some(29.9),
            stock_sala: sala,
            stock_almacen: almacen,
            location: location.into(),
            zone: "Zona A".into(),
            deleted_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn queue_entry(inventory_id: Uuid, needed: i64) -> ReplenishmentEntry {
        ReplenishmentEntry {
            id: Uuid::new_v4(),
            inventory_id,
            quantity_needed: needed,
            priority: Priority::Normal,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl InventoryStore for FakeBackend {
        async fn list(&self) -> Result<Vec<InventoryRow>, BackendError> {
            Ok(self.inventory.lock().unwrap().clone())
        }

        async fn by_ids(&self, ids: &[Uuid]) -> Result<Vec<InventoryRow>, BackendError> {
            Ok(self
                .inventory
                .lock()
                .unwrap()
                .iter()
                .filter(|row| ids.contains(&row.id))
                .cloned()
                .collect())
        }

        async fn get(&self, id: Uuid) -> Result<InventoryRow, BackendError> {
            self.inventory
                .lock()
                .unwrap()
                .iter()
                .find(|row| row.id == id)
                .cloned()
                .ok_or_else(|| BackendError::NotFound("inventory".into()))
        }

        async fn insert(&self, _row: &InventoryInsert) -> Result<InventoryRow, BackendError> {
            unreachable!("not exercised here")
        }

        async fn update_stocks(
            &self,
            id: Uuid,
            stock_sala: i64,
            stock_almacen: i64,
        ) -> Result<(), BackendError> {
            let mut inventory = self.inventory.lock().unwrap();
            let row = inventory.iter_mut().find(|row| row.id == id).unwrap();
            row.stock_sala = stock_sala;
            row.stock_almacen = stock_almacen;
            Ok(())
        }

        async fn soft_delete(&self, _id: Uuid) -> Result<(), BackendError> {
            unreachable!("not exercised here")
        }
    }

    #[async_trait]
    impl ReplenishmentStore for FakeBackend {
        async fn pending(&self) -> Result<Vec<ReplenishmentEntry>, BackendError> {
            Ok(self
                .queue
                .lock()
                .unwrap()
                .iter()
                .filter(|entry| entry.quantity_needed > 0)
                .cloned()
                .collect())
        }

        async fn for_inventory(
            &self,
            inventory_id: Uuid,
        ) -> Result<Option<ReplenishmentEntry>, BackendError> {
            Ok(self
                .queue
                .lock()
                .unwrap()
                .iter()
                .find(|entry| entry.inventory_id == inventory_id)
                .cloned())
        }

        async fn set_quantity(&self, id: Uuid, quantity_needed: i64) -> Result<(), BackendError> {
            let mut queue = self.queue.lock().unwrap();
            queue
                .iter_mut()
                .find(|entry| entry.id == id)
                .unwrap()
                .quantity_needed = quantity_needed;
            Ok(())
        }

        async fn remove(&self, id: Uuid) -> Result<(), BackendError> {
            self.queue.lock().unwrap().retain(|entry| entry.id != id);
            Ok(())
        }
    }

    #[test]
    fn location_keys_order_aisle_then_side_then_shelf() {
        let mut locations = vec!["P2-L-E1", "P1-L-E3", "P10-R-E1", "P1-R-E2", "bad-code"];
        locations.sort_by_key(|loc| location_sort_key(loc));
        assert_eq!(
            locations,
            vec!["P1-R-E2", "P1-L-E3", "P2-L-E1", "P10-R-E1", "bad-code"]
        );
    }

    #[tokio::test]
    async fn pending_products_join_sort_and_skip_orphans() {
        let far = inventory_row("Botas Negro", "P3-L-E6", 0, 3);
        let near = inventory_row("Camiseta Azul", "P1-R-E2", 1, 5);
        let orphan_id = Uuid::new_v4();
        let backend = FakeBackend {
            queue: Mutex::new(vec![
                queue_entry(far.id, 2),
                queue_entry(near.id, 1),
                queue_entry(orphan_id, 4),
            ]),
            inventory: Mutex::new(vec![far, near]),
        };

        let products = pending_products(&backend).await.unwrap();
        assert_eq!(products.len(), 2, "orphaned queue entries are skipped");
        assert_eq!(products[0].name, "Camiseta Azul");
        assert_eq!(products[1].name, "Botas Negro");
        assert_eq!(products[1].quantity_needed, 2);
    }

    #[tokio::test]
    async fn restock_moves_stock_and_decrements_the_queue() {
        let row = inventory_row("Camiseta Azul", "P1-R-E2", 0, 4);
        let id = row.id;
        let backend = FakeBackend {
            queue: Mutex::new(vec![queue_entry(id, 2)]),
            inventory: Mutex::new(vec![row]),
        };

        let outcome = mark_restocked(&backend, id).await.unwrap();
        assert_eq!(outcome, RestockOutcome::Restocked { remaining_needed: 1 });

        let inventory = backend.inventory.lock().unwrap();
        assert_eq!(inventory[0].stock_sala, 1);
        assert_eq!(inventory[0].stock_almacen, 3);
        assert_eq!(backend.queue.lock().unwrap()[0].quantity_needed, 1);
    }

    #[tokio::test]
    async fn restock_deletes_the_entry_at_zero() {
        let row = inventory_row("Camiseta Azul", "P1-R-E2", 2, 1);
        let id = row.id;
        let backend = FakeBackend {
            queue: Mutex::new(vec![queue_entry(id, 1)]),
            inventory: Mutex::new(vec![row]),
        };

        let outcome = mark_restocked(&backend, id).await.unwrap();
        assert_eq!(outcome, RestockOutcome::Restocked { remaining_needed: 0 });
        assert!(backend.queue.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn restock_with_an_empty_warehouse_is_a_no_op() {
        let row = inventory_row("Camiseta Azul", "P1-R-E2", 1, 0);
        let id = row.id;
        let backend = FakeBackend {
            queue: Mutex::new(vec![queue_entry(id, 1)]),
            inventory: Mutex::new(vec![row]),
        };

        let outcome = mark_restocked(&backend, id).await.unwrap();
        assert_eq!(outcome, RestockOutcome::NoWarehouseStock);
        assert_eq!(backend.inventory.lock().unwrap()[0].stock_sala, 1);
        assert_eq!(backend.queue.lock().unwrap()[0].quantity_needed, 1);
    }
}
