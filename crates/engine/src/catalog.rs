use crate::error::EngineError;
use connectors::api::InventoryStore;
use model::{
    catalog,
    inventory::{InventoryInsert, InventoryRow},
};
use tracing::info;
use uuid::Uuid;

/// Form input for a new product.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub size: String,
    pub color: String,
    pub gender: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock_sala: i64,
    pub stock_almacen: i64,
    pub location: String,
    pub zone: String,
}

/// Validates and inserts a new product, inferring the category from the
/// name when the form left it blank.
pub async fn add_product<B>(backend: &B, product: NewProduct) -> Result<InventoryRow, EngineError>
where
    B: InventoryStore + ?Sized,
{
    if product.name.trim().is_empty() {
        return Err(EngineError::validation("product name is required"));
    }
    if product.sku.trim().is_empty() {
        return Err(EngineError::validation("sku is required"));
    }
    if product.size.trim().is_empty() {
        return Err(EngineError::validation("size is required"));
    }
    if product.color.trim().is_empty() {
        return Err(EngineError::validation("color is required"));
    }
    if product.stock_sala < 0 || product.stock_almacen < 0 {
        return Err(EngineError::validation("stock counters cannot be negative"));
    }

    let category = product
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| catalog::categorize(&product.name).category.to_string());

    let insert = InventoryInsert {
        sku: product.sku,
        name: product.name,
        size: product.size,
        color: product.color,
        gender: product.gender,
        brand: product.brand,
        category: Some(category),
        price: product.price,
        stock_sala: product.stock_sala,
        stock_almacen: product.stock_almacen,
        location: product.location,
        zone: product.zone,
    };

    let row = backend.insert(&insert).await?;
    info!("added product '{}' ({})", row.name, row.sku);
    Ok(row)
}

/// Soft-deletes a product; its sales history stays intact.
pub async fn remove_product<B>(backend: &B, id: Uuid) -> Result<(), EngineError>
where
    B: InventoryStore + ?Sized,
{
    backend.soft_delete(id).await?;
    Ok(())
}

/// Client-side filters over the inventory listing.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    /// Case-insensitive match over name, sku and size.
    pub search: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub zone: Option<String>,
    pub gender: Option<String>,
    pub low_stock_only: bool,
}

impl InventoryFilter {
    pub fn matches(&self, row: &InventoryRow) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = row.name.to_lowercase().contains(&term)
                || row.sku.to_lowercase().contains(&term)
                || row.size.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if !self.sizes.is_empty() && !self.sizes.contains(&row.size) {
            return false;
        }
        if !self.colors.is_empty() && !self.colors.contains(&row.color) {
            return false;
        }
        if let Some(zone) = &self.zone
            && &row.zone != zone
        {
            return false;
        }
        if let Some(gender) = &self.gender
            && row.gender.as_deref() != Some(gender.as_str())
        {
            return false;
        }
        if self.low_stock_only && !row.is_low_stock() {
            return false;
        }
        true
    }
}

/// Lists the live inventory with the given filters applied client-side.
pub async fn list_products<B>(
    backend: &B,
    filter: &InventoryFilter,
) -> Result<Vec<InventoryRow>, EngineError>
where
    B: InventoryStore + ?Sized,
{
    let rows = backend.list().await?;
    Ok(rows.into_iter().filter(|row| filter.matches(row)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use connectors::error::BackendError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeInventory {
        inserted: Mutex<Vec<InventoryInsert>>,
        rows: Mutex<Vec<InventoryRow>>,
    }

    #[async_trait]
    impl InventoryStore for FakeInventory {
        async fn list(&self) -> Result<Vec<InventoryRow>, BackendError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn by_ids(&self, _ids: &[Uuid]) -> Result<Vec<InventoryRow>, BackendError> {
            unreachable!("not exercised here")
        }

        async fn get(&self, _id: Uuid) -> Result<InventoryRow, BackendError> {
            unreachable!("not exercised here")
        }

        async fn insert(&self, row: &InventoryInsert) -> Result<InventoryRow, BackendError> {
            self.inserted.lock().unwrap().push(row.clone());
            Ok(InventoryRow {
                id: Uuid::new_v4(),
                sku: row.sku.clone(),
                name: row.name.clone(),
                size: row.size.clone(),
                color: row.color.clone(),
                gender: row.gender.clone(),
                brand: row.brand.clone(),
                category: row.category.clone(),
                price: row.price,
                stock_sala: row.stock_sala,
                stock_almacen: row.stock_almacen,
                location: row.location.clone(),
                zone: row.zone.clone(),
                deleted_at: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn update_stocks(
            &self,
            _id: Uuid,
            _stock_sala: i64,
            _stock_almacen: i64,
        ) -> Result<(), BackendError> {
            unreachable!("not exercised here")
        }

        async fn soft_delete(&self, _id: Uuid) -> Result<(), BackendError> {
            Ok(())
        }
    }

    fn valid_product() -> NewProduct {
        NewProduct {
            sku: "ZR001-42-BC".into(),
            name: "Zapatillas Running Blanco".into(),
            size: "42".into(),
            color: "Blanco".into(),
            location: "P3-L-E2-A1".into(),
            zone: "Zona B".into(),
            stock_sala: 2,
            stock_almacen: 5,
            ..NewProduct::default()
        }
    }

    #[tokio::test]
    async fn infers_a_category_when_the_form_left_it_blank() {
        let backend = FakeInventory::default();
        let row = add_product(&backend, valid_product()).await.unwrap();
        assert_eq!(row.category.as_deref(), Some("zapatillas"));
    }

    #[tokio::test]
    async fn keeps_an_explicit_category() {
        let backend = FakeInventory::default();
        let mut product = valid_product();
        product.category = Some("calzado".into());
        let row = add_product(&backend, product).await.unwrap();
        assert_eq!(row.category.as_deref(), Some("calzado"));
    }

    #[tokio::test]
    async fn required_fields_are_checked_before_the_network() {
        let backend = FakeInventory::default();
        for missing in ["sku", "name", "size", "color"] {
            let mut product = valid_product();
            match missing {
                "sku" => product.sku = "  ".into(),
                "name" => product.name = String::new(),
                "size" => product.size = String::new(),
                _ => product.color = String::new(),
            }
            assert!(
                matches!(
                    add_product(&backend, product).await,
                    Err(EngineError::Validation(_))
                ),
                "expected a validation error for a missing {missing}"
            );
        }

        let mut negative = valid_product();
        negative.stock_almacen = -1;
        assert!(matches!(
            add_product(&backend, negative).await,
            Err(EngineError::Validation(_))
        ));

        assert!(backend.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn filters_compose_over_the_listing() {
        let backend = FakeInventory::default();
        for (name, size, color, sala, almacen) in [
            ("Camiseta Básica Azul", "M", "Azul", 10, 15),
            ("Camiseta Básica Roja", "L", "Rojo", 1, 2),
            ("Zapatillas Running Blanco", "42", "Blanco", 3, 4),
        ] {
            let mut product = valid_product();
            product.sku = format!("{name}-{size}");
            product.name = name.into();
            product.size = size.into();
            product.color = color.into();
            product.stock_sala = sala;
            product.stock_almacen = almacen;
            let row = add_product(&backend, product).await.unwrap();
            backend.rows.lock().unwrap().push(row);
        }

        let search = InventoryFilter {
            search: Some("camiseta".into()),
            ..InventoryFilter::default()
        };
        assert_eq!(list_products(&backend, &search).await.unwrap().len(), 2);

        let low_stock = InventoryFilter {
            search: Some("camiseta".into()),
            low_stock_only: true,
            ..InventoryFilter::default()
        };
        let rows = list_products(&backend, &low_stock).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Camiseta Básica Roja");

        let by_color = InventoryFilter {
            colors: vec!["Blanco".into()],
            ..InventoryFilter::default()
        };
        let rows = list_products(&backend, &by_color).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].size, "42");
    }
}
