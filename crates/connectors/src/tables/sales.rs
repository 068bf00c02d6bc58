use crate::{api::SalesStore, error::BackendError, rest::RestClient};
use async_trait::async_trait;
use model::sales::{PointOfSale, SaleRecord};

#[async_trait]
impl SalesStore for RestClient {
    async fn recent_sales(&self, limit: u32) -> Result<Vec<SaleRecord>, BackendError> {
        self.select(
            "sales_history",
            &[
                ("select", "*".to_string()),
                ("order", "sale_date.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn points_of_sale(&self) -> Result<Vec<PointOfSale>, BackendError> {
        self.select(
            "points_of_sale",
            &[
                ("select", "*".to_string()),
                ("order", "name.asc".to_string()),
            ],
        )
        .await
    }
}
