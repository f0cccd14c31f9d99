use contracts::domain::egg_sale::{CreateEggSale, EggSale, EggSaleSummary, UpdateEggSale};
use contracts::shared::envelope::Paginated;

use crate::shared::api_utils::api_base;
use crate::shared::resource::{ApiClient, ApiError, ListFilter, ResourceClient};
use crate::system::auth::context::token_provider;

#[derive(Clone)]
pub struct EggSaleClient {
    api: ApiClient,
}

impl EggSaleClient {
    pub fn from_context() -> Self {
        Self {
            api: ApiClient::new(api_base(), token_provider()),
        }
    }
}

impl ResourceClient for EggSaleClient {
    type Record = EggSale;
    type Create = CreateEggSale;
    type Update = UpdateEggSale;
    type Summary = EggSaleSummary;

    async fn list(
        &self,
        page: u32,
        limit: u32,
        filter: &ListFilter,
    ) -> Result<Paginated<EggSale>, ApiError> {
        self.api
            .get(&format!("/egg-sales?{}", filter.list_query(page, limit)))
            .await
    }

    async fn create(&self, body: &CreateEggSale) -> Result<EggSale, ApiError> {
        self.api.post("/egg-sales", body).await
    }

    async fn update(&self, id: i64, body: &UpdateEggSale) -> Result<Option<EggSale>, ApiError> {
        self.api.put(&format!("/egg-sales/{id}"), body).await
    }

    async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/egg-sales/{id}")).await
    }

    async fn summary(&self, filter: &ListFilter) -> Result<EggSaleSummary, ApiError> {
        self.api
            .get(&format!("/egg-sales/summary{}", filter.summary_query()))
            .await
    }
}
