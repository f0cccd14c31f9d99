use contracts::domain::egg_production::{
    CreateEggProduction, EggProduction, EggProductionSummary, UpdateEggProduction,
};
use contracts::shared::envelope::Paginated;

use crate::shared::api_utils::api_base;
use crate::shared::resource::{ApiClient, ApiError, ListFilter, ResourceClient};
use crate::system::auth::context::token_provider;

#[derive(Clone)]
pub struct EggProductionClient {
    api: ApiClient,
}

impl EggProductionClient {
    pub fn from_context() -> Self {
        Self {
            api: ApiClient::new(api_base(), token_provider()),
        }
    }
}

impl ResourceClient for EggProductionClient {
    type Record = EggProduction;
    type Create = CreateEggProduction;
    type Update = UpdateEggProduction;
    type Summary = EggProductionSummary;

    async fn list(
        &self,
        page: u32,
        limit: u32,
        filter: &ListFilter,
    ) -> Result<Paginated<EggProduction>, ApiError> {
        self.api
            .get(&format!("/egg-productions?{}", filter.list_query(page, limit)))
            .await
    }

    async fn create(&self, body: &CreateEggProduction) -> Result<EggProduction, ApiError> {
        self.api.post("/egg-productions", body).await
    }

    async fn update(
        &self,
        id: i64,
        body: &UpdateEggProduction,
    ) -> Result<Option<EggProduction>, ApiError> {
        self.api.put(&format!("/egg-productions/{id}"), body).await
    }

    async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/egg-productions/{id}")).await
    }

    async fn summary(&self, filter: &ListFilter) -> Result<EggProductionSummary, ApiError> {
        self.api
            .get(&format!("/egg-productions/summary{}", filter.summary_query()))
            .await
    }
}
