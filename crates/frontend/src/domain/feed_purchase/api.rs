use contracts::domain::feed_purchase::{
    CreateFeedPurchase, FeedPurchase, FeedSummary, UpdateFeedPurchase,
};
use contracts::shared::envelope::Paginated;

use crate::shared::api_utils::api_base;
use crate::shared::resource::{ApiClient, ApiError, ListFilter, ResourceClient};
use crate::system::auth::context::token_provider;

#[derive(Clone)]
pub struct FeedPurchaseClient {
    api: ApiClient,
}

impl FeedPurchaseClient {
    pub fn from_context() -> Self {
        Self {
            api: ApiClient::new(api_base(), token_provider()),
        }
    }
}

impl ResourceClient for FeedPurchaseClient {
    type Record = FeedPurchase;
    type Create = CreateFeedPurchase;
    type Update = UpdateFeedPurchase;
    type Summary = FeedSummary;

    async fn list(
        &self,
        page: u32,
        limit: u32,
        filter: &ListFilter,
    ) -> Result<Paginated<FeedPurchase>, ApiError> {
        self.api
            .get(&format!("/feed-purchase?{}", filter.list_query(page, limit)))
            .await
    }

    async fn create(&self, body: &CreateFeedPurchase) -> Result<FeedPurchase, ApiError> {
        self.api.post("/feed-purchase", body).await
    }

    async fn update(
        &self,
        id: i64,
        body: &UpdateFeedPurchase,
    ) -> Result<Option<FeedPurchase>, ApiError> {
        self.api.put(&format!("/feed-purchase/{id}"), body).await
    }

    async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/feed-purchase/{id}")).await
    }

    async fn summary(&self, filter: &ListFilter) -> Result<FeedSummary, ApiError> {
        self.api
            .get(&format!("/feed-purchase/summary{}", filter.summary_query()))
            .await
    }
}
