use contracts::domain::expense::{CreateExpense, Expense, ExpenseSummary, UpdateExpense};
use contracts::shared::envelope::Paginated;

use crate::shared::api_utils::api_base;
use crate::shared::resource::{ApiClient, ApiError, ListFilter, ResourceClient};
use crate::system::auth::context::token_provider;

#[derive(Clone)]
pub struct ExpenseClient {
    api: ApiClient,
}

impl ExpenseClient {
    /// Client bound to the session token from the surrounding auth context.
    pub fn from_context() -> Self {
        Self {
            api: ApiClient::new(api_base(), token_provider()),
        }
    }
}

impl ResourceClient for ExpenseClient {
    type Record = Expense;
    type Create = CreateExpense;
    type Update = UpdateExpense;
    type Summary = ExpenseSummary;

    async fn list(
        &self,
        page: u32,
        limit: u32,
        filter: &ListFilter,
    ) -> Result<Paginated<Expense>, ApiError> {
        self.api
            .get(&format!("/expenses?{}", filter.list_query(page, limit)))
            .await
    }

    async fn create(&self, body: &CreateExpense) -> Result<Expense, ApiError> {
        self.api.post("/expenses", body).await
    }

    async fn update(&self, id: i64, body: &UpdateExpense) -> Result<Option<Expense>, ApiError> {
        self.api.put(&format!("/expenses/{id}"), body).await
    }

    async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/expenses/{id}")).await
    }

    async fn summary(&self, filter: &ListFilter) -> Result<ExpenseSummary, ApiError> {
        self.api
            .get(&format!("/expenses/summary{}", filter.summary_query()))
            .await
    }
}
