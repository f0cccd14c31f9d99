//! Leptos wiring for [`ListState`].
//!
//! The handle owns the state signal plus the resource client and turns every
//! controller operation into a `spawn_local` round trip: take a ticket from
//! the state, run the request, feed the result back through `apply_*`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::ResourceClient;
use super::controller::{FetchPlan, FetchTicket, ListState, SummaryTicket};
use super::filter::ListFilter;

pub struct ResourceListHandle<C>
where
    C: ResourceClient + Clone + Send + Sync + 'static,
{
    pub state: RwSignal<ListState<C::Record, C::Summary>>,
    client: C,
    page_size: u32,
}

impl<C> Clone for ResourceListHandle<C>
where
    C: ResourceClient + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            client: self.client.clone(),
            page_size: self.page_size,
        }
    }
}

impl<C> ResourceListHandle<C>
where
    C: ResourceClient + Clone + Send + Sync + 'static,
{
    pub fn new(client: C, page_size: u32) -> Self {
        Self {
            state: RwSignal::new(ListState::new(page_size)),
            client,
            page_size,
        }
    }

    /// Initial load / manual reload of the current page and summary.
    pub fn load(&self) {
        let plan = self.state.try_update(|s| s.reload());
        self.run_plan(plan);
    }

    pub fn set_filter(&self, filter: ListFilter) {
        let plan = self.state.try_update(|s| s.set_filter(filter));
        self.run_plan(plan);
    }

    pub fn next_page(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.request_next()).flatten() {
            self.run_list(ticket);
        }
    }

    pub fn prev_page(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.request_prev()).flatten() {
            self.run_list(ticket);
        }
    }

    pub fn create(&self, body: C::Create) {
        if !self.begin_mutation() {
            return;
        }
        let client = self.client.clone();
        let state = self.state;
        spawn_local(async move {
            let result = client.create(&body).await;
            if let Err(e) = &result {
                log::error!("create failed: {e}");
            }
            state.update(|s| s.apply_created(result));
        });
    }

    pub fn update(&self, id: i64, body: C::Update) {
        if !self.begin_mutation() {
            return;
        }
        let client = self.client.clone();
        let state = self.state;
        spawn_local(async move {
            let result = client.update(id, &body).await;
            if let Err(e) = &result {
                log::error!("update of #{id} failed: {e}");
            }
            state.update(|s| s.apply_updated(id, &body, result));
        });
    }

    pub fn remove(&self, id: i64) {
        if !self.begin_mutation() {
            return;
        }
        let client = self.client.clone();
        let state = self.state;
        spawn_local(async move {
            let result = client.remove(id).await;
            if let Err(e) = &result {
                log::error!("delete of #{id} failed: {e}");
            }
            state.update(|s| s.apply_removed(id, result));
        });
    }

    fn begin_mutation(&self) -> bool {
        self.state
            .try_update(|s| s.begin_mutation())
            .unwrap_or(false)
    }

    fn run_plan(&self, plan: Option<FetchPlan>) {
        if let Some(plan) = plan {
            self.run_list(plan.list);
            self.run_summary(plan.summary);
        }
    }

    fn run_list(&self, ticket: FetchTicket) {
        let client = self.client.clone();
        let state = self.state;
        let limit = self.page_size;
        spawn_local(async move {
            let result = client.list(ticket.page, limit, &ticket.filter).await;
            if let Err(e) = &result {
                log::error!("list fetch (page {}) failed: {e}", ticket.page);
            }
            state.update(|s| s.apply_list(&ticket, result));
        });
    }

    fn run_summary(&self, ticket: SummaryTicket) {
        let client = self.client.clone();
        let state = self.state;
        spawn_local(async move {
            let result = client.summary(&ticket.filter).await;
            if let Err(e) = &result {
                log::error!("summary fetch failed: {e}");
            }
            state.update(|s| s.apply_summary(&ticket, result));
        });
    }
}
