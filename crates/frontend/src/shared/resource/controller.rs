//! List screen state machine.
//!
//! One `ListState` instance owns the filter, page cursor, record cache, and
//! summary for a single resource screen. All transitions are synchronous:
//! fetch-starting operations hand out a ticket, the caller performs the
//! network call, and the result comes back through an `apply_*` method that
//! checks the ticket against the newest issued sequence number for its slot.
//! A response for a superseded request is discarded, so a slow page fetch can
//! never clobber state that a later filter change already replaced.

use contracts::domain::common::{Patch, ResourceRecord};
use contracts::shared::envelope::Paginated;

use super::cache::ListCache;
use super::client::ApiError;
use super::cursor::PageCursor;
use super::filter::ListFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Fetching,
}

/// Create/update/delete run through their own phase so the UI can disable
/// row actions independently of list loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Idle,
    Mutating,
}

/// One issued list fetch. `seq` decides staleness; `prev_page` is where the
/// cursor rolls back to when the fetch fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
    pub filter: ListFilter,
    prev_page: u32,
}

/// One issued summary fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTicket {
    pub seq: u64,
    pub filter: ListFilter,
}

/// A filter change or reload fetches the page and the summary concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub list: FetchTicket,
    pub summary: SummaryTicket,
}

#[derive(Clone)]
pub struct ListState<R: ResourceRecord, S: Clone + Send + Sync + 'static> {
    pub filter: ListFilter,
    pub cursor: PageCursor,
    pub items: ListCache<R>,
    pub summary: Option<S>,
    pub load: LoadPhase,
    pub mutation: MutationPhase,
    pub summary_loading: bool,
    /// Failure of the most recent list fetch. Cleared as soon as the next
    /// fetch is issued; a failed fetch keeps the previous page on screen.
    pub list_error: Option<String>,
    /// Failure of the most recent create/update/delete.
    pub mutation_error: Option<String>,
    /// Failure of the most recent summary fetch. Independent of the list
    /// channel: a dead summary never blocks a good page and vice versa.
    pub summary_error: Option<String>,
    list_seq: u64,
    summary_seq: u64,
}

impl<R: ResourceRecord, S: Clone + Send + Sync + 'static> ListState<R, S> {
    pub fn new(page_size: u32) -> Self {
        Self {
            filter: ListFilter::default(),
            cursor: PageCursor::new(page_size),
            items: ListCache::new(),
            summary: None,
            load: LoadPhase::Idle,
            mutation: MutationPhase::Idle,
            summary_loading: false,
            list_error: None,
            mutation_error: None,
            summary_error: None,
            list_seq: 0,
            summary_seq: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadPhase::Fetching
    }

    pub fn is_mutating(&self) -> bool {
        self.mutation == MutationPhase::Mutating
    }

    /// Apply a new filter: back to page 1, drop the summary, refetch both.
    /// Issuing the new tickets supersedes anything still in flight.
    pub fn set_filter(&mut self, filter: ListFilter) -> FetchPlan {
        self.filter = filter;
        self.cursor.reset();
        self.plan_fetch()
    }

    /// Refetch the current page and summary under the current filter.
    /// Used for the initial load and manual reloads.
    pub fn reload(&mut self) -> FetchPlan {
        self.plan_fetch()
    }

    fn plan_fetch(&mut self) -> FetchPlan {
        let list = self.issue_list_ticket(self.cursor.page, self.cursor.page);
        self.summary_seq += 1;
        self.summary = None;
        self.summary_error = None;
        self.summary_loading = true;
        FetchPlan {
            list,
            summary: SummaryTicket {
                seq: self.summary_seq,
                filter: self.filter.clone(),
            },
        }
    }

    /// Advance one page. `None` (no network call) while a fetch is in flight
    /// or when the server has not reported a further page.
    pub fn request_next(&mut self) -> Option<FetchTicket> {
        if self.is_loading() || !self.cursor.can_advance() {
            return None;
        }
        Some(self.issue_list_ticket(self.cursor.page + 1, self.cursor.page))
    }

    /// Go back one page. `None` at page 1 or while a fetch is in flight.
    pub fn request_prev(&mut self) -> Option<FetchTicket> {
        if self.is_loading() || !self.cursor.can_go_back() {
            return None;
        }
        Some(self.issue_list_ticket(self.cursor.page - 1, self.cursor.page))
    }

    fn issue_list_ticket(&mut self, page: u32, prev_page: u32) -> FetchTicket {
        self.cursor.page = page;
        self.list_seq += 1;
        self.load = LoadPhase::Fetching;
        // a retry starts with a clean banner, not the previous failure
        self.list_error = None;
        FetchTicket {
            seq: self.list_seq,
            page,
            filter: self.filter.clone(),
            prev_page,
        }
    }

    /// Resolve a list fetch. Stale tickets are discarded wholesale: neither
    /// the cache, nor the cursor, nor the error channel moves for them.
    pub fn apply_list(&mut self, ticket: &FetchTicket, result: Result<Paginated<R>, ApiError>) {
        if ticket.seq != self.list_seq {
            return;
        }
        self.load = LoadPhase::Idle;
        match result {
            Ok(page) => {
                self.cursor.apply(ticket.page, page.pagination.pages);
                self.items.replace_all(page.items);
                self.list_error = None;
            }
            Err(e) => {
                // Keep whatever page is on screen; just step the cursor back.
                self.cursor.page = ticket.prev_page;
                self.list_error = Some(e.to_string());
            }
        }
    }

    /// Resolve a summary fetch. Same staleness rule, separate error channel.
    pub fn apply_summary(&mut self, ticket: &SummaryTicket, result: Result<S, ApiError>) {
        if ticket.seq != self.summary_seq {
            return;
        }
        self.summary_loading = false;
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.summary_error = None;
            }
            Err(e) => {
                self.summary = None;
                self.summary_error = Some(e.to_string());
            }
        }
    }

    /// Gate for create/update/delete: one mutation at a time.
    pub fn begin_mutation(&mut self) -> bool {
        if self.is_mutating() {
            return false;
        }
        self.mutation = MutationPhase::Mutating;
        true
    }

    /// A confirmed create appends the server's record. The page may now hold
    /// one entry over the page size; the next fetch corrects that lazily.
    pub fn apply_created(&mut self, result: Result<R, ApiError>) {
        self.mutation = MutationPhase::Idle;
        match result {
            Ok(record) => {
                self.items.insert(record);
                self.mutation_error = None;
            }
            Err(e) => self.mutation_error = Some(e.to_string()),
        }
    }

    /// A confirmed update patches the cached record in place: the echoed
    /// entity wins, otherwise the submitted fields are merged. When the id
    /// has left the current page the cache view silently stays as is; the
    /// server remains authoritative.
    pub fn apply_updated<P: Patch<R>>(
        &mut self,
        id: i64,
        patch: &P,
        result: Result<Option<R>, ApiError>,
    ) {
        self.mutation = MutationPhase::Idle;
        match result {
            Ok(Some(record)) => {
                self.items.replace_by_id(id, record);
                self.mutation_error = None;
            }
            Ok(None) => {
                self.items.patch_by_id(id, |record| patch.apply_to(record));
                self.mutation_error = None;
            }
            Err(e) => self.mutation_error = Some(e.to_string()),
        }
    }

    /// A confirmed delete drops the record. No re-pagination to fill the gap,
    /// and no error when a concurrent fetch already removed it locally.
    pub fn apply_removed(&mut self, id: i64, result: Result<(), ApiError>) {
        self.mutation = MutationPhase::Idle;
        match result {
            Ok(()) => {
                self.items.remove_by_id(id);
                self.mutation_error = None;
            }
            Err(e) => self.mutation_error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Farm;
    use contracts::shared::envelope::PageInfo;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: String,
    }

    impl ResourceRecord for Row {
        fn id(&self) -> i64 {
            self.id
        }
    }

    struct Relabel(String);

    impl Patch<Row> for Relabel {
        fn apply_to(&self, record: &mut Row) {
            record.label = self.0.clone();
        }
    }

    fn row(id: i64, label: &str) -> Row {
        Row {
            id,
            label: label.to_string(),
        }
    }

    fn page(items: Vec<Row>, page: u32, pages: u32) -> Paginated<Row> {
        let total = items.len() as u64;
        Paginated {
            items,
            pagination: PageInfo {
                page,
                limit: 10,
                total,
                pages,
            },
        }
    }

    fn state() -> ListState<Row, String> {
        ListState::new(10)
    }

    fn loaded_state(pages: u32) -> ListState<Row, String> {
        let mut s = state();
        let plan = s.reload();
        s.apply_list(&plan.list, Ok(page(vec![row(1, "a"), row(2, "b")], 1, pages)));
        s.apply_summary(&plan.summary, Ok("summary".to_string()));
        s
    }

    fn farm_filter(farm: Farm) -> ListFilter {
        ListFilter {
            farm: Some(farm),
            ..ListFilter::default()
        }
    }

    #[test]
    fn initial_load_populates_cache_and_cursor() {
        let s = loaded_state(3);
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.cursor.page, 1);
        assert_eq!(s.cursor.total_pages, 3);
        assert!(s.cursor.can_advance());
        assert_eq!(s.summary.as_deref(), Some("summary"));
        assert!(!s.is_loading());
    }

    #[test]
    fn page_never_leaves_valid_bounds() {
        let mut s = loaded_state(3);

        // prev at page 1 is rejected locally
        assert!(s.request_prev().is_none());
        assert_eq!(s.cursor.page, 1);

        // walk forward to the last page
        for expected in [2u32, 3] {
            let t = s.request_next().expect("next within bounds");
            assert_eq!(t.page, expected);
            s.apply_list(&t, Ok(page(vec![row(10 + expected as i64, "x")], expected, 3)));
        }
        assert_eq!(s.cursor.page, 3);

        // next at the last page is rejected locally
        assert!(s.request_next().is_none());
        assert_eq!(s.cursor.page, 3);
    }

    #[test]
    fn next_observes_expected_page_sequence() {
        // totalPages = 3: pages observed are 1 -> 2 -> 3 -> 3
        let mut s = loaded_state(3);
        let mut observed = vec![s.cursor.page];
        for _ in 0..3 {
            if let Some(t) = s.request_next() {
                let p = t.page;
                s.apply_list(&t, Ok(page(vec![row(p as i64, "x")], p, 3)));
            }
            observed.push(s.cursor.page);
        }
        assert_eq!(observed, vec![1, 2, 3, 3]);
    }

    #[test]
    fn next_is_refused_while_a_fetch_is_in_flight() {
        let mut s = loaded_state(3);
        let t = s.request_next().unwrap();
        assert!(s.request_next().is_none());
        assert!(s.request_prev().is_none());
        s.apply_list(&t, Ok(page(vec![row(3, "c")], 2, 3)));
        assert!(s.request_next().is_some());
    }

    #[test]
    fn no_forward_navigation_until_page_count_is_known() {
        let mut s = state();
        // reload issued but nothing resolved yet: total_pages is still 0
        let _plan = s.reload();
        assert!(s.request_next().is_none());
    }

    #[test]
    fn failed_page_fetch_rolls_back_and_keeps_data() {
        let mut s = loaded_state(3);
        let before = s.items.to_vec();

        let t = s.request_next().unwrap();
        s.apply_list(&t, Err(ApiError::Transport("HTTP 500".into())));

        assert_eq!(s.cursor.page, 1);
        assert_eq!(s.items.to_vec(), before);
        assert_eq!(s.list_error.as_deref(), Some("request failed: HTTP 500"));
        assert!(!s.is_loading());

        // error is not terminal: the next attempt goes out and clears it
        let t = s.request_next().unwrap();
        s.apply_list(&t, Ok(page(vec![row(3, "c")], 2, 3)));
        assert!(s.list_error.is_none());
        assert_eq!(s.cursor.page, 2);
    }

    #[test]
    fn issuing_a_retry_clears_the_error_before_it_resolves() {
        let mut s = loaded_state(3);
        let t = s.request_next().unwrap();
        s.apply_list(&t, Err(ApiError::Transport("HTTP 500".into())));
        assert!(s.list_error.is_some());

        // the banner drops the moment the retry goes out, not when it lands
        let t = s.request_next().unwrap();
        assert!(s.list_error.is_none());
        assert!(s.is_loading());

        // a retry that also fails re-raises the error
        s.apply_list(&t, Err(ApiError::Transport("HTTP 500".into())));
        assert!(s.list_error.is_some());
    }

    #[test]
    fn new_fetch_plan_clears_a_stale_summary_error() {
        let mut s = state();
        let plan = s.reload();
        s.apply_summary(&plan.summary, Err(ApiError::Transport("HTTP 502".into())));
        assert!(s.summary_error.is_some());

        let _plan = s.set_filter(farm_filter(Farm::Matital));
        assert!(s.summary_error.is_none());
        assert!(s.summary_loading);
    }

    #[test]
    fn set_filter_resets_to_page_one_and_drops_summary() {
        let mut s = loaded_state(5);
        let t = s.request_next().unwrap();
        s.apply_list(&t, Ok(page(vec![row(3, "c")], 2, 5)));
        assert_eq!(s.cursor.page, 2);

        let plan = s.set_filter(farm_filter(Farm::Matital));
        assert_eq!(plan.list.page, 1);
        assert_eq!(plan.list.filter.farm, Some(Farm::Matital));
        assert_eq!(s.cursor.page, 1);
        assert_eq!(s.cursor.total_pages, 0);
        assert!(s.summary.is_none());
        assert!(s.summary_loading);
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut s = state();
        let plan_a = s.set_filter(farm_filter(Farm::Kaasi19));
        let plan_b = s.set_filter(farm_filter(Farm::Matital));

        // B resolves first, then A's slow response arrives
        s.apply_list(&plan_b.list, Ok(page(vec![row(2, "b")], 1, 1)));
        s.apply_list(&plan_a.list, Ok(page(vec![row(1, "a")], 1, 7)));

        assert_eq!(s.items.to_vec(), vec![row(2, "b")]);
        assert_eq!(s.cursor.total_pages, 1);
        assert_eq!(s.filter.farm, Some(Farm::Matital));
    }

    #[test]
    fn stale_summary_response_is_discarded() {
        let mut s = state();
        let plan_a = s.set_filter(farm_filter(Farm::Kaasi19));
        let plan_b = s.set_filter(farm_filter(Farm::Matital));

        s.apply_summary(&plan_b.summary, Ok("b".to_string()));
        s.apply_summary(&plan_a.summary, Ok("a".to_string()));

        assert_eq!(s.summary.as_deref(), Some("b"));
        assert!(!s.summary_loading);
    }

    #[test]
    fn stale_failure_does_not_disturb_newer_success() {
        let mut s = state();
        let plan_a = s.set_filter(farm_filter(Farm::Kaasi19));
        let plan_b = s.set_filter(farm_filter(Farm::Other));

        s.apply_list(&plan_b.list, Ok(page(vec![row(2, "b")], 1, 1)));
        s.apply_list(&plan_a.list, Err(ApiError::Transport("timeout".into())));

        assert!(s.list_error.is_none());
        assert_eq!(s.items.len(), 1);
        assert!(!s.is_loading());
    }

    #[test]
    fn set_filter_twice_with_same_arguments_is_idempotent() {
        let mut once = state();
        let plan = once.set_filter(farm_filter(Farm::Other));
        once.apply_list(&plan.list, Ok(page(vec![row(1, "a")], 1, 2)));
        once.apply_summary(&plan.summary, Ok("s".to_string()));

        let mut twice = state();
        let first = twice.set_filter(farm_filter(Farm::Other));
        let second = twice.set_filter(farm_filter(Farm::Other));
        twice.apply_list(&first.list, Ok(page(vec![row(1, "a")], 1, 2)));
        twice.apply_summary(&first.summary, Ok("s".to_string()));
        twice.apply_list(&second.list, Ok(page(vec![row(1, "a")], 1, 2)));
        twice.apply_summary(&second.summary, Ok("s".to_string()));

        assert_eq!(twice.items.to_vec(), once.items.to_vec());
        assert_eq!(twice.summary, once.summary);
        assert_eq!(twice.cursor, once.cursor);
    }

    #[test]
    fn create_appends_exactly_once() {
        let mut s = loaded_state(1);
        let len_before = s.items.len();

        assert!(s.begin_mutation());
        s.apply_created(Ok(row(7, "new")));

        assert_eq!(s.items.len(), len_before + 1);
        assert_eq!(
            s.items.as_slice().iter().filter(|r| r.id() == 7).count(),
            1
        );
        assert!(!s.is_mutating());
    }

    #[test]
    fn failed_create_leaves_cache_untouched() {
        let mut s = loaded_state(1);
        let before = s.items.to_vec();

        assert!(s.begin_mutation());
        s.apply_created(Err(ApiError::Api("validation failed".into())));

        assert_eq!(s.items.to_vec(), before);
        assert_eq!(s.mutation_error.as_deref(), Some("validation failed"));
    }

    #[test]
    fn update_patches_one_record_in_place() {
        let mut s = loaded_state(1);

        assert!(s.begin_mutation());
        s.apply_updated(1, &Relabel("a2".into()), Ok(None));

        assert_eq!(s.items.as_slice()[0], row(1, "a2"));
        assert_eq!(s.items.as_slice()[1], row(2, "b"));
    }

    #[test]
    fn update_prefers_the_echoed_record() {
        let mut s = loaded_state(1);

        assert!(s.begin_mutation());
        s.apply_updated(2, &Relabel("ignored".into()), Ok(Some(row(2, "echoed"))));

        assert_eq!(s.items.as_slice()[1], row(2, "echoed"));
    }

    #[test]
    fn update_for_a_departed_id_is_silently_dropped() {
        let mut s = loaded_state(1);
        let before = s.items.to_vec();

        assert!(s.begin_mutation());
        s.apply_updated(99, &Relabel("gone".into()), Ok(None));

        assert_eq!(s.items.to_vec(), before);
        assert!(s.mutation_error.is_none());
    }

    #[test]
    fn remove_deletes_exactly_one() {
        let mut s = loaded_state(1);

        assert!(s.begin_mutation());
        s.apply_removed(1, Ok(()));

        assert_eq!(s.items.len(), 1);
        assert!(!s.items.contains(1));
    }

    #[test]
    fn remove_race_with_page_replacement_is_harmless() {
        let mut s = loaded_state(3);

        // delete goes out for id 5, which is not on this page
        assert!(s.begin_mutation());

        // meanwhile a fetch replaces the page
        let t = s.request_next().unwrap();
        s.apply_list(&t, Ok(page(vec![row(8, "h"), row(9, "i")], 2, 3)));

        // the delete confirms: no panic, cache stays as the fetch left it
        s.apply_removed(5, Ok(()));
        assert_eq!(s.items.to_vec(), vec![row(8, "h"), row(9, "i")]);
        assert!(s.mutation_error.is_none());
    }

    #[test]
    fn second_mutation_is_refused_while_one_runs() {
        let mut s = loaded_state(1);
        assert!(s.begin_mutation());
        assert!(!s.begin_mutation());
        s.apply_created(Ok(row(5, "e")));
        assert!(s.begin_mutation());
    }

    #[test]
    fn summary_failure_is_independent_of_list_success() {
        let mut s = state();
        let plan = s.reload();
        s.apply_summary(&plan.summary, Err(ApiError::Transport("HTTP 502".into())));
        s.apply_list(&plan.list, Ok(page(vec![row(1, "a")], 1, 1)));

        assert_eq!(s.items.len(), 1);
        assert!(s.list_error.is_none());
        assert!(s.summary_error.is_some());
        assert!(s.summary.is_none());
    }

    #[test]
    fn list_failure_does_not_roll_back_summary() {
        let mut s = state();
        let plan = s.reload();
        s.apply_summary(&plan.summary, Ok("s".to_string()));
        s.apply_list(&plan.list, Err(ApiError::Api("boom".into())));

        assert_eq!(s.summary.as_deref(), Some("s"));
        assert!(s.list_error.is_some());
    }
}
