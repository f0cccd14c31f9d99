//! Generic resource list machinery.
//!
//! Every tracked resource (expenses, feed purchases, egg production, egg
//! sales) presents the same screen: a farm/date-range filter, a paginated
//! record list, a server-computed summary, and create/edit/delete actions.
//! This module implements that screen's logic once:
//!
//! - [`filter::ListFilter`]: farm + date-range filter and its query string
//! - [`cursor::PageCursor`]: page position and bounds
//! - [`cache::ListCache`]: the currently displayed page of records
//! - [`controller::ListState`]: the state machine tying them together,
//!   including the staleness guard for overlapping fetches
//! - [`client`]: the `ResourceClient` trait and the REST implementation glue
//! - [`hook`]: Leptos wiring, signals plus `spawn_local` drivers
//!
//! `ListState` is deliberately synchronous: operations hand out tickets, the
//! hook performs the network call, and results come back through `apply_*`
//! methods. That keeps every invariant unit-testable without a browser.

pub mod cache;
pub mod client;
pub mod controller;
pub mod cursor;
pub mod filter;
pub mod hook;

pub use cache::ListCache;
pub use client::{ApiClient, ApiError, ResourceClient};
pub use controller::{FetchPlan, FetchTicket, ListState, LoadPhase, MutationPhase, SummaryTicket};
pub use cursor::PageCursor;
pub use filter::ListFilter;
pub use hook::ResourceListHandle;
