//! Filter-state-to-query synchronization for a remote task list
//!
//! This crate keeps a user's filter selections (status, sort field, sort
//! direction, free-text search) in sync with fetches against a remote
//! task server. Filter state is encoded into a canonical query key that
//! doubles as the request query string and the cache key; a debouncer
//! absorbs keystroke bursts, and a fetch coordinator deduplicates
//! in-flight requests and guarantees the view always reflects the most
//! recently requested key.

pub mod debounce;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod query;
pub mod session;
pub mod source;

#[cfg(test)]
pub(crate) mod test_support;

pub use debounce::Debouncer;
pub use error::{FetchError, FetchResult};
pub use fetch::{FetchCoordinator, FetchState, ViewState};
pub use filter::{FilterPatch, FilterSpec};
pub use models::{Order, SortBy, StatusFilter, Task};
pub use query::QueryKey;
pub use session::{DEFAULT_DEBOUNCE, Session};
pub use source::{HttpTaskSource, TaskSource};

// The coordinator and session are shared across tasks.
static_assertions::assert_impl_all!(FetchCoordinator: Send, Sync);
static_assertions::assert_impl_all!(Session: Send, Sync);
