//! Session wiring for filter-driven fetching
//!
//! A `Session` owns the committed filter state for one UI session and
//! drives the pipeline: partial updates commit immediately (status, sort
//! field, direction) or through the debouncer (search text); every commit
//! re-derives the query key and hands it to the fetch coordinator, whose
//! result/loading state flows outward through a watch channel.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::debounce::Debouncer;
use crate::error::FetchResult;
use crate::fetch::{FetchCoordinator, FetchState, ViewState};
use crate::filter::{FilterPatch, FilterSpec};
use crate::models::Task;
use crate::source::TaskSource;

/// Default quiescence period for search input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// One UI session's filter state and fetch pipeline
///
/// The session is the only owner of its committed `FilterSpec`; there is
/// no process-wide state. Presentation feeds it `FilterPatch` values and
/// observes the resulting `ViewState` stream.
pub struct Session {
    shared: Arc<Shared>,
}

struct Shared {
    filter: Mutex<FilterSpec>,
    coordinator: FetchCoordinator,
    source: Arc<dyn TaskSource>,
    debouncer: Debouncer,
}

impl Session {
    /// Create a session with the default debounce window
    pub fn new(source: Arc<dyn TaskSource>) -> Self {
        Self::with_debounce(source, DEFAULT_DEBOUNCE)
    }

    /// Create a session with an explicit debounce window
    pub fn with_debounce(source: Arc<dyn TaskSource>, debounce: Duration) -> Self {
        let coordinator = FetchCoordinator::new(Arc::clone(&source));
        Self {
            shared: Arc::new(Shared {
                filter: Mutex::new(FilterSpec::default()),
                coordinator,
                source,
                debouncer: Debouncer::new(debounce),
            }),
        }
    }

    /// Subscribe to the outward-facing result/loading state
    pub fn view(&self) -> watch::Receiver<ViewState> {
        self.shared.coordinator.subscribe()
    }

    /// The current committed filter selection
    pub fn filter(&self) -> FilterSpec {
        self.shared.filter.lock().unwrap().clone()
    }

    /// Issue the initial fetch for the committed (default) filter state
    pub fn start(&self) {
        Shared::spawn_fetch(&self.shared, false);
    }

    /// Apply a partial filter update
    ///
    /// Status, sort field, and direction commit immediately and trigger a
    /// re-fetch for the re-derived key. Search text is staged through the
    /// debouncer; only the value surviving the quiescence period commits.
    pub fn update_filter(&self, patch: FilterPatch) {
        let FilterPatch {
            status,
            sort_by,
            order,
            search,
        } = patch;

        let immediate = status.is_some() || sort_by.is_some() || order.is_some();
        if immediate {
            let mut spec = self.shared.filter.lock().unwrap();
            if let Some(status) = status {
                spec.status = status;
            }
            if let Some(sort_by) = sort_by {
                spec.sort_by = sort_by;
            }
            if let Some(order) = order {
                spec.order = order;
            }
        }

        if let Some(text) = search {
            let shared = Arc::clone(&self.shared);
            self.shared.debouncer.submit(text, move |value| {
                debug!(search = %value, "search committed");
                shared.filter.lock().unwrap().search = value;
                Shared::spawn_fetch(&shared, false);
            });
        }

        if immediate {
            Shared::spawn_fetch(&self.shared, false);
        }
    }

    /// Forward a new task body to the create-task collaborator
    ///
    /// On success the query cache is invalidated and the current key is
    /// force-refreshed so the new task shows up. Failures are returned to
    /// the caller and leave the cache untouched.
    pub async fn submit_task(&self, body: &str) -> FetchResult<Task> {
        let task = self.shared.source.create_task(body).await?;
        self.refresh_after_mutation();
        Ok(task)
    }

    /// Mark the task with the given id as completed
    ///
    /// On success the query cache is invalidated and the current key is
    /// force-refreshed, the same as after a create.
    pub async fn complete_task(&self, id: &str) -> FetchResult<()> {
        self.shared.source.set_completed(id, true).await?;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Delete the task with the given id
    ///
    /// On success the query cache is invalidated and the current key is
    /// force-refreshed. Failures leave the cache untouched.
    pub async fn delete_task(&self, id: &str) -> FetchResult<()> {
        self.shared.source.delete_task(id).await?;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Invalidate every cached key and re-fetch the current one
    fn refresh_after_mutation(&self) {
        self.shared.coordinator.invalidate_all();
        Shared::spawn_fetch(&self.shared, true);
    }
}

impl Shared {
    /// Re-derive the key from the committed spec and request it
    fn spawn_fetch(shared: &Arc<Shared>, force: bool) {
        let key = shared.filter.lock().unwrap().query_key();
        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            let state = if force {
                shared.coordinator.refresh(key).await
            } else {
                shared.coordinator.request(key).await
            };
            if let FetchState::Failed(err) = state {
                warn!(error = %err, "task fetch failed");
            }
        });
    }
}
