//! Cache-keyed fetch coordination
//!
//! The coordinator owns the map from query key to fetch state, enforces a
//! single in-flight fetch per key, and publishes the state for the most
//! recently requested key to observers. Results for superseded keys are
//! still cached under their own key but never overwrite the displayed
//! state, even when their response arrives later (last-key-wins).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use crate::error::FetchError;
use crate::models::Task;
use crate::query::QueryKey;
use crate::source::TaskSource;

/// Lifecycle of the result for one query key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// A fetch for this key is in flight
    #[default]
    Pending,
    /// The key resolved to a task list
    Ready(Vec<Task>),
    /// The fetch failed; retried only when the key is requested again
    Failed(FetchError),
}

impl FetchState {
    /// Whether a fetch for this key is still in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Whether this key resolved successfully
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// Whether the fetch for this key failed
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}

/// Snapshot handed outward to presentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Tasks for the most recently requested key, empty while loading
    pub items: Vec<Task>,
    /// Whether that key's fetch is still in flight
    pub is_loading: bool,
    /// Displayable error if that key's fetch failed
    pub error: Option<FetchError>,
}

impl ViewState {
    fn from_state(state: &FetchState) -> Self {
        match state {
            FetchState::Pending => ViewState {
                items: Vec::new(),
                is_loading: true,
                error: None,
            },
            FetchState::Ready(items) => ViewState {
                items: items.clone(),
                is_loading: false,
                error: None,
            },
            FetchState::Failed(err) => ViewState {
                items: Vec::new(),
                is_loading: false,
                error: Some(err.clone()),
            },
        }
    }
}

/// Outcome of admitting a request against the cache
enum Admission {
    /// A ready result was already cached for this key
    Cached(FetchState),
    /// Another fetch for this key is already in flight
    InFlight,
    /// This request owns the fetch for its key; the token identifies its
    /// flight so completions from before an invalidation can be dropped
    Fetch { token: u64 },
}

struct CoordState {
    cache: HashMap<QueryKey, FetchState>,
    latest: Option<QueryKey>,
    generation: u64,
}

/// Coordinates cache-keyed asynchronous fetches against a `TaskSource`
///
/// Only the coordinator mutates the cache; observers receive cloned
/// snapshots through the watch channel returned by [`subscribe`].
///
/// [`subscribe`]: FetchCoordinator::subscribe
pub struct FetchCoordinator {
    source: Arc<dyn TaskSource>,
    state: Mutex<CoordState>,
    view: watch::Sender<ViewState>,
}

impl FetchCoordinator {
    /// Create a coordinator backed by the given source
    pub fn new(source: Arc<dyn TaskSource>) -> Self {
        let (view, _) = watch::channel(ViewState::from_state(&FetchState::Pending));
        Self {
            source,
            state: Mutex::new(CoordState {
                cache: HashMap::new(),
                latest: None,
                generation: 0,
            }),
            view,
        }
    }

    /// Subscribe to the outward-facing result/loading state
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    /// Request the result for `key`
    ///
    /// A cached ready result is returned without a network operation; an
    /// in-flight fetch for the same key is not duplicated. Failed entries
    /// are refetched. The returned state is the final state of this key
    /// for this request, but the displayed state always tracks the most
    /// recently requested key regardless of completion order.
    pub async fn request(&self, key: QueryKey) -> FetchState {
        self.run(key, false).await
    }

    /// Like [`request`], but refetches even over a ready cache entry
    ///
    /// [`request`]: FetchCoordinator::request
    pub async fn refresh(&self, key: QueryKey) -> FetchState {
        self.run(key, true).await
    }

    /// Snapshot of the state for the most recently requested key
    pub fn current(&self) -> FetchState {
        let state = self.state.lock().unwrap();
        state
            .latest
            .as_ref()
            .and_then(|key| state.cache.get(key))
            .cloned()
            .unwrap_or_default()
    }

    /// The most recently requested key, if any request was made
    pub fn latest_key(&self) -> Option<QueryKey> {
        self.state.lock().unwrap().latest.clone()
    }

    /// Whether the most recently requested key is still in flight
    pub fn is_loading(&self) -> bool {
        self.current().is_pending()
    }

    /// Drop all cached entries so subsequent requests refetch
    ///
    /// Also supersedes every fetch currently in flight: their completions
    /// carry a pre-invalidation token and are discarded on arrival.
    pub fn invalidate_all(&self) {
        let mut state = self.state.lock().unwrap();
        state.cache.clear();
        state.generation += 1;
    }

    async fn run(&self, key: QueryKey, force: bool) -> FetchState {
        match self.admit(&key, force) {
            Admission::Cached(state) => {
                debug!(key = %key, "cache hit");
                state
            }
            Admission::InFlight => {
                debug!(key = %key, "fetch already in flight");
                FetchState::Pending
            }
            Admission::Fetch { token } => {
                debug!(key = %key, force, "fetching");
                let outcome = match self.source.fetch_tasks(&key).await {
                    Ok(items) => FetchState::Ready(items),
                    Err(err) => FetchState::Failed(err),
                };
                self.complete(&key, token, outcome.clone());
                outcome
            }
        }
    }

    /// Record `key` as latest and decide whether a fetch is needed
    fn admit(&self, key: &QueryKey, force: bool) -> Admission {
        let admission = {
            let mut state = self.state.lock().unwrap();
            state.latest = Some(key.clone());
            match state.cache.get(key) {
                Some(cached @ FetchState::Ready(_)) if !force => {
                    Admission::Cached(cached.clone())
                }
                Some(FetchState::Pending) => Admission::InFlight,
                _ => {
                    state.cache.insert(key.clone(), FetchState::Pending);
                    Admission::Fetch {
                        token: state.generation,
                    }
                }
            }
        };
        self.publish();
        admission
    }

    /// Store a completed outcome under its key
    ///
    /// A completion whose flight token predates the current generation was
    /// admitted before an invalidation; its data is discarded so it cannot
    /// overwrite a post-invalidation result for the same key.
    fn complete(&self, key: &QueryKey, token: u64, outcome: FetchState) {
        {
            let mut state = self.state.lock().unwrap();
            if token != state.generation {
                debug!(key = %key, "dropping completion from superseded flight");
                return;
            }
            state.cache.insert(key.clone(), outcome);
        }
        // Publication re-reads the latest key, so a completion for a
        // superseded key never overwrites the displayed state.
        self.publish();
    }

    fn publish(&self) {
        let snapshot = ViewState::from_state(&self.current());
        self.view.send_if_modified(|view| {
            if *view == snapshot {
                false
            } else {
                *view = snapshot;
                true
            }
        });
    }
}
