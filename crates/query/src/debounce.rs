//! Debounced commit of rapidly-changing values
//!
//! Search-box input must not trigger a fetch on every keystroke. The
//! debouncer restarts a quiescence timer on each submission and commits
//! only the value that survives an idle period.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time;
use tracing::debug;

/// Timer-based debouncer with restart-on-input semantics
///
/// Each `submit` supersedes any value still waiting on its timer; a
/// superseded value is discarded without side effect. When input stops,
/// exactly one commit fires, carrying the final value.
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The quiescence period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stage `value` for commit after the quiescence period
    ///
    /// Restarts the timer: if another value arrives before this one's
    /// timer elapses, `commit` is never called for it. Must be called
    /// from within a tokio runtime.
    pub fn submit<F>(&self, value: String, commit: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;
        tokio::spawn(async move {
            time::sleep(delay).await;
            // Still the newest submission once the timer elapses?
            if generation.load(Ordering::SeqCst) == token {
                debug!(value = %value, "debounce timer elapsed, committing");
                commit(value);
            }
        });
    }

    /// Discard any staged value without committing it
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
