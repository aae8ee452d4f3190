//! Test utilities for exercising the synchronization core
//!
//! Provides a scripted in-memory `TaskSource` so coordinator and session
//! behavior can be tested without a network, including per-key latencies
//! for completion-order races.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{FetchError, FetchResult};
use crate::models::Task;
use crate::query::QueryKey;
use crate::source::TaskSource;

/// Build a task fixture with a creation timestamp of now
pub fn task(id: &str, body: &str, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        body: body.to_string(),
        completed,
        created_at: Utc::now(),
    }
}

#[derive(Clone)]
struct Scripted {
    result: FetchResult<Vec<Task>>,
    delay: Duration,
}

/// Scripted task source keyed by encoded query string
///
/// Unscripted keys answer with an empty list. Records every fetched key
/// and created body for assertions.
pub struct MockSource {
    responses: Mutex<HashMap<String, Scripted>>,
    fetched: Mutex<Vec<String>>,
    created: Mutex<Vec<String>>,
    completions: Mutex<Vec<(String, bool)>>,
    deleted: Mutex<Vec<String>>,
    fail_create: Mutex<Option<FetchError>>,
    fail_update: Mutex<Option<FetchError>>,
    fail_delete: Mutex<Option<FetchError>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            fetched: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            completions: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_create: Mutex::new(None),
            fail_update: Mutex::new(None),
            fail_delete: Mutex::new(None),
        }
    }

    /// Script an immediate successful response for `key`
    pub fn respond(&self, key: &str, tasks: Vec<Task>) {
        self.respond_after(key, tasks, Duration::ZERO);
    }

    /// Script a successful response for `key` delivered after `delay`
    pub fn respond_after(&self, key: &str, tasks: Vec<Task>, delay: Duration) {
        self.responses.lock().unwrap().insert(
            key.to_string(),
            Scripted {
                result: Ok(tasks),
                delay,
            },
        );
    }

    /// Script a failure for `key`
    pub fn fail(&self, key: &str, err: FetchError) {
        self.responses.lock().unwrap().insert(
            key.to_string(),
            Scripted {
                result: Err(err),
                delay: Duration::ZERO,
            },
        );
    }

    /// Make the next `create_task` calls fail
    pub fn fail_create(&self, err: FetchError) {
        *self.fail_create.lock().unwrap() = Some(err);
    }

    /// Make the next `set_completed` calls fail
    pub fn fail_update(&self, err: FetchError) {
        *self.fail_update.lock().unwrap() = Some(err);
    }

    /// Make the next `delete_task` calls fail
    pub fn fail_delete(&self, err: FetchError) {
        *self.fail_delete.lock().unwrap() = Some(err);
    }

    /// Number of outbound fetches issued
    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }

    /// Encoded keys in the order they were fetched
    pub fn fetched_keys(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// Bodies passed to `create_task`, in order
    pub fn created_bodies(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// `(id, completed)` pairs passed to `set_completed`, in order
    pub fn completed_updates(&self) -> Vec<(String, bool)> {
        self.completions.lock().unwrap().clone()
    }

    /// Ids passed to `delete_task`, in order
    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskSource for MockSource {
    async fn fetch_tasks(&self, key: &QueryKey) -> FetchResult<Vec<Task>> {
        self.fetched.lock().unwrap().push(key.as_str().to_string());
        let scripted = self.responses.lock().unwrap().get(key.as_str()).cloned();
        match scripted {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result
            }
            None => Ok(Vec::new()),
        }
    }

    async fn create_task(&self, body: &str) -> FetchResult<Task> {
        if let Some(err) = self.fail_create.lock().unwrap().clone() {
            return Err(err);
        }
        self.created.lock().unwrap().push(body.to_string());
        Ok(task("created", body, false))
    }

    async fn set_completed(&self, id: &str, completed: bool) -> FetchResult<()> {
        if let Some(err) = self.fail_update.lock().unwrap().clone() {
            return Err(err);
        }
        self.completions
            .lock()
            .unwrap()
            .push((id.to_string(), completed));
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> FetchResult<()> {
        if let Some(err) = self.fail_delete.lock().unwrap().clone() {
            return Err(err);
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}
