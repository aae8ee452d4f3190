//! Remote task source
//!
//! The `TaskSource` trait is the seam between the synchronization core and
//! the data collaborator; `HttpTaskSource` is the production implementation
//! speaking the server's JSON-over-HTTP contract.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::models::Task;
use crate::query::QueryKey;

/// Message used when a failing response carries no error body
const GENERIC_SERVER_ERROR: &str = "something went wrong";

/// A remote collaborator serving task data
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch the task list matching the given query key
    async fn fetch_tasks(&self, key: &QueryKey) -> FetchResult<Vec<Task>>;

    /// Create a new task with the given body text
    async fn create_task(&self, body: &str) -> FetchResult<Task>;

    /// Set the completion state of the task with the given id
    async fn set_completed(&self, id: &str, completed: bool) -> FetchResult<()>;

    /// Delete the task with the given id
    async fn delete_task(&self, id: &str) -> FetchResult<()>;
}

/// Error body shape the server uses for failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP implementation of `TaskSource`
///
/// Issues `GET {base}/tasks?{key}` and `POST {base}/tasks` against the
/// remote server. The query string is exactly the canonical key, so the
/// wire request mirrors the key's default-omission rule.
pub struct HttpTaskSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskSource {
    /// Create a source for the server at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Full URL for the task listing endpoint under the given key
    fn tasks_url(&self, key: &QueryKey) -> String {
        if key.is_empty() {
            format!("{}/tasks", self.base_url)
        } else {
            format!("{}/tasks?{}", self.base_url, key)
        }
    }

    /// Full URL for the single-task endpoint
    fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

/// Build a `Server` error from a failing response body
fn server_error(status: StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
    FetchError::Server {
        status: status.as_u16(),
        message,
    }
}

/// Decode a successful listing payload
///
/// The server answers `null` rather than `[]` for an empty collection.
fn decode_tasks(body: &str) -> FetchResult<Vec<Task>> {
    let tasks: Option<Vec<Task>> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse {
            message: e.to_string(),
        })?;
    Ok(tasks.unwrap_or_default())
}

/// Decode a successful create payload
fn decode_task(body: &str) -> FetchResult<Task> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse {
        message: e.to_string(),
    })
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    async fn fetch_tasks(&self, key: &QueryKey) -> FetchResult<Vec<Task>> {
        let url = self.tasks_url(key);
        debug!(url = %url, "fetching tasks");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &body));
        }
        decode_tasks(&body)
    }

    async fn create_task(&self, body: &str) -> FetchResult<Task> {
        let url = format!("{}/tasks", self.base_url);
        debug!(url = %url, "creating task");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &text));
        }
        decode_task(&text)
    }

    async fn set_completed(&self, id: &str, completed: bool) -> FetchResult<()> {
        let url = self.task_url(id);
        debug!(url = %url, completed, "updating task");

        let response = self
            .client
            .patch(&url)
            .json(&serde_json::json!({ "completed": completed }))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &text));
        }
        // The server answers {"success": true}; nothing to decode.
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> FetchResult<()> {
        let url = self.task_url(id);
        debug!(url = %url, "deleting task");

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(server_error(status, &text));
        }
        Ok(())
    }
}
