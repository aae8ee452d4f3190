//! Delete command for removing tasks
//!
//! Implements the `tfd delete` command to remove a task from the remote
//! server.

use clap::Args;
use taskfeed_query::{FetchError, HttpTaskSource, TaskSource};
use tracing::debug;

/// Delete a task
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// ID of the task to delete
    #[arg(required = true)]
    pub id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails or the server rejects
    /// the id.
    pub async fn execute(&self, base_url: &str) -> Result<String, FetchError> {
        debug!(id = %self.id, "deleting task");
        let source = HttpTaskSource::new(base_url);
        source.delete_task(&self.id).await?;
        Ok(format!("Deleted task: {}", self.id))
    }
}
