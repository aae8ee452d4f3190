//! Done command for marking tasks completed
//!
//! Implements the `tfd done` command to mark a task completed on the
//! remote server.

use clap::Args;
use taskfeed_query::{FetchError, HttpTaskSource, TaskSource};
use tracing::debug;

/// Mark a task as completed
#[derive(Debug, Args)]
pub struct DoneCommand {
    /// ID of the task to mark completed
    #[arg(required = true)]
    pub id: String,
}

impl DoneCommand {
    /// Execute the done command.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails or the server rejects
    /// the id.
    pub async fn execute(&self, base_url: &str) -> Result<String, FetchError> {
        debug!(id = %self.id, "marking task completed");
        let source = HttpTaskSource::new(base_url);
        source.set_completed(&self.id, true).await?;
        Ok(format!("Marked task {} as completed", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        done: DoneCommand,
    }

    #[test]
    fn test_done_requires_id() {
        let cli = TestCli::try_parse_from(["test"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_done_parses_id() {
        let cli = TestCli::try_parse_from(["test", "66a1b2c3"]).unwrap();
        assert_eq!(cli.done.id, "66a1b2c3");
    }
}
