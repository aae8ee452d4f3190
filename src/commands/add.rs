//! Add command for creating new tasks
//!
//! Implements the `tfd add` command to create a task on the remote server.

use clap::Args;
use taskfeed_query::{FetchError, HttpTaskSource, TaskSource};

/// Create a new task
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Body text of the task
    #[arg(required = true)]
    pub body: String,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// Posts the task body to the server and reports the created task's
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails or the server rejects
    /// the body, for example when it is empty.
    pub async fn execute(&self, base_url: &str) -> Result<String, FetchError> {
        let source = HttpTaskSource::new(base_url);
        let task = source.create_task(&self.body).await?;
        Ok(format!("Created task: {}", task.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        add: AddCommand,
    }

    #[test]
    fn test_add_requires_body() {
        let cli = TestCli::try_parse_from(["test"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_add_parses_body() {
        let cli = TestCli::try_parse_from(["test", "Cook dinner"]).unwrap();
        assert_eq!(cli.add.body, "Cook dinner");
    }
}
