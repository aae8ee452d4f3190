//! CLI commands for Taskfeed
//!
//! This module contains all subcommand implementations for the tfd CLI.

pub mod add;
pub mod delete;
pub mod done;
pub mod list;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use done::DoneCommand;
pub use list::ListCommand;

use clap::Subcommand;
use taskfeed_query::FetchError;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new task
    Add(AddCommand),
    /// List tasks with optional filters
    List(ListCommand),
    /// Mark a task as completed
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

impl Command {
    /// Execute the command against the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails or the response cannot
    /// be decoded.
    pub async fn execute(&self, base_url: &str) -> Result<String, FetchError> {
        match self {
            Command::Add(cmd) => cmd.execute(base_url).await,
            Command::List(cmd) => cmd.execute(base_url).await,
            Command::Done(cmd) => cmd.execute(base_url).await,
            Command::Delete(cmd) => cmd.execute(base_url).await,
        }
    }
}
