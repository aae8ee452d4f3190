//! List command for displaying tasks
//!
//! Implements the `tfd list` command to display tasks with filtering options.

use clap::Args;
use taskfeed_query::{
    FetchError, FilterSpec, HttpTaskSource, Order, SortBy, StatusFilter, TaskSource,
};
use tracing::debug;

use crate::output::format_task_table;

/// List tasks with optional filters
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Filter by status (all, active, completed)
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<StatusFilter>,

    /// Sort field (createdAt, body, completed)
    #[arg(long = "sort-by", value_parser = parse_sort_by)]
    pub sort_by: Option<SortBy>,

    /// Sort direction (asc, desc)
    #[arg(short, long, value_parser = parse_order)]
    pub order: Option<Order>,

    /// Search text in task bodies (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
}

/// Parse a status string into a StatusFilter enum
fn parse_status(s: &str) -> Result<StatusFilter, String> {
    s.parse()
}

/// Parse a sort field string into a SortBy enum
fn parse_sort_by(s: &str) -> Result<SortBy, String> {
    s.parse()
}

/// Parse a direction string into an Order enum
fn parse_order(s: &str) -> Result<Order, String> {
    s.parse()
}

impl ListCommand {
    /// Build the filter selection from the provided arguments.
    ///
    /// Omitted arguments fall back to the defaults, so a bare `tfd list`
    /// issues an unfiltered request.
    fn filter_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::default();
        if let Some(status) = self.status {
            spec.status = status;
        }
        if let Some(sort_by) = self.sort_by {
            spec.sort_by = sort_by;
        }
        if let Some(order) = self.order {
            spec.order = order;
        }
        if let Some(ref search) = self.search {
            spec.search = search.clone();
        }
        spec
    }

    /// Execute the list command.
    ///
    /// Encodes the filter selection into a query key and fetches the
    /// matching tasks from the server.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails, the server reports an
    /// error, or the response cannot be decoded.
    pub async fn execute(&self, base_url: &str) -> Result<String, FetchError> {
        let key = self.filter_spec().query_key();
        debug!(key = %key, "listing tasks");
        let source = HttpTaskSource::new(base_url);
        let tasks = source.fetch_tasks(&key).await?;
        Ok(format_task_table(&tasks))
    }
}
