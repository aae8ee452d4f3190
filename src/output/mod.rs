//! Output formatting module for Taskfeed
//!
//! Provides table formatting and display utilities for CLI output.

use taskfeed_query::Task;

/// Maximum width for the body column before truncation
const MAX_BODY_WIDTH: usize = 40;

/// Timestamp format for the created column
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Rendered width of a `CREATED_FORMAT` timestamp
const CREATED_RENDERED_WIDTH: usize = 16;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
///
/// Widths are measured in characters, not bytes; task bodies are
/// arbitrary UTF-8 and must never be split inside a multibyte character.
fn truncate(s: &str, max_width: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let prefix: String = s.chars().take(max_width - 3).collect();
        format!("{}...", prefix)
    }
}

/// Display label for a task's completion state
fn status_label(task: &Task) -> &'static str {
    if task.completed { "completed" } else { "active" }
}

/// Format tasks into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID      Status     Created           Body
/// ------  ---------  ----------------  --------------------
/// a1b2c3  active     2025-01-06 12:00  Buy groceries
/// ```
///
/// Returns an empty result message if no tasks.
pub fn format_task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let headers = ["ID", "Status", "Created", "Body"];

    let id_width = tasks
        .iter()
        .map(|t| t.id.len())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let status_width = tasks
        .iter()
        .map(|t| status_label(t).len())
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let created_width = CREATED_RENDERED_WIDTH.max(headers[2].len());

    let body_width = tasks
        .iter()
        .map(|t| t.body.chars().count().min(MAX_BODY_WIDTH))
        .max()
        .unwrap_or(0)
        .max(headers[3].len());

    let mut output = String::new();

    output.push_str(&format!(
        "{:<id_w$}  {:<status_w$}  {:<created_w$}  {:<body_w$}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        id_w = id_width,
        status_w = status_width,
        created_w = created_width,
        body_w = body_width,
    ));

    output.push_str(&format!(
        "{}  {}  {}  {}\n",
        "-".repeat(id_width),
        "-".repeat(status_width),
        "-".repeat(created_width),
        "-".repeat(body_width),
    ));

    for task in tasks {
        output.push_str(&format!(
            "{:<id_w$}  {:<status_w$}  {:<created_w$}  {:<body_w$}\n",
            task.id,
            status_label(task),
            task.created_at.format(CREATED_FORMAT).to_string(),
            truncate(&task.body, MAX_BODY_WIDTH),
            id_w = id_width,
            status_w = status_width,
            created_w = created_width,
            body_w = body_width,
        ));
    }

    output
}
