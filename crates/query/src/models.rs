//! Data models for the taskfeed client
//!
//! Defines the task wire type returned by the remote collaborator and the
//! enums that make up a filter selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status filter for the task list
///
/// Narrows the list to completed or still-open tasks. `All` is the
/// default and applies no status constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Returns the string representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(format!(
                "invalid status '{}'. Valid values: all, active, completed",
                s
            )),
        }
    }
}

/// Field the task list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    CreatedAt,
    Body,
    Completed,
}

impl SortBy {
    /// Returns the string representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::Body => "body",
            SortBy::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "createdat" | "created" => Ok(SortBy::CreatedAt),
            "body" => Ok(SortBy::Body),
            "completed" => Ok(SortBy::Completed),
            _ => Err(format!(
                "invalid sort field '{}'. Valid values: createdAt, body, completed",
                s
            )),
        }
    }
}

/// Sort direction for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    /// Returns the string representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(format!("invalid order '{}'. Valid values: asc, desc", s)),
        }
    }
}

/// A task item as served by the remote collaborator
///
/// The server serializes its record identifier as `_id` and the creation
/// timestamp as `createdAt`; the serde renames map them to idiomatic
/// field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Task body text
    pub body: String,

    /// Whether the task is completed
    pub completed: bool,

    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
