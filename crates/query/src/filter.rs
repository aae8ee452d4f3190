//! Filter selections and partial updates
//!
//! `FilterSpec` is the fully-populated set of list-filtering criteria owned
//! by one session; `FilterPatch` carries a partial update from the
//! presentation layer.

use crate::models::{Order, SortBy, StatusFilter};

/// The complete set of user-selectable list-filtering criteria
///
/// Always fully populated: every field holds a valid value, with the
/// defaults matching an unfiltered listing (all statuses, newest first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Status constraint
    pub status: StatusFilter,
    /// Sort field
    pub sort_by: SortBy,
    /// Sort direction
    pub order: Order,
    /// Free-text search over task bodies
    pub search: String,
}

impl FilterSpec {
    /// Create a filter spec with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status constraint
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the sort field
    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Set the sort direction
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// A partial filter update
///
/// Only the fields that are `Some` are applied. Status, sort field, and
/// direction commit immediately; search text is staged through the
/// debouncer before it commits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    /// New status constraint, if changed
    pub status: Option<StatusFilter>,
    /// New sort field, if changed
    pub sort_by: Option<SortBy>,
    /// New sort direction, if changed
    pub order: Option<Order>,
    /// New search text, if changed
    pub search: Option<String>,
}

impl FilterPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status constraint
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort field
    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Set the sort direction
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check whether this patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.sort_by.is_none()
            && self.order.is_none()
            && self.search.is_none()
    }
}
