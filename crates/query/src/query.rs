//! Canonical query keys
//!
//! Maps a committed `FilterSpec` to a stable, default-omitting serialized
//! form used both as the cache key and as the outbound query string, so
//! semantically-equivalent filter states collapse to the same key.

use std::fmt;

use url::form_urlencoded;

use crate::filter::FilterSpec;
use crate::models::{Order, SortBy, StatusFilter};

/// Canonical serialization of a `FilterSpec`
///
/// Field order is fixed (`status`, `sortBy`, `order`, `search`) and fields
/// at their default value are omitted, so the default spec encodes to the
/// empty key. Keys compare structurally and hash for cache lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryKey(String);

impl QueryKey {
    /// The encoded query string, without a leading `?`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key represents the unfiltered default state
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FilterSpec {
    /// The `(name, value)` pairs this spec contributes to a query
    ///
    /// A field equal to its default contributes nothing, mirroring the
    /// wire contract where absent parameters mean "default".
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if self.status != StatusFilter::default() {
            pairs.push(("status", self.status.as_str()));
        }
        if self.sort_by != SortBy::default() {
            pairs.push(("sortBy", self.sort_by.as_str()));
        }
        if self.order != Order::default() {
            pairs.push(("order", self.order.as_str()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        pairs
    }

    /// Encode this spec into its canonical query key
    ///
    /// Deterministic and independent of the order fields were mutated in.
    pub fn query_key(&self) -> QueryKey {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.query_pairs() {
            serializer.append_pair(name, value);
        }
        QueryKey(serializer.finish())
    }
}
