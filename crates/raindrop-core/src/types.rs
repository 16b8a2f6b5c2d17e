//! Core types for raindrop-notes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display title for bookmarks that live outside any collection
pub const UNSORTED_TITLE: &str = "Unsorted";

/// Which bookmark timestamp a filter applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    /// Filter on the creation date - renders as `created:`
    #[default]
    Created,
    /// Filter on the last-modified date - renders as `modified:`
    Modified,
}

impl DateType {
    /// Parse from a directive keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "created" => Some(DateType::Created),
            "modified" => Some(DateType::Modified),
            _ => None,
        }
    }

    /// Keyword used both in directives and in the search query
    pub fn as_str(self) -> &'static str {
        match self {
            DateType::Created => "created",
            DateType::Modified => "modified",
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter parsed from a raindrop block
///
/// Built once per render and dropped after the fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Timestamp field the date applies to
    pub date_type: DateType,
    /// Date token; empty when it could not be resolved
    pub date: String,
    /// Tag names without the leading `#`, in appearance order
    pub tags: Vec<String>,
    /// Collection name filter; empty means no filter
    pub collection: String,
}

impl FilterOptions {
    /// Whether the date resolved to something a search can use
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }

    /// Whether a collection filter is set
    pub fn has_collection(&self) -> bool {
        !self.collection.is_empty()
    }
}

/// A Raindrop collection reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collection {
    /// Raindrop collection id; zero or negative ids are system collections
    pub id: i64,
    /// Human-readable collection name
    pub title: String,
}

impl Collection {
    /// The catch-all collection for unsorted or unresolved bookmarks
    pub fn unsorted(id: i64) -> Self {
        Self {
            id,
            title: UNSORTED_TITLE.to_string(),
        }
    }

    /// Whether this id refers to a user collection that can be looked up
    pub fn is_user_collection(id: i64) -> bool {
        id > 0
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::unsorted(0)
    }
}

/// A bookmark ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Raindrop id (`_id`), zero if the service omitted it
    pub id: i64,
    /// Display label
    pub title: String,
    /// Target URL
    pub link: String,
    /// Owning collection
    pub collection: Collection,
    /// Tags attached to the bookmark
    pub tags: Vec<String>,
}
