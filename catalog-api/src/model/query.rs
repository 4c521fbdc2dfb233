//! Caller-supplied options for listing services.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field the listing is ordered by.
///
/// Parsing never fails: unknown keys fall back to [`SortKey::TypeCode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    TypeCode,
    Name,
    Description,
}

impl SortKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "name" => SortKey::Name,
            "description" => SortKey::Description,
            _ => SortKey::TypeCode,
        }
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::TypeCode => write!(f, "typeCode"),
            SortKey::Name => write!(f, "name"),
            SortKey::Description => write!(f, "description"),
        }
    }
}

/// The set of options for filtering the services results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceQuery {
    /// Substring searched in name, description and code. Empty disables filtering.
    pub search: String,
    pub sort: SortKey,
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: i64,
    /// Entries per page. Values below 1 disable pagination.
    pub page_size: i64,
}

impl ServiceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<SortKey>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

impl Default for ServiceQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::TypeCode,
            page: 1,
            page_size: 0,
        }
    }
}
