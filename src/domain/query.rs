// SPDX-License-Identifier: MPL-2.0
//! Filtering and sorting of the inventory for the search screen.

use super::item::{Item, ItemStatus, ItemStore};
use serde::{Deserialize, Serialize};

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest report first.
    #[default]
    Date,
    /// Alphabetical by item name.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Date, SortKey::Name];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Name => "Name",
        }
    }
}

/// Status filter applied to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ItemStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(ItemStatus::Lost),
        StatusFilter::Only(ItemStatus::Found),
        StatusFilter::Only(ItemStatus::Claimed),
    ];

    fn matches(self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => item.status == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All statuses"),
            StatusFilter::Only(status) => f.write_str(status.label()),
        }
    }
}

/// Returns the items matching `query` and `filter`, ordered by `key`.
///
/// The query is a case-insensitive substring match over name, description,
/// and location. An empty query matches everything.
pub fn filter_and_sort<'a>(
    store: &'a ItemStore,
    query: &str,
    filter: StatusFilter,
    key: SortKey,
) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();

    let mut results: Vec<&Item> = store
        .iter()
        .filter(|item| filter.matches(item))
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.location.to_lowercase().contains(&needle)
        })
        .collect();

    match key {
        SortKey::Date => results.sort_by(|a, b| b.reported_on.cmp(&a.reported_on)),
        SortKey::Name => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }

    results
}
