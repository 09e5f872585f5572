// SPDX-License-Identifier: MPL-2.0
//! Core item data structures and the in-memory store.

use chrono::NaiveDate;
use std::path::PathBuf;

/// Unique identifier for a reported item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new unique item ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an item was declared missing, handed in, or returned to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    #[default]
    Lost,
    Found,
    Claimed,
}

impl ItemStatus {
    /// Statuses selectable on the report form (claimed items are only
    /// produced by the claim flow, never reported directly).
    pub const REPORTABLE: [ItemStatus; 2] = [ItemStatus::Lost, ItemStatus::Found];

    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Lost => "Lost",
            ItemStatus::Found => "Found",
            ItemStatus::Claimed => "Claimed",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated input for a new report, produced by the report form.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub status: ItemStatus,
    pub reported_on: NaiveDate,
    pub photo: Option<PathBuf>,
}

/// A single lost-or-found item in the inventory.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub status: ItemStatus,
    pub reported_on: NaiveDate,
    pub photo: Option<PathBuf>,
}

impl Item {
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            id: ItemId::new(),
            name: draft.name,
            description: draft.description,
            location: draft.location,
            contact: draft.contact,
            status: draft.status,
            reported_on: draft.reported_on,
            photo: draft.photo,
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.status == ItemStatus::Claimed
    }
}

/// In-memory inventory of reported items.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with a few demo entries so the search
    /// screen has content on first launch.
    #[must_use]
    pub fn with_samples() -> Self {
        let samples = [
            (
                "Black umbrella",
                "Compact umbrella with a wooden handle",
                "Main entrance",
                "front-desk@findery.example",
                ItemStatus::Found,
                NaiveDate::from_ymd_opt(2026, 8, 21),
            ),
            (
                "Student ID card",
                "ID card in a blue sleeve, name partly worn off",
                "Library, 2nd floor",
                "library@findery.example",
                ItemStatus::Found,
                NaiveDate::from_ymd_opt(2026, 8, 24),
            ),
            (
                "Silver water bottle",
                "Dented 0.75l bottle with hiking stickers",
                "Gym locker room",
                "anna@findery.example",
                ItemStatus::Lost,
                NaiveDate::from_ymd_opt(2026, 8, 26),
            ),
        ];

        let mut store = Self::new();
        for (name, description, location, contact, status, date) in samples {
            store.insert(Item::from_draft(ItemDraft {
                name: name.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                contact: contact.to_string(),
                status,
                reported_on: date.unwrap_or_default(),
                photo: None,
            }));
        }
        store
    }

    pub fn insert(&mut self, item: Item) -> ItemId {
        let id = item.id();
        self.items.push(item);
        id
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Marks an item as claimed. Returns `false` if the item is unknown.
    pub fn mark_claimed(&mut self, id: ItemId) -> bool {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.status = ItemStatus::Claimed;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
