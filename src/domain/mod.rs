// SPDX-License-Identifier: MPL-2.0
//! Domain model for the lost & found inventory.
//!
//! Everything here is plain data kept in memory: the application has no
//! persistence layer or network API. The [`ItemStore`] is the single source
//! of truth for reported items; query/sort logic lives next to it so both
//! the search screen and tests exercise the same code path.

mod item;
mod query;

pub use item::{Item, ItemDraft, ItemId, ItemStatus, ItemStore};
pub use query::{filter_and_sort, SortKey, StatusFilter};
