//! Application state owned by the store.

use crate::form::DraftForm;
use crate::list::PackingList;
use crate::types::{Item, SortMode};
use crate::views::{self, Stats};
use serde::{Deserialize, Serialize};

/// Everything the packing list screen needs
///
/// Only source data lives here. The sorted list and the statistics are
/// derived on demand with [`PackingState::visible_items`] and
/// [`PackingState::stats`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingState {
    /// Items in input order
    pub list: PackingList,
    /// Draft of the next item
    pub form: DraftForm,
    /// Ordering of the displayed list
    pub sort: SortMode,
}

impl PackingState {
    /// Empty list, fresh form, default sort
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing list
    #[must_use]
    pub fn with_list(list: PackingList) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }

    /// Starts with the given ordering
    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Items in the current sort order
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        views::sorted(self.list.items(), self.sort)
    }

    /// Completion statistics of the whole list
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::from_items(self.list.items())
    }
}
