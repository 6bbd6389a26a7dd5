//! Every input the packing list understands.

use crate::types::{Item, ItemId, SortMode};
use far_away_macros::Action;
use serde::{Deserialize, Serialize};

/// Actions for the packing list
///
/// Per-row controls are partial applications of the id-keyed variants: the
/// delete button of row `id` sends `DeleteItem { id }`, its checkbox sends
/// `TogglePacked { id }`.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PackingAction {
    // ========== List ==========
    /// Append an item to the end of the list
    #[list]
    AddItem {
        /// The new item
        item: Item,
    },

    /// Remove the item with `id`, if present
    #[list]
    DeleteItem {
        /// Item to remove
        id: ItemId,
    },

    /// Flip the packed flag of the item with `id`, if present
    #[list]
    TogglePacked {
        /// Item to toggle
        id: ItemId,
    },

    /// Remove every item
    #[list]
    ClearList,

    // ========== Form ==========
    /// Replace the draft description
    #[form]
    SetDescription {
        /// New description text
        text: String,
    },

    /// Pick the draft quantity from the selection control
    #[form]
    SetQuantity {
        /// Raw value of the control
        raw: String,
    },

    /// Turn the draft into a new item
    #[form]
    SubmitForm,

    // ========== View ==========
    /// Change the ordering of the displayed list
    #[view]
    SetSortMode {
        /// New ordering
        mode: SortMode,
    },
}
