//! Derived views of the packing list.
//!
//! Nothing here is stored: the sorted projection and the statistics are
//! recomputed from the current items on every read, so they can never go
//! stale after a mutation.

use crate::types::{Item, SortMode};
use serde::Serialize;
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;
use std::fmt;

/// Items ordered for display, without touching the underlying list
///
/// Both non-trivial orderings are stable: items that compare equal keep their
/// insertion order.
#[must_use]
pub fn sorted(items: &[Item], mode: SortMode) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match mode {
        SortMode::Input => {},
        SortMode::Description => {
            let mut collator = description_collator();
            view.sort_by(|a, b| collator.collate(a.description.as_str(), b.description.as_str()));
        },
        SortMode::Packed => view.sort_by_key(|item| item.packed),
    }
    view
}

/// Natural-language ordering of two descriptions
///
/// Unicode Collation Algorithm with the CLDR root order: base letters
/// first ("éclair" sorts with "eclair", "boots" with "Boots"), then accents,
/// then case with lowercase first. Punctuation and symbols are not ignored
/// and sort ahead of letters. Canonically equivalent strings compare equal.
#[must_use]
pub fn compare_descriptions(a: &str, b: &str) -> Ordering {
    description_collator().collate(a, b)
}

// Non-ignorable variable weights, no byte tiebreak so equal keys stay stable
fn description_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, false)
}

/// Completion statistics of the whole (unsorted) list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Stats {
    /// The list has no items
    Empty,
    /// Some items are still waiting to be packed
    Progress {
        /// Number of items on the list
        total: usize,
        /// Number of packed items
        packed: usize,
        /// `packed / total` as a rounded percentage
        percentage: u8,
    },
    /// The rounded percentage reached 100
    Ready {
        /// Number of items on the list
        total: usize,
        /// Number of packed items
        packed: usize,
    },
}

impl Stats {
    /// Computes the statistics of `items`
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        if items.is_empty() {
            return Self::Empty;
        }

        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        let percentage = percentage(packed, total);

        if percentage == 100 {
            Self::Ready { total, packed }
        } else {
            Self::Progress {
                total,
                packed,
                percentage,
            }
        }
    }

    /// Number of items on the list
    #[must_use]
    pub const fn total(&self) -> usize {
        match *self {
            Self::Empty => 0,
            Self::Progress { total, .. } | Self::Ready { total, .. } => total,
        }
    }

    /// Number of packed items
    #[must_use]
    pub const fn packed(&self) -> usize {
        match *self {
            Self::Empty => 0,
            Self::Progress { packed, .. } | Self::Ready { packed, .. } => packed,
        }
    }

    /// Rounded packed percentage; 0 for an empty list
    #[must_use]
    pub const fn percentage(&self) -> u8 {
        match *self {
            Self::Empty => 0,
            Self::Progress { percentage, .. } => percentage,
            Self::Ready { .. } => 100,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "You have nothing to pack"),
            Self::Ready { .. } => write!(f, "You are ready to go"),
            Self::Progress {
                total,
                packed,
                percentage,
            } => write!(
                f,
                "You have {total} items on your list, and you already packed {packed} ({percentage}%)"
            ),
        }
    }
}

/// `part / whole * 100`, rounded half up
///
/// `whole` must be non-zero and `part <= whole`.
fn percentage(part: usize, whole: usize) -> u8 {
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded).unwrap_or(100)
}
