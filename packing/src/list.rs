//! The packing list: an ordered collection of items.
//!
//! Insertion order is the canonical "input order". The items themselves are
//! private; every mutation goes through [`PackingList::add`],
//! [`PackingList::remove`], [`PackingList::toggle_packed`] or
//! [`PackingList::clear`], and none of them can fail.

use crate::types::{Item, ItemId, Quantity};
use serde::{Deserialize, Serialize};

/// Ordered collection of packing list items
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackingList {
    items: Vec<Item>,
}

impl PackingList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The two-item list the app ships with as a demo
    #[must_use]
    pub fn sample() -> Self {
        [
            Item::new(ItemId::new(1), "Passports", Quantity::new(2).unwrap_or_default()),
            Item::new(ItemId::new(2), "Socks", Quantity::new(12).unwrap_or_default()).into_packed(),
        ]
        .into_iter()
        .collect()
    }

    /// Appends `item` at the end of the list
    pub fn add(&mut self, item: Item) {
        if self.contains(item.id) {
            tracing::warn!(id = %item.id, "Adding an item whose id is already in the list");
        }
        self.items.push(item);
    }

    /// Removes the item with `id`; returns false if there was none
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            },
            None => false,
        }
    }

    /// Flips the packed flag of the item with `id`
    ///
    /// Returns the new flag, or `None` if there is no such item.
    pub fn toggle_packed(&mut self, id: ItemId) -> Option<bool> {
        self.items.iter_mut().find(|item| item.id == id).map(|item| {
            item.packed = !item.packed;
            item.packed
        })
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if an item with `id` exists
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of packed items
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|item| item.packed).count()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl FromIterator<Item> for PackingList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PackingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, description: &str) -> Item {
        Item::new(ItemId::new(id), description, Quantity::ONE)
    }

    fn descriptions(list: &PackingList) -> Vec<&str> {
        list.items().iter().map(|i| i.description.as_str()).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut list = PackingList::new();
        list.add(item(1, "Passports"));
        list.add(item(2, "Socks"));
        assert_eq!(descriptions(&list), vec!["Passports", "Socks"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut list: PackingList = [item(1, "a"), item(2, "b"), item(3, "c")].into_iter().collect();
        assert!(list.remove(ItemId::new(2)));
        assert_eq!(descriptions(&list), vec!["a", "c"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut list: PackingList = [item(1, "a")].into_iter().collect();
        let before = list.clone();
        assert!(!list.remove(ItemId::new(9)));
        assert!(!list.remove(ItemId::new(9)));
        assert_eq!(list, before);
    }

    #[test]
    fn toggle_flips_only_the_matching_item() {
        let mut list: PackingList = [item(1, "a"), item(2, "b")].into_iter().collect();
        assert_eq!(list.toggle_packed(ItemId::new(2)), Some(true));
        assert_eq!(list.packed_count(), 1);
        assert!(!list.items()[0].packed);
        assert_eq!(list.toggle_packed(ItemId::new(2)), Some(false));
        assert_eq!(list.packed_count(), 0);
        assert_eq!(list.toggle_packed(ItemId::new(3)), None);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = PackingList::sample();
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn sample_matches_demo_data() {
        let list = PackingList::sample();
        assert_eq!(descriptions(&list), vec!["Passports", "Socks"]);
        assert_eq!(list.get(ItemId::new(1)).map(|i| i.quantity.get()), Some(2));
        assert_eq!(list.get(ItemId::new(2)).map(|i| i.packed), Some(true));
    }
}
