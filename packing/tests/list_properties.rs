//! Property tests for the packing list and its derived views

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use far_away::views::sorted;
use far_away::{Item, ItemId, PackingList, Quantity, SortMode, Stats};
use proptest::prelude::*;

/// One list operation, keyed by a small id so removals and toggles hit
#[derive(Debug, Clone)]
enum Op {
    Add { id: u64, description: String, quantity: u8 },
    Remove(u64),
    Toggle(u64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u64..16, "[a-zA-Z ]{0,8}", Quantity::MIN..=Quantity::MAX)
            .prop_map(|(id, description, quantity)| Op::Add { id, description, quantity }),
        2 => (0u64..16).prop_map(Op::Remove),
        3 => (0u64..16).prop_map(Op::Toggle),
        1 => Just(Op::Clear),
    ]
}

fn items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(("[a-zA-Z]{0,6}", any::<bool>()), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (description, packed))| {
                let item = Item::new(ItemId::new(i as u64), description, Quantity::ONE);
                if packed { item.into_packed() } else { item }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn list_matches_a_simple_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = PackingList::new();
        // (id, description, packed) in insertion order; ids are kept unique
        let mut model: Vec<(u64, String, bool)> = Vec::new();

        for op in ops {
            match op {
                Op::Add { id, description, quantity } => {
                    if model.iter().any(|(existing, _, _)| *existing == id) {
                        continue;
                    }
                    list.add(Item::new(ItemId::new(id), description.clone(), Quantity::new(i64::from(quantity)).unwrap()));
                    model.push((id, description, false));
                },
                Op::Remove(id) => {
                    let removed = list.remove(ItemId::new(id));
                    let before = model.len();
                    model.retain(|(existing, _, _)| *existing != id);
                    prop_assert_eq!(removed, model.len() < before);
                },
                Op::Toggle(id) => {
                    let flag = list.toggle_packed(ItemId::new(id));
                    let expected = model.iter_mut().find(|(existing, _, _)| *existing == id).map(|entry| {
                        entry.2 = !entry.2;
                        entry.2
                    });
                    prop_assert_eq!(flag, expected);
                },
                Op::Clear => {
                    list.clear();
                    model.clear();
                    prop_assert!(list.is_empty());
                },
            }
        }

        let actual: Vec<(u64, String, bool)> = list
            .items()
            .iter()
            .map(|item| (item.id.get(), item.description.clone(), item.packed))
            .collect();
        prop_assert_eq!(actual, model);
    }

    #[test]
    fn input_order_survives_sort_switches(items in items(), modes in prop::collection::vec(0usize..3, 0..8)) {
        for mode in modes {
            let _ = sorted(&items, SortMode::ALL[mode]);
        }
        let view: Vec<u64> = sorted(&items, SortMode::Input).iter().map(|i| i.id.get()).collect();
        let expected: Vec<u64> = items.iter().map(|i| i.id.get()).collect();
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn packed_sort_is_a_stable_partition(items in items()) {
        let view: Vec<u64> = sorted(&items, SortMode::Packed).iter().map(|i| i.id.get()).collect();
        let expected: Vec<u64> = items
            .iter()
            .filter(|i| !i.packed)
            .chain(items.iter().filter(|i| i.packed))
            .map(|i| i.id.get())
            .collect();
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn description_sort_is_a_stable_permutation(items in items()) {
        let view = sorted(&items, SortMode::Description);
        prop_assert_eq!(view.len(), items.len());

        for pair in view.windows(2) {
            let order = far_away::views::compare_descriptions(&pair[0].description, &pair[1].description);
            prop_assert!(order.is_le());
            if order.is_eq() {
                // ids follow insertion order, so equal keys keep it
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn stats_agree_with_the_items(items in items()) {
        let stats = Stats::from_items(&items);
        let packed = items.iter().filter(|i| i.packed).count();

        prop_assert_eq!(stats.total(), items.len());
        prop_assert_eq!(stats.packed(), packed);
        prop_assert!(stats.percentage() <= 100);
        match stats {
            Stats::Empty => prop_assert!(items.is_empty()),
            Stats::Ready { .. } => prop_assert!(packed * 200 >= items.len() * 199),
            Stats::Progress { percentage, .. } => {
                prop_assert!(percentage < 100);
                let exact = packed as f64 * 100.0 / items.len() as f64;
                prop_assert!((f64::from(percentage) - exact).abs() <= 0.5);
            },
        }
    }
}
