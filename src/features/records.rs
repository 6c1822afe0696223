//! CRUD-on-array helpers shared by the feature collections. Every collection
//! is an ordered `Vec` of records with a locally unique integer id: created
//! by form submission, edited in place by id, removed by id filter. There
//! are no cross-collection references.

/// A record with a locally unique integer id.
pub trait Keyed {
    fn key(&self) -> u32;
}

/// Next id for a new record: one past the current maximum. Ids are never
/// reused while a record holding them is present, so an add followed by a
/// delete leaves the rest of the list untouched.
pub fn next_id<T: Keyed>(items: &[T]) -> u32 {
    items.iter().map(Keyed::key).max().unwrap_or(0) + 1
}

/// Replaces the record with the same id, or appends when the id is new.
pub fn upsert<T: Keyed>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| existing.key() == item.key()) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// Removes the record with the given id, keeping the order of the rest.
pub fn remove<T: Keyed>(items: &mut Vec<T>, id: u32) {
    items.retain(|item| item.key() != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Item {
        fn key(&self) -> u32 {
            self.id
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item { id: 1, label: "one" },
            Item { id: 2, label: "two" },
            Item { id: 5, label: "five" },
        ]
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        assert_eq!(next_id(&sample()), 6);
        assert_eq!(next_id::<Item>(&[]), 1);
    }

    #[test]
    fn upsert_replaces_in_place_and_appends_new() {
        let mut items = sample();
        upsert(&mut items, Item { id: 2, label: "TWO" });
        assert_eq!(items[1], Item { id: 2, label: "TWO" });
        assert_eq!(items.len(), 3);

        upsert(&mut items, Item { id: 9, label: "nine" });
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].id, 9);
    }

    #[test]
    fn add_then_delete_restores_the_prior_list() {
        let before = sample();
        let mut items = before.clone();

        let id = next_id(&items);
        upsert(&mut items, Item { id, label: "new" });
        remove(&mut items, id);

        assert_eq!(items, before);
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let mut items = sample();
        remove(&mut items, 2);
        assert_eq!(
            items.iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![1, 5]
        );
    }
}
