mod storage;

pub use storage::{FavoritesStorage, JsonFileStorage, MemoryStorage, FAVORITES_KEY};

use log::warn;
use std::collections::HashSet;

use crate::error::ScoutError;
use crate::model::{Recipe, RecipeId};

/// The authoritative favorites index: favorited ids plus the full records
/// needed to render them, kept in insertion order.
///
/// All mutation goes through [`Favorites::toggle`], which keeps the id set
/// and the record list in step. The one permitted divergence is an id
/// favorited while its record was not loaded anywhere; the id is kept with
/// no backing record until the user unfavorites it.
#[derive(Debug, Default)]
pub struct Favorites {
    ids: HashSet<RecipeId>,
    records: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Rebuild the index from a stored record list, deriving the id set.
    /// Records repeating an id are dropped, keeping the first occurrence.
    pub fn from_records(records: Vec<Recipe>) -> Self {
        let mut favorites = Favorites::new();
        for record in records {
            if favorites.ids.insert(record.id) {
                favorites.records.push(record);
            }
        }
        favorites
    }

    /// Load the collection from durable storage. A missing key or an
    /// unreadable value both yield an empty collection; neither is fatal.
    pub fn load_from(storage: &dyn FavoritesStorage) -> Self {
        match storage.load(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(records) => Favorites::from_records(records),
                Err(err) => {
                    warn!("stored favorites are unreadable, starting empty: {err}");
                    Favorites::new()
                }
            },
            Ok(None) => Favorites::new(),
            Err(err) => {
                warn!("could not read stored favorites, starting empty: {err}");
                Favorites::new()
            }
        }
    }

    /// Write the record list through to durable storage as a full
    /// replacement. An empty collection removes the key instead of storing
    /// an empty array, so "never used" and "emptied" look the same on disk.
    pub fn persist_to(&self, storage: &mut dyn FavoritesStorage) -> Result<(), ScoutError> {
        if self.records.is_empty() {
            storage.remove(FAVORITES_KEY)
        } else {
            let raw = serde_json::to_string(&self.records)?;
            storage.save(FAVORITES_KEY, &raw)
        }
    }

    /// O(1) membership check for rendering.
    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Full records for every favorite, in the order they were added.
    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership for `id`. Returns true when the recipe is now a
    /// favorite.
    ///
    /// `record` is the full record resolved by the caller from whatever is
    /// currently loaded (search results or the open detail view). When an id
    /// is added and no record resolves, the id is kept without one rather
    /// than rejecting the toggle.
    pub fn toggle(&mut self, id: RecipeId, record: Option<&Recipe>) -> bool {
        if self.ids.remove(&id) {
            self.records.retain(|r| r.id != id);
            false
        } else {
            self.ids.insert(id);
            match record {
                Some(record) => self.records.push(record.clone()),
                None => warn!("no loaded record for recipe {id}; favorited without details"),
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: RecipeId, title: &str) -> Recipe {
        serde_json::from_str(&format!(r#"{{"id": {id}, "title": "{title}"}}"#)).unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let pasta = recipe(42, "Pasta");
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(42, Some(&pasta)));
        assert!(favorites.contains(42));
        assert_eq!(favorites.records().len(), 1);

        assert!(!favorites.toggle(42, Some(&pasta)));
        assert!(!favorites.contains(42));
        assert!(favorites.records().is_empty());
    }

    #[test]
    fn test_toggle_sequence_is_xor_of_ids() {
        let a = recipe(1, "A");
        let b = recipe(2, "B");
        let c = recipe(3, "C");
        let mut favorites = Favorites::new();

        for (id, record) in [(1, &a), (2, &b), (1, &a), (3, &c), (2, &b), (2, &b)] {
            favorites.toggle(id, Some(record));
        }

        // 1 toggled twice, 2 three times, 3 once
        assert!(!favorites.contains(1));
        assert!(favorites.contains(2));
        assert!(favorites.contains(3));
        let ids: Vec<RecipeId> = favorites.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.toggle(3, Some(&recipe(3, "C")));
        favorites.toggle(1, Some(&recipe(1, "A")));
        favorites.toggle(2, Some(&recipe(2, "B")));

        let ids: Vec<RecipeId> = favorites.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_without_record_keeps_bare_id() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(99, None));

        assert!(favorites.contains(99));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.records().is_empty());

        // A second toggle clears the bare id again
        assert!(!favorites.toggle(99, None));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_from_records_derives_ids_and_dedupes() {
        let favorites = Favorites::from_records(vec![
            recipe(1, "A"),
            recipe(2, "B"),
            recipe(1, "A again"),
        ]);

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.records().len(), 2);
        assert_eq!(favorites.records()[0].title, "A");
    }

    #[test]
    fn test_persist_roundtrip() {
        let mut storage = MemoryStorage::new();
        let mut favorites = Favorites::new();
        favorites.toggle(42, Some(&recipe(42, "Pasta")));
        favorites.toggle(7, Some(&recipe(7, "Soup")));
        favorites.persist_to(&mut storage).unwrap();

        let reloaded = Favorites::load_from(&storage);
        assert!(reloaded.contains(42));
        assert!(reloaded.contains(7));
        let ids: Vec<RecipeId> = reloaded.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![42, 7]);
    }

    #[test]
    fn test_emptying_removes_the_stored_key() {
        let mut storage = MemoryStorage::new();
        let mut favorites = Favorites::new();
        favorites.toggle(42, Some(&recipe(42, "Pasta")));
        favorites.persist_to(&mut storage).unwrap();
        assert!(storage.load(FAVORITES_KEY).unwrap().is_some());

        favorites.toggle(42, None);
        favorites.persist_to(&mut storage).unwrap();
        assert!(storage.load(FAVORITES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_stored_value_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.save(FAVORITES_KEY, "{not json").unwrap();

        let favorites = Favorites::load_from(&storage);
        assert!(favorites.is_empty());
    }
}
