use std::fs;

use recipe_scout::favorites::FAVORITES_KEY;
use recipe_scout::{Favorites, FavoritesStorage, JsonFileStorage, Recipe};
use tempfile::TempDir;

fn recipe(id: u64, title: &str) -> Recipe {
    serde_json::from_str(&format!(
        r#"{{"id": {id}, "title": "{title}", "readyInMinutes": 30, "servings": 2}}"#
    ))
    .unwrap()
}

fn favorites_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join(format!("{FAVORITES_KEY}.json"))
}

#[test]
fn test_persist_and_reload_reproduces_the_collection() {
    let dir = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::new(dir.path());

    let mut favorites = Favorites::new();
    favorites.toggle(42, Some(&recipe(42, "Pasta")));
    favorites.toggle(7, Some(&recipe(7, "Soup")));
    favorites.toggle(99, Some(&recipe(99, "Salad")));
    favorites.toggle(7, None); // unfavorite again
    favorites.persist_to(&mut storage).unwrap();

    // Simulated restart: a fresh index from the same storage
    let reloaded = Favorites::load_from(&storage);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.contains(42));
    assert!(!reloaded.contains(7));
    assert!(reloaded.contains(99));
    let ids: Vec<u64> = reloaded.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![42, 99]);
    assert_eq!(reloaded.records()[0].title, "Pasta");
}

#[test]
fn test_emptying_favorites_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::new(dir.path());

    let mut favorites = Favorites::new();
    favorites.toggle(42, Some(&recipe(42, "Pasta")));
    favorites.persist_to(&mut storage).unwrap();
    assert!(favorites_file(&dir).exists());

    favorites.toggle(42, None);
    favorites.persist_to(&mut storage).unwrap();

    // Removed, not overwritten with an empty array
    assert!(!favorites_file(&dir).exists());
}

#[test]
fn test_missing_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path());

    let favorites = Favorites::load_from(&storage);
    assert!(favorites.is_empty());
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path()).unwrap();
    fs::write(favorites_file(&dir), "][ not json").unwrap();

    let storage = JsonFileStorage::new(dir.path());
    let favorites = Favorites::load_from(&storage);
    assert!(favorites.is_empty());
}

#[test]
fn test_stored_value_is_a_json_array_of_records() {
    let dir = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::new(dir.path());

    let mut favorites = Favorites::new();
    favorites.toggle(42, Some(&recipe(42, "Pasta")));
    favorites.persist_to(&mut storage).unwrap();

    let raw = storage.load(FAVORITES_KEY).unwrap().unwrap();
    let parsed: Vec<Recipe> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].id, 42);
    assert_eq!(parsed[0].title, "Pasta");
}

#[test]
fn test_persist_skips_ids_without_records() {
    let dir = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::new(dir.path());

    // Favorited while no record was loaded anywhere: the id exists only in
    // memory, and an otherwise-empty collection stores nothing.
    let mut favorites = Favorites::new();
    favorites.toggle(123, None);
    favorites.persist_to(&mut storage).unwrap();
    assert!(!favorites_file(&dir).exists());

    favorites.toggle(42, Some(&recipe(42, "Pasta")));
    favorites.persist_to(&mut storage).unwrap();

    let reloaded = Favorites::load_from(&storage);
    assert!(reloaded.contains(42));
    assert!(!reloaded.contains(123));
}
