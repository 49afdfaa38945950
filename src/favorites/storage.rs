use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::ScoutError;

/// Storage key for the serialized favorites collection
pub const FAVORITES_KEY: &str = "favoriteRecipes";

/// Durable key-value string storage.
///
/// Implementations store raw strings; serialization is the caller's
/// responsibility, which keeps this contract free of any encoding
/// dependency.
pub trait FavoritesStorage {
    /// Write a string value under key.
    fn save(&mut self, key: &str, data: &str) -> Result<(), ScoutError>;

    /// Read a string value by key. Returns None if not found.
    fn load(&self, key: &str) -> Result<Option<String>, ScoutError>;

    /// Remove a key from storage.
    fn remove(&mut self, key: &str) -> Result<(), ScoutError>;
}

/// File-backed storage: one JSON file per key under a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStorage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl FavoritesStorage for JsonFileStorage {
    fn save(&mut self, key: &str, data: &str) -> Result<(), ScoutError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, data)?;
        debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, ScoutError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn remove(&mut self, key: &str) -> Result<(), ScoutError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("removed {}", path.display());
        }
        Ok(())
    }
}

/// In-memory storage, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl FavoritesStorage for MemoryStorage {
    fn save(&mut self, key: &str, data: &str) -> Result<(), ScoutError> {
        self.values.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, ScoutError> {
        Ok(self.values.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), ScoutError> {
        self.values.remove(key);
        Ok(())
    }
}
