use crate::state::session::Theme;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key for the favorites id list (a JSON array)
pub const FAVORITES_KEY: &str = "nana-recipes-favorites";
/// Storage key for the theme ("light" / "dark")
pub const THEME_KEY: &str = "nana-recipes-theme";

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encoding(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Store I/O error: {}", e),
            StoreError::Encoding(e) => write!(f, "Store encoding error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// String key-value persistence for session extras (favorites, theme)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Store backed by a single JSON object file. The file is read once at
/// open; a missing or malformed file degrades to an empty store with a
/// warning, never an error.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!(
                        "Warning: Store file {} is not valid JSON, starting empty: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(StoreError::Encoding)?;
        fs::write(&self.path, content).map_err(StoreError::Io)
    }
}

/// In-memory store, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Load the favorites set; malformed stored data degrades to empty
pub fn load_favorites(store: &dyn KeyValueStore) -> BTreeSet<String> {
    match store.get(FAVORITES_KEY) {
        Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                eprintln!("Warning: Could not load favorites: {}", e);
                BTreeSet::new()
            }
        },
        None => BTreeSet::new(),
    }
}

pub fn save_favorites(
    store: &mut dyn KeyValueStore,
    favorites: &BTreeSet<String>,
) -> Result<(), StoreError> {
    let ids: Vec<&String> = favorites.iter().collect();
    let encoded = serde_json::to_string(&ids).map_err(StoreError::Encoding)?;
    store.set(FAVORITES_KEY, encoded)
}

pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_round_trip() {
        let mut store = MemoryStore::new();

        let mut favorites = BTreeSet::new();
        favorites.insert("apple-pie".to_string());
        favorites.insert("scones".to_string());

        save_favorites(&mut store, &favorites).unwrap();
        assert_eq!(load_favorites(&store), favorites);

        // Stored encoding is a plain JSON id array
        let raw = store.get(FAVORITES_KEY).unwrap();
        assert_eq!(raw, r#"["apple-pie","scones"]"#);
    }

    #[test]
    fn test_favorites_default_to_empty() {
        let store = MemoryStore::new();
        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn test_malformed_favorites_degrade_to_empty() {
        let mut store = MemoryStore::new();
        store
            .set(FAVORITES_KEY, "not json at all".to_string())
            .unwrap();
        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn test_theme_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);

        save_theme(&mut store, Theme::Dark).unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        save_theme(&mut store, Theme::Light).unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
