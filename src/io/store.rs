// Key-value preference storage
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String-valued key-value store, one scalar per key.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Default, Debug)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat TOML table on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlFileStore {
    /// Open the store; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str::<BTreeMap<String, String>>(&contents)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("lang"), None);
        store.set("lang", "en").unwrap();
        assert_eq!(store.get("lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = TomlFileStore::open(&path).unwrap();
        assert_eq!(store.get("dark-mode"), None);
        store.set("dark-mode", "true").unwrap();
        store.set("lang", "es").unwrap();

        let reopened = TomlFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("dark-mode").as_deref(), Some("true"));
        assert_eq!(reopened.get("lang").as_deref(), Some("es"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "lang = [not toml").unwrap();
        assert!(TomlFileStore::open(&path).is_err());
    }
}
