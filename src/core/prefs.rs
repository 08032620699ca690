//! Key-value preference stores backing the identity.
//!
//! - `FilePrefs` → JSON object on disk, re-read on every lookup
//! - `MemoryPrefs` → process-local map (tests, embedding)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::{Context, Result};

use crate::io::atomic::atomic_write;

/// Process-external string preferences. Failures stay inside the store.
pub trait PrefStore: Send + Sync {
    fn get_string(&self, key: &str, default: &str) -> String;
    fn set_string(&self, key: &str, value: &str);
    fn has_key(&self, key: &str) -> bool;
    fn delete_key(&self, key: &str);
}

/// Preferences persisted as a flat JSON object.
#[derive(Clone, Debug)]
pub struct FilePrefs {
    path: PathBuf,
}

impl FilePrefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file is an empty map; a corrupt one is an error.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let txt = match fs::read_to_string(&self.path) {
            Ok(txt) => txt,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e).with_context(|| format!("reading {}", self.path.display())),
        };
        if txt.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&txt).with_context(|| format!("parsing {}", self.path.display()))
    }

    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_or_empty();
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.load_or_empty();
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }

    fn save(&self, map: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(map).context("serializing preferences")?;
        atomic_write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))
    }

    fn load_or_empty(&self) -> HashMap<String, String> {
        self.load().unwrap_or_else(|e| {
            crate::debug_log!("prefs unreadable, treating as empty: {e:#}");
            HashMap::new()
        })
    }
}

impl PrefStore for FilePrefs {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.load_or_empty()
            .remove(key)
            .unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) {
        if let Err(e) = self.write(key, value) {
            crate::debug_log!("prefs write failed for {key}: {e:#}");
        }
    }

    fn has_key(&self, key: &str) -> bool {
        self.load_or_empty().contains_key(key)
    }

    fn delete_key(&self, key: &str) {
        if let Err(e) = self.remove(key) {
            crate::debug_log!("prefs delete failed for {key}: {e:#}");
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryPrefs {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.set_string(key, value);
        prefs
    }
}

impl PrefStore for MemoryPrefs {
    fn get_string(&self, key: &str, default: &str) -> String {
        let map = self.map.read().unwrap_or_else(|p| p.into_inner());
        map.get(key).cloned().unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) {
        let mut map = self.map.write().unwrap_or_else(|p| p.into_inner());
        map.insert(key.to_string(), value.to_string());
    }

    fn has_key(&self, key: &str) -> bool {
        let map = self.map.read().unwrap_or_else(|p| p.into_inner());
        map.contains_key(key)
    }

    fn delete_key(&self, key: &str) {
        let mut map = self.map.write().unwrap_or_else(|p| p.into_inner());
        map.remove(key);
    }
}
