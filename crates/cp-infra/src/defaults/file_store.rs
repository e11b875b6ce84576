//! Keyed JSON defaults file.
//!
//! A single JSON object on disk, one top-level key per stored value. Every
//! write rewrites the whole file through `<name>.json.tmp` and a rename so
//! readers never observe a partial file. A file that no longer parses is
//! an error for readers and is replaced wholesale by the next write.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

pub struct FileDefaultsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileDefaultsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value stored under `key`, `None` when the key or the file is missing.
    pub fn get_value(&self, key: &str) -> Result<Option<Value>> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    /// Typed value stored under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_value(key)? {
            Some(value) => {
                let typed = serde_json::from_value(value)
                    .with_context(|| format!("decode defaults key failed: {key}"))?;
                Ok(Some(typed))
            }
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("encode defaults key failed: {key}"))?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("defaults write lock poisoned"))?;
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), value);
        self.atomic_write(&map)
    }

    /// Returns whether the key existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("defaults write lock poisoned"))?;
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_none() {
            return Ok(false);
        }
        self.atomic_write(&map)?;
        Ok(true)
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read defaults failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse defaults failed: {}", self.path.display()))
    }

    fn read_map_for_write(&self) -> Result<Map<String, Value>> {
        match self.read_map() {
            Err(err) if err.downcast_ref::<serde_json::Error>().is_some() => {
                warn!(
                    path = %self.path.display(),
                    error = %format!("{err:#}"),
                    "defaults file unreadable, rewriting it from empty"
                );
                Ok(Map::new())
            }
            other => other,
        }
    }

    fn atomic_write(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create defaults dir failed: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(map).context("serialize defaults failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("write temp defaults failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "rename temp defaults to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
