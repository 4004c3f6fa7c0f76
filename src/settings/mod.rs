// src/settings/mod.rs

//! Persistent settings: a small hierarchical key-value store and the named
//! profiles kept in it.
//!
//! Keys are `/`-separated paths (`profiles/Default/opts/recursive`). A
//! "group" is a key holding other keys. The engine never sees this module;
//! profiles are turned into [`Options`](crate::config::Options) by the caller.

use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub mod profile;

pub use profile::{
    current_profile, delete_profile, ensure_default_profile, list_profiles, load_profile,
    rename_profile, save_profile, Profile, ProfileItem,
};

/// Name of the settings file inside the configuration directory.
const SETTINGS_FILE: &str = "settings.json";

/// A hierarchical key-value store.
pub trait SettingsStore {
    /// Returns the value stored at `key`, which may be a group.
    fn get(&self, key: &str) -> Option<&Value>;
    /// Stores `value` at `key`, creating intermediate groups.
    fn set(&mut self, key: &str, value: Value);
    /// Removes `key` and everything below it.
    fn remove(&mut self, key: &str);
    /// Names of the groups directly below `prefix`, sorted.
    fn child_groups(&self, prefix: &str) -> Vec<String>;
}

/// A [`SettingsStore`] kept as one JSON document, optionally backed by a file.
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    path: Option<PathBuf>,
    root: Map<String, Value>,
}

impl JsonFileStore {
    /// Loads the store from `path`. A missing file gives an empty store that
    /// will be written to `path` on [`save`](Self::save).
    ///
    /// # Errors
    /// Returns `Error::Io` if the file exists but cannot be read, and
    /// `Error::Settings` if it is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let root = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Map::new(),
            Ok(text) => serde_json::from_str::<Map<String, Value>>(&text).map_err(|e| {
                Error::Settings(format!("cannot parse '{}': {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, starting empty", path.display());
                Map::new()
            }
            Err(e) => return Err(io_error_with_path(e, &path)),
        };
        Ok(Self {
            path: Some(path),
            root,
        })
    }

    /// Opens the store at the default location, see [`default_settings_path`].
    ///
    /// # Errors
    /// Returns `Error::Settings` if no configuration directory can be
    /// determined, or any error of [`open`](Self::open).
    pub fn open_default() -> Result<Self> {
        let path = default_settings_path().ok_or_else(|| {
            Error::Settings("cannot determine the user configuration directory".to_string())
        })?;
        Self::open(path)
    }

    /// A store that lives only in memory; [`save`](Self::save) does nothing.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// The file backing this store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the store back to its file, creating parent directories.
    ///
    /// # Errors
    /// Returns `Error::Io` if the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
        let text = serde_json::to_string_pretty(&self.root)
            .map_err(|e| Error::Settings(e.to_string()))?;
        fs::write(path, text).map_err(|e| io_error_with_path(e, path))?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('/').filter(|s| !s.is_empty())
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = segments(key);
        let mut node = self.root.get(parts.next()?)?;
        for part in parts {
            node = node.as_object()?.get(part)?;
        }
        Some(node)
    }

    fn set(&mut self, key: &str, value: Value) {
        let parts: Vec<&str> = segments(key).collect();
        let Some((last, parents)) = parts.split_last() else {
            return;
        };
        let mut map = &mut self.root;
        for part in parents {
            let entry = map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            map = match entry {
                Value::Object(inner) => inner,
                _ => return,
            };
        }
        map.insert(last.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        let parts: Vec<&str> = segments(key).collect();
        let Some((last, parents)) = parts.split_last() else {
            return;
        };
        let mut map = &mut self.root;
        for part in parents {
            map = match map.get_mut(*part) {
                Some(Value::Object(inner)) => inner,
                _ => return,
            };
        }
        map.remove(*last);
    }

    fn child_groups(&self, prefix: &str) -> Vec<String> {
        let map = if segments(prefix).next().is_none() {
            Some(&self.root)
        } else {
            self.get(prefix).and_then(Value::as_object)
        };
        let mut groups: Vec<String> = map
            .map(|m| {
                m.iter()
                    .filter(|(_, v)| v.is_object())
                    .map(|(k, _)| k.clone())
                    .collect()
            })
            .unwrap_or_default();
        groups.sort();
        groups
    }
}

/// `<user config dir>/filecat/settings.json`, e.g. `~/.config/filecat/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "filecat")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}
