// src/settings/profile.rs

//! Named profiles: a root list with check marks plus the options of a run.
//!
//! Layout below `profiles/<name>/`:
//!
//! | key | value |
//! |-----|-------|
//! | `list/items` | array of `"<path>\|1"` (checked) or `"<path>\|0"` |
//! | `opts/exts`, `opts/excludedirs` | comma-separated text |
//! | `opts/recursive`, `opts/headers`, `opts/ignore_bin`, `opts/normalize_eol` | bool |
//! | `opts/cs_remove_comments`, `opts/cs_remove_usings` | bool |
//! | `opts/max_mb` | number |
//! | `out/path` | text |
//!
//! `profiles/current` names the profile saved last.

use super::SettingsStore;
use crate::config::{Config, Options, OptionsBuilder, OutputDestination};
use crate::constants::{DEFAULT_MAX_MB, DEFAULT_PROFILE_NAME};
use crate::discovery::{normalize_and_dedupe, normalize_path};
use crate::errors::{Error, Result};
use log::debug;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

const PROFILES_ROOT: &str = "profiles";
const CURRENT_KEY: &str = "profiles/current";

/// One root in a profile's list. Unchecked roots are kept but not used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileItem {
    pub path: String,
    pub checked: bool,
}

impl ProfileItem {
    pub fn new(path: impl Into<String>, checked: bool) -> Self {
        Self {
            path: path.into(),
            checked,
        }
    }

    /// Parses a stored `"<path>|<0 or 1>"` entry. An entry without `|` is a
    /// checked path.
    fn parse(entry: &str) -> Self {
        match entry.rsplit_once('|') {
            Some((path, flag)) => Self::new(path, flag == "1"),
            None => Self::new(entry, true),
        }
    }

    fn encode(&self) -> String {
        format!("{}|{}", self.path, if self.checked { "1" } else { "0" })
    }
}

/// The stored settings of one named profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub items: Vec<ProfileItem>,
    /// Comma-separated include extensions, as typed.
    pub extensions: String,
    /// Comma-separated excluded directory names, as typed.
    pub exclude_dirs: String,
    pub recursive: bool,
    pub headers: bool,
    pub ignore_binaries: bool,
    pub normalize_eol: bool,
    pub max_mb: f64,
    pub output_path: Option<String>,
    pub cs_remove_comments: bool,
    pub cs_remove_usings: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            extensions: String::new(),
            exclude_dirs: String::new(),
            recursive: true,
            headers: true,
            ignore_binaries: true,
            normalize_eol: true,
            max_mb: DEFAULT_MAX_MB,
            output_path: None,
            cs_remove_comments: false,
            cs_remove_usings: false,
        }
    }
}

impl Profile {
    /// Captures the effective settings of a run. Every root becomes a checked item.
    pub fn from_config(config: &Config) -> Self {
        let options = &config.options;
        let items = normalize_and_dedupe(&config.roots)
            .into_iter()
            .map(|p| ProfileItem::new(p.to_string_lossy(), true))
            .collect();
        let join = |set: &BTreeSet<String>| {
            set.iter().cloned().collect::<Vec<_>>().join(", ")
        };
        let output_path = match &config.output_destination {
            OutputDestination::File(path) => Some(path.display().to_string()),
            _ => None,
        };
        Self {
            items,
            extensions: join(options.include_extensions()),
            exclude_dirs: join(options.exclude_dir_names()),
            recursive: options.recursive(),
            headers: options.add_headers(),
            ignore_binaries: options.ignore_binaries(),
            normalize_eol: options.normalize_eol(),
            max_mb: options.max_mb(),
            output_path,
            cs_remove_comments: options.clean_flags().remove_comments,
            cs_remove_usings: options.clean_flags().remove_usings,
        }
    }

    /// Paths of the checked items, in list order.
    pub fn checked_roots(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.path.clone())
            .collect()
    }

    /// An [`OptionsBuilder`] holding this profile's options.
    pub fn options_builder(&self) -> OptionsBuilder {
        OptionsBuilder::new()
            .extensions_csv(&self.extensions)
            .exclude_dirs_csv(&self.exclude_dirs)
            .recursive(self.recursive)
            .add_headers(self.headers)
            .ignore_binaries(self.ignore_binaries)
            .normalize_eol(self.normalize_eol)
            .max_mb(self.max_mb)
            .remove_comments(self.cs_remove_comments)
            .remove_usings(self.cs_remove_usings)
    }

    /// Builds the engine options of this profile.
    ///
    /// # Errors
    /// Returns `Error::Config` if the stored size cap is not positive.
    pub fn to_options(&self) -> Result<Options> {
        self.options_builder().build()
    }
}

fn profile_key(name: &str, key: &str) -> String {
    format!("{}/{}/{}", PROFILES_ROOT, name, key)
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() || name.contains('/') || name == "current" {
        return Err(Error::Settings(format!("invalid profile name '{}'", name)));
    }
    Ok(name)
}

fn read_bool<S: SettingsStore + ?Sized>(store: &S, key: &str, default: bool) -> bool {
    match store.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        Some(Value::Number(n)) => n.as_i64().map_or(default, |n| n != 0),
        _ => default,
    }
}

fn read_string<S: SettingsStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    store.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Names of all stored profiles, sorted.
pub fn list_profiles<S: SettingsStore + ?Sized>(store: &S) -> Vec<String> {
    store.child_groups(PROFILES_ROOT)
}

/// Reads a profile.
///
/// Item paths are normalized and duplicates dropped. Missing options fall
/// back to [`Profile::default`].
///
/// # Errors
/// Returns `Error::Settings` if no profile has this name.
pub fn load_profile<S: SettingsStore + ?Sized>(store: &S, name: &str) -> Result<Profile> {
    let name = validate_name(name)?;
    if !list_profiles(store).iter().any(|n| n == name) {
        return Err(Error::Settings(format!("profile '{}' does not exist", name)));
    }
    let key = |k: &str| profile_key(name, k);
    let defaults = Profile::default();

    let mut seen = HashSet::new();
    let items: Vec<ProfileItem> = store
        .get(&key("list/items"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(ProfileItem::parse)
                .filter_map(|mut item| {
                    let normalized = normalize_path(Path::new(&item.path));
                    if !seen.insert(normalized.clone()) {
                        return None;
                    }
                    item.path = normalized.to_string_lossy().into_owned();
                    Some(item)
                })
                .collect()
        })
        .unwrap_or_default();

    let max_mb = match store.get(&key("opts/max_mb")) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .unwrap_or(defaults.max_mb);

    let output_path = read_string(store, &key("out/path")).filter(|p| !p.trim().is_empty());

    debug!("Loaded profile '{}' with {} item(s)", name, items.len());
    Ok(Profile {
        items,
        extensions: read_string(store, &key("opts/exts")).unwrap_or_default(),
        exclude_dirs: read_string(store, &key("opts/excludedirs")).unwrap_or_default(),
        recursive: read_bool(store, &key("opts/recursive"), defaults.recursive),
        headers: read_bool(store, &key("opts/headers"), defaults.headers),
        ignore_binaries: read_bool(store, &key("opts/ignore_bin"), defaults.ignore_binaries),
        normalize_eol: read_bool(store, &key("opts/normalize_eol"), defaults.normalize_eol),
        max_mb,
        output_path,
        cs_remove_comments: read_bool(store, &key("opts/cs_remove_comments"), false),
        cs_remove_usings: read_bool(store, &key("opts/cs_remove_usings"), false),
    })
}

/// Stores `profile` under `name`, replacing any previous content, and makes
/// it the current profile.
///
/// # Errors
/// Returns `Error::Settings` for an empty name, a name containing `/`, or
/// the reserved name `current`.
pub fn save_profile<S: SettingsStore + ?Sized>(
    store: &mut S,
    name: &str,
    profile: &Profile,
) -> Result<()> {
    let name = validate_name(name)?;
    store.remove(&format!("{}/{}", PROFILES_ROOT, name));
    let key = |k: &str| profile_key(name, k);

    let items: Vec<String> = profile.items.iter().map(ProfileItem::encode).collect();
    store.set(&key("list/items"), json!(items));
    store.set(&key("opts/exts"), json!(profile.extensions));
    store.set(&key("opts/excludedirs"), json!(profile.exclude_dirs));
    store.set(&key("opts/recursive"), json!(profile.recursive));
    store.set(&key("opts/headers"), json!(profile.headers));
    store.set(&key("opts/ignore_bin"), json!(profile.ignore_binaries));
    store.set(&key("opts/normalize_eol"), json!(profile.normalize_eol));
    store.set(&key("opts/max_mb"), json!(profile.max_mb));
    store.set(&key("opts/cs_remove_comments"), json!(profile.cs_remove_comments));
    store.set(&key("opts/cs_remove_usings"), json!(profile.cs_remove_usings));
    store.set(
        &key("out/path"),
        json!(profile.output_path.clone().unwrap_or_default()),
    );
    store.set(CURRENT_KEY, json!(name));
    debug!("Saved profile '{}'", name);
    Ok(())
}

/// Deletes a profile. If it was current, no profile is current afterwards.
///
/// # Errors
/// Returns `Error::Settings` if no profile has this name.
pub fn delete_profile<S: SettingsStore + ?Sized>(store: &mut S, name: &str) -> Result<()> {
    let name = validate_name(name)?;
    if !list_profiles(store).iter().any(|n| n == name) {
        return Err(Error::Settings(format!("profile '{}' does not exist", name)));
    }
    store.remove(&format!("{}/{}", PROFILES_ROOT, name));
    if read_string(store, CURRENT_KEY).as_deref() == Some(name) {
        store.remove(CURRENT_KEY);
    }
    Ok(())
}

/// Renames a profile, keeping it current if it was.
///
/// # Errors
/// Returns `Error::Settings` if `old` does not exist or `new` already does.
pub fn rename_profile<S: SettingsStore + ?Sized>(store: &mut S, old: &str, new: &str) -> Result<()> {
    let old = validate_name(old)?;
    let new = validate_name(new)?;
    if old == new {
        return Ok(());
    }
    let names = list_profiles(store);
    if !names.iter().any(|n| n == old) {
        return Err(Error::Settings(format!("profile '{}' does not exist", old)));
    }
    if names.iter().any(|n| n == new) {
        return Err(Error::Settings(format!("profile '{}' already exists", new)));
    }

    let old_key = format!("{}/{}", PROFILES_ROOT, old);
    if let Some(content) = store.get(&old_key).cloned() {
        store.set(&format!("{}/{}", PROFILES_ROOT, new), content);
    }
    store.remove(&old_key);
    if read_string(store, CURRENT_KEY).as_deref() == Some(old) {
        store.set(CURRENT_KEY, json!(new));
    }
    Ok(())
}

/// The current profile, if it names a stored profile.
pub fn current_profile<S: SettingsStore + ?Sized>(store: &S) -> Option<String> {
    let name = read_string(store, CURRENT_KEY)?;
    list_profiles(store).contains(&name).then_some(name)
}

/// Creates an empty `Default` profile when no profile exists.
///
/// Returns `true` if it was created.
pub fn ensure_default_profile<S: SettingsStore + ?Sized>(store: &mut S) -> Result<bool> {
    if !list_profiles(store).is_empty() {
        return Ok(false);
    }
    save_profile(store, DEFAULT_PROFILE_NAME, &Profile::default())?;
    Ok(true)
}
