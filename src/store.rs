//! The response store - a string-to-string mapping persisted as `responses.json`.
//!
//! This is the bot's only durable state. The store loads the backing file at
//! startup (creating it with a default mapping on first run), hands out texts
//! to the lookup commands, and rewrites the whole file on every admin edit.
//! Loading is self-healing: a missing, corrupt, or wrong-shaped file never
//! fails the caller, it just falls back to the built-in defaults.

use crate::errors::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of a [`ResponseStore::load`] call.
///
/// Exists so callers and tests can observe the fallback path directly instead
/// of inspecting logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The backing file parsed as a JSON object with at least one usable entry.
    Clean,
    /// The file was unreadable, not an object, or filtered down to nothing;
    /// the built-in default mapping is in effect.
    Degraded,
}

/// A value as it appears in the backing file. Anything that is not a JSON
/// string deserializes into the `Other` arm and is dropped during filtering,
/// so a half-edited file loses only the bad entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Key-to-text mapping backed by a pretty-printed JSON object on disk.
#[derive(Debug)]
pub struct ResponseStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    degraded: bool,
}

/// The built-in mapping used when the backing file is absent or unusable.
fn default_responses() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "lockpicks".to_string(),
        "Jeg kan ikke hjælpe med instruktioner til at fremstille lockpicks \
         eller materialelister til det.\n\
         Hvis du interesserer dig for lockpicking som hobby, så hold det \
         lovligt: brug kun træningsudstyr, og øv kun på egne låse eller låse \
         du har udtrykkelig tilladelse til."
            .to_string(),
    )])
}

impl ResponseStore {
    /// Creates an empty store bound to `path`. Call [`Self::load`] before use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            degraded: false,
        }
    }

    /// Loads (or creates) the backing file, replacing the in-memory mapping.
    ///
    /// Never fails from the caller's point of view: any read/parse problem and
    /// any file that filters down to no usable entries ends in the default
    /// mapping with [`LoadOutcome::Degraded`]. The file itself is only written
    /// here when it does not exist yet; a corrupt file is left untouched for
    /// manual inspection.
    pub fn load(&mut self) -> LoadOutcome {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Response file missing, seeding defaults");
            if let Err(e) = write_entries(&self.path, &default_responses()) {
                warn!(
                    "Could not create {} ({e}), continuing with defaults in memory",
                    self.path.display()
                );
                return self.finish_load(default_responses(), LoadOutcome::Degraded);
            }
        }

        match read_entries(&self.path) {
            Ok(entries) if !entries.is_empty() => self.finish_load(entries, LoadOutcome::Clean),
            Ok(_) => {
                warn!(
                    "{} contains no usable entries, using defaults",
                    self.path.display()
                );
                self.finish_load(default_responses(), LoadOutcome::Degraded)
            }
            Err(e) => {
                warn!(
                    "Failed to load {} ({e}), using defaults",
                    self.path.display()
                );
                self.finish_load(default_responses(), LoadOutcome::Degraded)
            }
        }
    }

    fn finish_load(&mut self, entries: BTreeMap<String, String>, outcome: LoadOutcome) -> LoadOutcome {
        self.entries = entries;
        self.degraded = outcome == LoadOutcome::Degraded;
        outcome
    }

    /// Returns the text for `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or overwrites `key`, then persists the whole mapping.
    ///
    /// The store does not trim or validate the key; the command layer rejects
    /// empty keys before calling. I/O failures propagate, there is no local
    /// recovery for a disk that will not take the write.
    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), text.into());
        self.save()
    }

    /// Rewrites the backing file from the in-memory mapping.
    ///
    /// Pretty-printed UTF-8 with non-ASCII characters written literally, so
    /// the file stays hand-editable. A crash mid-write can corrupt the file;
    /// the next [`Self::load`] recovers by falling back to defaults.
    pub fn save(&self) -> Result<()> {
        write_entries(&self.path, &self.entries)
    }

    /// Whether the last [`Self::load`] fell back to the default mapping.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    /// Number of entries currently in memory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the in-memory mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses the file as a JSON object, keeping only string-valued entries.
/// A top-level array or scalar is a parse error, handled by the caller.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path)?;
    let raw: BTreeMap<String, RawValue> = serde_json::from_str(&contents)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            RawValue::Text(text) => Some((key, text)),
            RawValue::Other(_) => None,
        })
        .collect())
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ResponseStore {
        ResponseStore::new(dir.path().join("responses.json"))
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.load(), LoadOutcome::Clean);
        assert!(dir.path().join("responses.json").exists());
        assert!(store.get("lockpicks").unwrap().contains("lockpicks"));

        // A second load reads back exactly what the first one seeded.
        let mut again = store_in(&dir);
        assert_eq!(again.load(), LoadOutcome::Clean);
        assert_eq!(again.get("lockpicks"), store.get("lockpicks"));
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn test_non_object_file_yields_defaults_and_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

        let mut store = ResponseStore::new(&path);
        assert_eq!(store.load(), LoadOutcome::Degraded);
        assert!(store.degraded());
        assert!(store.get("lockpicks").is_some());

        // load() must not rewrite a corrupt file.
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"["not", "an", "object"]"#
        );
    }

    #[test]
    fn test_invalid_json_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, "{ this is not json").unwrap();

        let mut store = ResponseStore::new(&path);
        assert_eq!(store.load(), LoadOutcome::Degraded);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mixed_entries_keep_only_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"{"a": "x", "b": 5, "c": ["y"], "7": "z"}"#).unwrap();

        let mut store = ResponseStore::new(&path);
        assert_eq!(store.load(), LoadOutcome::Clean);
        assert!(!store.degraded());
        assert_eq!(store.get("a"), Some("x"));
        assert_eq!(store.get("7"), Some("z"));
        assert_eq!(store.get("b"), None);
        assert_eq!(store.get("c"), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_all_entries_filtered_out_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"{"a": 5}"#).unwrap();

        let mut store = ResponseStore::new(&path);
        assert_eq!(store.load(), LoadOutcome::Degraded);
        assert!(store.degraded());
        assert_eq!(store.get("a"), None);
        assert!(store.get("lockpicks").is_some());
    }

    #[test]
    fn test_set_persists_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load();

        store.set("newkey", "hello").unwrap();
        assert_eq!(store.get("newkey"), Some("hello"));

        // A fresh store reading the same file sees the write.
        let mut reloaded = store_in(&dir);
        assert_eq!(reloaded.load(), LoadOutcome::Clean);
        assert_eq!(reloaded.get("newkey"), Some("hello"));
    }

    #[test]
    fn test_set_overwrites_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load();

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k"), Some("second"));
    }

    #[test]
    fn test_store_accepts_untrimmed_keys() {
        // Trimming is the command layer's job; the store takes keys verbatim.
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load();

        store.set("  spaced  ", "v").unwrap();
        assert_eq!(store.get("  spaced  "), Some("v"));
        assert_eq!(store.get("spaced"), None);
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_save_writes_pretty_json_with_literal_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        let mut store = ResponseStore::new(&path);
        store.load();
        store.set("blæser", "Køb en blæser på værkstedet").unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\"blæser\""));
        assert!(on_disk.contains("værkstedet"));
        assert!(!on_disk.contains("\\u"));
        // Stable 2-space indentation, one entry per line.
        assert!(on_disk.contains("\n  \"blæser\""));
    }

    #[test]
    fn test_reload_picks_up_manual_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        let mut store = ResponseStore::new(&path);
        store.load();

        fs::write(&path, r#"{"9mm": "ny opskrift"}"#).unwrap();
        assert_eq!(store.load(), LoadOutcome::Clean);
        assert_eq!(store.get("9mm"), Some("ny opskrift"));
        // The replaced mapping drops the old defaults entirely.
        assert_eq!(store.get("lockpicks"), None);
    }
}
