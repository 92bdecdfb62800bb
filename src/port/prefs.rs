// SPDX-License-Identifier: MPL-2.0
//! Durable language-preference storage.
//!
//! The browser equivalent is one `localStorage` key. Failure semantics are
//! deliberately soft: an unreadable store reads as "no preference" and the
//! resolver falls through to locale detection; a failed write is dropped.
//! Preference storage must never surface an error to the visitor.

use crate::domain::LanguagePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "preference.toml";
const APP_NAME: &str = "Glissade";

/// Port for the durable key-value entry holding the language preference.
pub trait PreferenceStore {
    /// Reads the stored preference. Storage failures degrade to `None`.
    fn get(&self) -> Option<LanguagePreference>;

    /// Persists a preference chosen by an explicit user toggle. Failures are
    /// swallowed.
    fn set(&mut self, preference: LanguagePreference);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreference {
    language: Option<String>,
}

/// File-backed [`PreferenceStore`] for headless embedders and the dev
/// preview, persisting under the user config directory.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
}

impl FilePreferenceStore {
    /// Creates a store rooted at the platform config directory. When no
    /// config directory exists the store is inert: reads yield `None` and
    /// writes are dropped.
    #[must_use]
    pub fn new() -> Self {
        let path = dirs::config_dir().map(|mut dir| {
            dir.push(APP_NAME);
            dir.push(PREFS_FILE);
            dir
        });
        Self { path }
    }

    /// Creates a store backed by an explicit file path (used in tests).
    #[must_use]
    pub fn with_path(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
        }
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> Option<LanguagePreference> {
        let path = self.path.as_ref()?;
        let content = fs::read_to_string(path).ok()?;
        let stored: StoredPreference = toml::from_str(&content).ok()?;
        LanguagePreference::from_stored(&stored.language?)
    }

    fn set(&mut self, preference: LanguagePreference) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let stored = StoredPreference {
            language: Some(preference.as_str().to_string()),
        };
        if let Ok(content) = toml::to_string_pretty(&stored) {
            let _ = fs::write(path, content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preference.toml");
        let mut store = FilePreferenceStore::with_path(&path);

        assert_eq!(store.get(), None);
        store.set(LanguagePreference::Alternate);
        assert_eq!(store.get(), Some(LanguagePreference::Alternate));
        store.set(LanguagePreference::Default);
        assert_eq!(store.get(), Some(LanguagePreference::Default));
    }

    #[test]
    fn get_degrades_to_none_on_corrupted_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preference.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write file");

        let store = FilePreferenceStore::with_path(&path);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn get_degrades_to_none_on_unknown_token() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preference.toml");
        fs::write(&path, "language = \"klingon\"").expect("failed to write file");

        let store = FilePreferenceStore::with_path(&path);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deep").join("nested").join("preference.toml");
        let mut store = FilePreferenceStore::with_path(&path);

        store.set(LanguagePreference::Alternate);
        assert!(path.exists());
    }
}
