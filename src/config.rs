// SPDX-License-Identifier: MPL-2.0
//! Site configuration, loaded from a `glissade.toml` next to the content.
//!
//! Every field has a default matching the expected source layout, so a site
//! can omit the file entirely and just follow the conventions.
//!
//! # Examples
//!
//! ```no_run
//! use glissade::config::{self, SiteConfig};
//! use std::path::Path;
//!
//! let mut config = config::load_from_path(Path::new("glissade.toml")).unwrap_or_default();
//! config.site_name = "My Site".to_string();
//! config::save_to_path(&config, Path::new("glissade.toml")).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "glissade.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Human-readable site name, appended to article titles.
    pub site_name: String,
    /// Directory holding article markdown sources.
    pub articles_dir: PathBuf,
    /// HTML template every article page is rendered into.
    pub template: PathBuf,
    /// The default-language home page.
    pub home_page: PathBuf,
    /// Directory holding per-language translation dictionaries.
    pub localization_dir: PathBuf,
    /// Output directory for the generated site.
    pub out_dir: PathBuf,
    /// Primary subtag of the alternate language, used as the path prefix
    /// segment and as the dictionary file stem.
    pub alternate_language: String,
    /// Label rendered after the computed read time, e.g. "min read".
    pub read_time_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Glissade".to_string(),
            articles_dir: PathBuf::from("articles"),
            template: PathBuf::from("template.html"),
            home_page: PathBuf::from("index.html"),
            localization_dir: PathBuf::from("localization"),
            out_dir: PathBuf::from("dist"),
            alternate_language: "en".to_string(),
            read_time_label: "min read".to_string(),
        }
    }
}

impl SiteConfig {
    /// Resolves the config's relative paths against the site root.
    #[must_use]
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.articles_dir = root.join(&self.articles_dir);
        self.template = root.join(&self.template);
        self.home_page = root.join(&self.home_page);
        self.localization_dir = root.join(&self.localization_dir);
        self.out_dir = root.join(&self.out_dir);
        self
    }
}

/// Loads the config from the site root, falling back to defaults when the
/// file is absent.
pub fn load(root: &Path) -> Result<SiteConfig> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        return load_from_path(&path);
    }
    Ok(SiteConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = SiteConfig {
            site_name: "Example".to_string(),
            alternate_language: "de".to_string(),
            ..SiteConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.site_name, "Example");
        assert_eq!(loaded.alternate_language, "de");
        assert_eq!(loaded.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = load(temp_dir.path()).expect("load should not error");
        assert_eq!(config.articles_dir, PathBuf::from("articles"));
        assert_eq!(config.alternate_language, "en");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "site_name = \"Partial\"").expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.site_name, "Partial");
        assert_eq!(loaded.template, PathBuf::from("template.html"));
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write config");

        let loaded = load_from_path(&path).expect("load should not error");
        assert_eq!(loaded.site_name, "Glissade");
    }

    #[test]
    fn rooted_at_prefixes_every_path() {
        let config = SiteConfig::default().rooted_at(Path::new("/srv/site"));
        assert_eq!(config.articles_dir, PathBuf::from("/srv/site/articles"));
        assert_eq!(config.out_dir, PathBuf::from("/srv/site/dist"));
        assert_eq!(config.home_page, PathBuf::from("/srv/site/index.html"));
    }
}
