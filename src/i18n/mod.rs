// SPDX-License-Identifier: MPL-2.0
//! Language resolution and path localization.
//!
//! The site serves its default language from unprefixed paths and exactly one
//! alternate language under a `/{code}` prefix segment. The resolver decides
//! which variant the current visitor should see and translates
//! language-agnostic paths into language-specific ones.
//!
//! Resolution priority: explicit stored preference, then the ordered list of
//! reported locales (primary-subtag match against the alternate code), then
//! the site default. The preference is re-read on every localization call;
//! it is written only by the explicit language toggle.

use crate::domain::{HistoryEntry, LanguagePreference, View};
use crate::port::history::HistoryHost;
use crate::port::locale::LocaleSource;
use crate::port::prefs::PreferenceStore;
use unic_langid::LanguageIdentifier;

/// Decides the active language and localizes paths.
pub struct LanguageResolver {
    alternate: LanguageIdentifier,
    prefs: Box<dyn PreferenceStore>,
    locales: Box<dyn LocaleSource>,
}

impl LanguageResolver {
    #[must_use]
    pub fn new(
        alternate: LanguageIdentifier,
        prefs: Box<dyn PreferenceStore>,
        locales: Box<dyn LocaleSource>,
    ) -> Self {
        Self {
            alternate,
            prefs,
            locales,
        }
    }

    /// Primary subtag of the alternate language, as used in path prefixes.
    #[must_use]
    pub fn alternate_code(&self) -> &str {
        self.alternate.language.as_str()
    }

    /// Resolves the visitor's language preference. Pure read, no side
    /// effects: stored value first, then reported locales, then the default.
    #[must_use]
    pub fn resolve_preference(&self) -> LanguagePreference {
        if let Some(stored) = self.prefs.get() {
            return stored;
        }

        let wants_alternate = self
            .locales
            .preferred_locales()
            .iter()
            .any(|locale| locale.language == self.alternate.language);

        if wants_alternate {
            LanguagePreference::Alternate
        } else {
            LanguagePreference::Default
        }
    }

    /// Persists an explicitly chosen preference. Storage failures are
    /// swallowed by the store port.
    pub fn set_preference(&mut self, preference: LanguagePreference) {
        self.prefs.set(preference);
    }

    /// Localizes a language-agnostic path for the resolved preference.
    ///
    /// Identity for the default language. For the alternate language the
    /// prefix segment is inserted after the leading slash, and the operation
    /// is idempotent: an already-prefixed path comes back unchanged.
    #[must_use]
    pub fn localize(&self, path: &str) -> String {
        match self.resolve_preference() {
            LanguagePreference::Default => path.to_string(),
            LanguagePreference::Alternate => self.apply_prefix(path),
        }
    }

    /// Inserts the alternate-language prefix regardless of the resolved
    /// preference. Idempotent.
    #[must_use]
    pub fn apply_prefix(&self, path: &str) -> String {
        if self.has_alternate_prefix(path) {
            return path.to_string();
        }
        format!("/{}{}", self.alternate_code(), path)
    }

    /// Strips the alternate-language prefix when present. Idempotent.
    #[must_use]
    pub fn delocalize(&self, path: &str) -> String {
        let prefix = format!("/{}", self.alternate_code());
        if path == prefix {
            return "/".to_string();
        }
        if let Some(rest) = path.strip_prefix(&prefix) {
            if rest.starts_with('/') {
                return rest.to_string();
            }
        }
        path.to_string()
    }

    /// Whether `path` already carries the alternate-language prefix segment.
    #[must_use]
    pub fn has_alternate_prefix(&self, path: &str) -> bool {
        let prefix = format!("/{}", self.alternate_code());
        path == prefix || path.starts_with(&format!("{}/", prefix))
    }

    /// Redirects away from URLs whose first path segment duplicates resolver
    /// logic: the alternate code itself, or the empty-segment root. Issues at
    /// most one `replace`-style navigation, never a push.
    pub fn redirect_if_language_segment_redundant(&self, history: &mut dyn HistoryHost) {
        let current = history.current_path();
        let first_segment = current.split('/').nth(1).unwrap_or_default();

        if first_segment != self.alternate_code() && !first_segment.is_empty() {
            return;
        }

        let target = self.localize("/");
        if current != target {
            history.replace(HistoryEntry::new(View::Home, target));
        }
    }
}

impl std::fmt::Debug for LanguageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResolver")
            .field("alternate", &self.alternate)
            .finish()
    }
}
