// SPDX-License-Identifier: MPL-2.0
//! Reported-locale port.
//!
//! The browser equivalent is `navigator.languages`, an ordered best-first
//! list. Resolution only ever compares primary language subtags, so region
//! and script tags in the reported list are harmless.

use unic_langid::LanguageIdentifier;

/// Port for the ordered list of locales the visitor's environment reports.
pub trait LocaleSource {
    fn preferred_locales(&self) -> Vec<LanguageIdentifier>;
}

/// [`LocaleSource`] backed by the operating system locale settings, for
/// headless embedders and the dev preview.
#[derive(Debug, Default)]
pub struct SystemLocaleSource;

impl LocaleSource for SystemLocaleSource {
    fn preferred_locales(&self) -> Vec<LanguageIdentifier> {
        sys_locale::get_locales()
            .filter_map(|locale| locale.parse::<LanguageIdentifier>().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_source_yields_only_parseable_locales() {
        // System dependent: just assert every yielded entry round-trips.
        for locale in SystemLocaleSource.preferred_locales() {
            assert!(!locale.language.as_str().is_empty());
        }
    }
}
