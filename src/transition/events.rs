// SPDX-License-Identifier: MPL-2.0
//! Link classification for the delegated click listener.
//!
//! Two link categories are intercepted: internal article links (article-path
//! prefix, optionally language-prefixed) and home-equivalent links. Anything
//! else, and any click with a modifier key held, is left to the browser.

use crate::domain::{Modifiers, NavigationRequest, View};
use crate::i18n::LanguageResolver;

/// Path prefix under which the build pipeline emits article pages.
pub const ARTICLE_PATH_PREFIX: &str = "/articles/";

/// One delegated click on an anchor, as reported by the embedder.
#[derive(Debug, Clone, Copy)]
pub struct Click<'a> {
    /// The anchor's `href` attribute value.
    pub href: &'a str,
    /// Whether the anchor is marked as a home/back link.
    pub home_link: bool,
    /// Modifier keys held during the click.
    pub modifiers: Modifiers,
}

/// Classifies a click into a navigation request, or `None` when the click
/// must keep its native browser behavior.
pub fn classify(click: &Click<'_>, resolver: &LanguageResolver) -> Option<NavigationRequest> {
    if click.modifiers.any() {
        return None;
    }

    if is_article_path(click.href, resolver) {
        return Some(NavigationRequest {
            path: click.href.to_string(),
            view: View::Article,
            push_history: true,
        });
    }

    if click.home_link && (click.href == "/" || click.href.is_empty()) {
        return Some(NavigationRequest {
            path: resolver.localize("/"),
            view: View::Home,
            push_history: true,
        });
    }

    None
}

/// Whether `path` addresses an article page, under either language variant.
pub fn is_article_path(path: &str, resolver: &LanguageResolver) -> bool {
    resolver.delocalize(path).starts_with(ARTICLE_PATH_PREFIX)
}

/// Whether `path` addresses the home page, under either language variant.
pub fn is_home_path(path: &str, resolver: &LanguageResolver) -> bool {
    resolver.delocalize(path) == "/"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LanguagePreference;
    use crate::port::locale::LocaleSource;
    use crate::port::prefs::PreferenceStore;
    use unic_langid::LanguageIdentifier;

    struct FixedPrefs(Option<LanguagePreference>);

    impl PreferenceStore for FixedPrefs {
        fn get(&self) -> Option<LanguagePreference> {
            self.0
        }

        fn set(&mut self, _preference: LanguagePreference) {}
    }

    struct NoLocales;

    impl LocaleSource for NoLocales {
        fn preferred_locales(&self) -> Vec<LanguageIdentifier> {
            Vec::new()
        }
    }

    fn resolver(preference: LanguagePreference) -> LanguageResolver {
        LanguageResolver::new(
            "en".parse().unwrap(),
            Box::new(FixedPrefs(Some(preference))),
            Box::new(NoLocales),
        )
    }

    fn plain_click(href: &str) -> Click<'_> {
        Click {
            href,
            home_link: false,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn article_link_is_intercepted() {
        let r = resolver(LanguagePreference::Default);
        let request = classify(&plain_click("/articles/my-post"), &r).expect("intercepted");
        assert_eq!(request.path, "/articles/my-post");
        assert_eq!(request.view, View::Article);
        assert!(request.push_history);
    }

    #[test]
    fn language_prefixed_article_link_is_intercepted() {
        let r = resolver(LanguagePreference::Alternate);
        let request = classify(&plain_click("/en/articles/my-post"), &r).expect("intercepted");
        assert_eq!(request.path, "/en/articles/my-post");
        assert_eq!(request.view, View::Article);
    }

    #[test]
    fn modifier_click_preserves_native_behavior() {
        let r = resolver(LanguagePreference::Default);
        for modifiers in [
            Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
            Modifiers {
                meta: true,
                ..Modifiers::default()
            },
            Modifiers {
                shift: true,
                ..Modifiers::default()
            },
        ] {
            let click = Click {
                href: "/articles/my-post",
                home_link: false,
                modifiers,
            };
            assert_eq!(classify(&click, &r), None);
        }
    }

    #[test]
    fn home_link_navigates_to_localized_root() {
        let r = resolver(LanguagePreference::Alternate);
        for href in ["/", ""] {
            let click = Click {
                href,
                home_link: true,
                modifiers: Modifiers::default(),
            };
            let request = classify(&click, &r).expect("intercepted");
            assert_eq!(request.path, "/en/");
            assert_eq!(request.view, View::Home);
        }
    }

    #[test]
    fn unmarked_root_link_is_not_intercepted() {
        let r = resolver(LanguagePreference::Default);
        assert_eq!(classify(&plain_click("/"), &r), None);
    }

    #[test]
    fn external_and_unrelated_links_are_not_intercepted() {
        let r = resolver(LanguagePreference::Default);
        assert_eq!(classify(&plain_click("/about"), &r), None);
        assert_eq!(classify(&plain_click("https://example.com/articles/x"), &r), None);
    }

    #[test]
    fn path_recognition_covers_both_language_variants() {
        let r = resolver(LanguagePreference::Default);
        assert!(is_article_path("/articles/a", &r));
        assert!(is_article_path("/en/articles/a", &r));
        assert!(!is_article_path("/en/", &r));
        assert!(is_home_path("/", &r));
        assert!(is_home_path("/en", &r));
        assert!(is_home_path("/en/", &r));
        assert!(!is_home_path("/articles/a", &r));
    }
}
