// SPDX-License-Identifier: MPL-2.0
//! Core value types shared between the runtime navigation core and the
//! browser ports.
//!
//! Everything here is plain data: created per event, consumed immediately,
//! never persisted. The only long-lived state in the runtime half lives on
//! [`crate::transition::TransitionController`].

use std::fmt;

/// The logical page currently presented to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Article,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => write!(f, "home"),
            View::Article => write!(f, "article"),
        }
    }
}

/// One user- or history-triggered navigation, consumed by
/// [`crate::transition::TransitionController::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Target path as it should appear in the URL bar.
    pub path: String,
    /// View the target path presents.
    pub view: View,
    /// Whether a new history entry should be pushed. `false` for popstate
    /// reconciliation, where history has already moved.
    pub push_history: bool,
}

/// Content extracted from a fetched document before any live-document
/// mutation happens.
///
/// Owned transiently for the duration of one transition and discarded after
/// being spliced into the live document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFragment {
    /// Outer markup of the `<main>` content region.
    pub main_html: String,
    /// Document title, when the fetched page carries one.
    pub title: Option<String>,
    /// `<meta name="description">` content, when present.
    pub description: Option<String>,
}

/// State carried by every history entry the controller pushes, sufficient to
/// reconstruct the view on back/forward without consulting the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub view: View,
    pub path: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(view: View, path: impl Into<String>) -> Self {
        Self {
            view,
            path: path.into(),
        }
    }
}

/// Resolved language choice governing which path/content variant is shown.
///
/// `Default` is the site's primary language, served from unprefixed paths.
/// `Alternate` is served under a language prefix segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguagePreference {
    #[default]
    Default,
    Alternate,
}

impl LanguagePreference {
    /// Stable storage token for the preference-store port.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguagePreference::Default => "default",
            LanguagePreference::Alternate => "alternate",
        }
    }

    /// Parses a stored token. Unknown tokens are treated as unset so stale
    /// or corrupted storage degrades to locale detection.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "default" => Some(LanguagePreference::Default),
            "alternate" => Some(LanguagePreference::Alternate),
            _ => None,
        }
    }
}

/// Modifier keys held during a click. Any active modifier preserves the
/// browser's native behavior (open in new tab, new window, download).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    #[must_use]
    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}
