// SPDX-License-Identifier: MPL-2.0
//! The page-transition controller: in-page navigation between the home view
//! and article views.
//!
//! One controller instance owns the whole navigation state machine for a
//! loaded page: it classifies intercepted clicks, runs the
//! fade-out/fetch/splice/fade-in sequence, reconciles popstate events with
//! its view model, and rewrites paths for the language toggle. Construct it
//! once at page initialization and hand it to the few callers that need it;
//! there is deliberately no global instance.
//!
//! All methods take `&self`: the controller lives on a single-threaded event
//! loop where reentrant events (a click landing mid-transition) are real, and
//! the transition lock, not the borrow checker, is what serializes them.

pub mod events;
pub mod page;

pub use events::{Click, ARTICLE_PATH_PREFIX};

use crate::domain::{HistoryEntry, LanguagePreference, PageFragment, View};
use crate::i18n::LanguageResolver;
use crate::port::document::DocumentHost;
use crate::port::fetch::FetchError;
use crate::port::history::HistoryHost;
use crate::port::PageFetcher;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::Duration;

/// Fixed duration of each fade phase. Fade-out and fade-in share the same
/// value to avoid visible stutter.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Errors that can abort an in-page transition. Every variant is converted
/// into a full browser navigation at the top of [`TransitionController::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The navigation fetch failed.
    Fetch(FetchError),
    /// The fetched document has no `<main>` content region.
    MissingContentRegion,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::Fetch(err) => write!(f, "{}", err),
            NavigationError::MissingContentRegion => {
                write!(f, "No main content found in page")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

impl From<FetchError> for NavigationError {
    fn from(err: FetchError) -> Self {
        NavigationError::Fetch(err)
    }
}

/// How a navigation request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The in-page transition ran to completion; view and document agree.
    Completed,
    /// The request was dropped without side effects: the lock was held, or
    /// there was nothing to do.
    Dropped,
    /// The fast path failed; a full browser navigation to the target path
    /// was issued instead.
    FellBack,
}

/// Coordinates in-page navigation for one loaded page.
pub struct TransitionController {
    document: RefCell<Box<dyn DocumentHost>>,
    history: RefCell<Box<dyn HistoryHost>>,
    fetcher: Box<dyn PageFetcher>,
    resolver: RefCell<LanguageResolver>,
    current_view: Cell<View>,
    is_transitioning: Cell<bool>,
    fade_duration: Duration,
}

impl TransitionController {
    /// Builds the controller, inferring the initial view from the current
    /// URL: article if the path matches the article pattern, home otherwise.
    #[must_use]
    pub fn new(
        document: Box<dyn DocumentHost>,
        history: Box<dyn HistoryHost>,
        fetcher: Box<dyn PageFetcher>,
        resolver: LanguageResolver,
    ) -> Self {
        let initial_view = if events::is_article_path(&history.current_path(), &resolver) {
            View::Article
        } else {
            View::Home
        };

        Self {
            document: RefCell::new(document),
            history: RefCell::new(history),
            fetcher,
            resolver: RefCell::new(resolver),
            current_view: Cell::new(initial_view),
            is_transitioning: Cell::new(false),
            fade_duration: FADE_DURATION,
        }
    }

    /// The logical page currently mounted.
    #[must_use]
    pub fn current_view(&self) -> View {
        self.current_view.get()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning.get()
    }

    /// Page-load hook: replaces URLs whose first segment duplicates resolver
    /// logic with the resolved localized root.
    pub fn redirect_if_language_segment_redundant(&self) {
        let resolver = self.resolver.borrow();
        let mut history = self.history.borrow_mut();
        resolver.redirect_if_language_segment_redundant(&mut **history);
    }

    /// Entry point for the delegated click listener. Returns `None` when the
    /// click is not one the controller intercepts.
    pub async fn handle_click(&self, click: &Click<'_>) -> Option<NavigationOutcome> {
        let request = events::classify(click, &self.resolver.borrow())?;
        Some(
            self.navigate(&request.path, request.view, request.push_history)
                .await,
        )
    }

    /// Entry point for the popstate listener. History has already moved, so
    /// reconciliation navigations never push. Paths that are neither home
    /// nor article are left to the browser.
    pub async fn handle_pop_state(&self) -> NavigationOutcome {
        if self.is_transitioning.get() {
            return NavigationOutcome::Dropped;
        }

        let path = self.history.borrow().current_path();
        let (home, article) = {
            let resolver = self.resolver.borrow();
            (
                events::is_home_path(&path, &resolver),
                events::is_article_path(&path, &resolver),
            )
        };

        if home && self.current_view.get() != View::Home {
            let target = self.resolver.borrow().localize("/");
            return self.navigate(&target, View::Home, false).await;
        }
        if article && self.current_view.get() != View::Article {
            return self.navigate(&path, View::Article, false).await;
        }

        NavigationOutcome::Dropped
    }

    /// Language-toggle action: navigates to the same logical page under the
    /// opposite language prefix and persists the new preference.
    pub async fn toggle_language(&self) -> NavigationOutcome {
        let current = self.history.borrow().current_path();
        let target = {
            let mut resolver = self.resolver.borrow_mut();
            let (target, preference) = if resolver.has_alternate_prefix(&current) {
                (resolver.delocalize(&current), LanguagePreference::Default)
            } else {
                (resolver.apply_prefix(&current), LanguagePreference::Alternate)
            };
            resolver.set_preference(preference);
            target
        };

        self.navigate(&target, self.current_view.get(), true).await
    }

    /// Runs one in-page navigation cycle.
    ///
    /// User-triggered requests (`push_history = true`) are dropped while a
    /// transition is in flight, and a home request is dropped when the home
    /// view is already mounted at that exact path. The history entry is
    /// pushed before any suspension point so the URL bar updates
    /// immediately. Any failure after that falls back to a full browser
    /// navigation, guaranteeing the visitor lands on a fully rendered page.
    /// The lock is released unconditionally as the final step.
    pub async fn navigate(&self, path: &str, view: View, push_history: bool) -> NavigationOutcome {
        if push_history {
            if self.is_transitioning.get() {
                return NavigationOutcome::Dropped;
            }
            if view == View::Home
                && self.current_view.get() == View::Home
                && self.history.borrow().current_path() == path
            {
                return NavigationOutcome::Dropped;
            }
        }

        self.is_transitioning.set(true);

        if push_history {
            self.history.borrow_mut().push(HistoryEntry::new(view, path));
        }

        let outcome = match self.run_transition(path).await {
            Ok(()) => {
                self.current_view.set(view);
                NavigationOutcome::Completed
            }
            Err(_err) => {
                self.history.borrow_mut().force_load(path);
                NavigationOutcome::FellBack
            }
        };

        self.is_transitioning.set(false);
        outcome
    }

    async fn run_transition(&self, path: &str) -> Result<(), NavigationError> {
        self.fade_out().await;
        let html = self.fetcher.fetch(path).await?;
        let fragment = page::extract_fragment(&html)?;
        self.apply_fragment(&fragment);
        self.fade_in().await;
        Ok(())
    }

    fn apply_fragment(&self, fragment: &PageFragment) {
        let mut document = self.document.borrow_mut();
        if let Some(title) = &fragment.title {
            document.set_title(title);
        }
        if let Some(description) = &fragment.description {
            document.set_description(description);
        }
        document.replace_main(&fragment.main_html);
    }

    async fn fade_out(&self) {
        self.document.borrow_mut().set_fade_opacity(0.0);
        tokio::time::sleep(self.fade_duration).await;
        // One-time instant scroll, while the page is invisible.
        self.document.borrow_mut().scroll_to_top();
    }

    async fn fade_in(&self) {
        let mut document = self.document.borrow_mut();
        document.set_fade_opacity(0.0);
        document.next_frame().await;
        document.set_fade_opacity(1.0);
        drop(document);
        tokio::time::sleep(self.fade_duration).await;
    }
}

impl fmt::Debug for TransitionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionController")
            .field("current_view", &self.current_view.get())
            .field("is_transitioning", &self.is_transitioning.get())
            .finish_non_exhaustive()
    }
}
