// SPDX-License-Identifier: MPL-2.0
//! Live-document port.
//!
//! The controller mutates exactly four things in the live document: the
//! `<main>` region markup, the document title, the description meta tag, and
//! the opacity of elements tagged for transition. Everything else belongs to
//! the browser.

use async_trait::async_trait;

/// Port for the single live document.
///
/// The live document belongs to a single-threaded event loop, so
/// implementations are not required to be `Send`. None of the synchronous
/// methods may fail. A document without a `<main>` region treats
/// `replace_main` as a no-op, matching the browser behavior of mutating a
/// missing node.
#[async_trait(?Send)]
pub trait DocumentHost {
    /// Outer markup of the current `<main>` region, if one exists.
    fn main_html(&self) -> Option<String>;

    /// Replaces the `<main>` region with the given outer markup.
    fn replace_main(&mut self, html: &str);

    /// Sets the document title.
    fn set_title(&mut self, title: &str);

    /// Sets the `content` attribute of the description meta tag, when the
    /// document carries one.
    fn set_description(&mut self, description: &str);

    /// Sets the opacity of every element tagged for page transitions.
    fn set_fade_opacity(&mut self, opacity: f32);

    /// Instant scroll to the document origin.
    fn scroll_to_top(&mut self);

    /// Suspends until the next visual frame, so an opacity change lands in a
    /// separate frame from the markup swap and the CSS transition fires.
    async fn next_frame(&mut self);
}
