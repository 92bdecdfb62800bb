// SPDX-License-Identifier: MPL-2.0
//! Browser-history port.

use crate::domain::HistoryEntry;

/// Port for the single browser history stack.
///
/// `push` and `replace` carry a full [`HistoryEntry`] so back/forward can
/// reconstruct the view without a metadata fetch. `force_load` is the escape
/// hatch for failed in-page transitions: a full browser navigation that
/// abandons all in-page state and always lands on a correct, fully-rendered
/// page.
pub trait HistoryHost {
    /// Path component of the current URL, beginning with `/`.
    fn current_path(&self) -> String;

    /// Pushes a new entry; the entry path becomes the visible URL.
    fn push(&mut self, entry: HistoryEntry);

    /// Replaces the current entry without growing the stack.
    fn replace(&mut self, entry: HistoryEntry);

    /// Performs a full browser navigation to `path`.
    fn force_load(&mut self, path: &str);
}
