// SPDX-License-Identifier: MPL-2.0
//! Port definitions for the runtime navigation core.
//!
//! The browser is an external collaborator: the live document, the history
//! stack, the network, durable preference storage, and the reported locale
//! list are all reached through the traits in this module. The transition
//! controller and the language resolver are written purely against these
//! seams, so the whole state machine runs headlessly under test with the
//! fake hosts living in each component's test module.
//!
//! A wasm embedding implements these traits over the real DOM APIs; that
//! shim is outside this crate's scope.

pub mod document;
pub mod fetch;
pub mod history;
pub mod locale;
pub mod prefs;

pub use document::DocumentHost;
pub use fetch::{FetchError, PageFetcher};
pub use history::HistoryHost;
pub use locale::{LocaleSource, SystemLocaleSource};
pub use prefs::{FilePreferenceStore, PreferenceStore};
