// SPDX-License-Identifier: MPL-2.0
//! Fragment extraction from fetched documents.
//!
//! Only three things are ever read out of a fetched page: the outer markup
//! of its single `<main>` region, its `<title>` text, and the content of its
//! `<meta name="description">` tag. Pattern matching over serialized markup
//! is acceptable here because every fetched page is emitted by this same
//! repository's build pipeline, so the shape is fully controlled.

use crate::domain::PageFragment;
use crate::transition::NavigationError;
use regex::Regex;
use std::sync::OnceLock;

fn main_region_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?si)<main(?:\s[^>]*)?>.*?</main>").unwrap())
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?si)<title[^>]*>(.*?)</title>").unwrap())
}

fn description_meta_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?si)<meta\s[^>]*name="description"[^>]*>"#).unwrap())
}

fn content_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Whitespace-anchored so a `data-i18n-content` attribute on the same tag
    // can never match as the content attribute.
    RE.get_or_init(|| Regex::new(r#"\scontent="([^"]*)""#).unwrap())
}

/// Extracts the content region, title, and description from a fetched
/// document.
///
/// # Errors
///
/// Returns [`NavigationError::MissingContentRegion`] when the document has
/// no `<main>` element. Title and description are optional.
pub fn extract_fragment(html: &str) -> Result<PageFragment, NavigationError> {
    let main_html = main_region_re()
        .find(html)
        .map(|m| m.as_str().to_string())
        .ok_or(NavigationError::MissingContentRegion)?;

    let title = title_re()
        .captures(html)
        .map(|caps| caps[1].trim().to_string());

    let description = description_meta_re().find(html).and_then(|tag| {
        content_attr_re()
            .captures(tag.as_str())
            .map(|caps| caps[1].to_string())
    });

    Ok(PageFragment {
        main_html,
        title,
        description,
    })
}
