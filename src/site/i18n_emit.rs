// SPDX-License-Identifier: MPL-2.0
//! Localized home-page emission.
//!
//! Each `{lang}.json` dictionary in the localization directory is a nested
//! JSON object addressed with dotted keys. The home page marks translatable
//! spots with `data-i18n="key"` (element text) and `data-i18n-content="key"`
//! (the `content` attribute of meta tags); the emitter substitutes the
//! dictionary values and swaps the root `lang` attribute. A key missing from
//! the dictionary leaves its markup untouched, so a partial dictionary
//! degrades to the default language rather than to holes in the page.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn html_open_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<html\b[^>]*>").unwrap())
}

fn lang_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"lang="[^"]*""#).unwrap())
}

fn i18n_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<([a-zA-Z][a-zA-Z0-9]*)\b[^>]*\bdata-i18n="([^"]+)"[^>]*>"#).unwrap()
    })
}

fn i18n_content_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<[^>]*\bdata-i18n-content="([^"]+)"[^>]*>"#).unwrap())
}

fn content_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anchored on the preceding whitespace so the `content=` tail of the
    // `data-i18n-content` attribute name itself never matches.
    RE.get_or_init(|| Regex::new(r#"(\s)content="[^"]*""#).unwrap())
}

/// Resolves a dotted key against a nested dictionary. Only string leaves
/// count as translations.
fn lookup<'a>(dictionary: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(dictionary, |value, segment| value.get(segment))
        .and_then(Value::as_str)
}

/// Produces the localized copy of a page for one language.
#[must_use]
pub fn localize_html(html: &str, dictionary: &Value, lang: &str) -> String {
    let html = swap_root_lang(html, lang);
    let html = replace_text_content(&html, dictionary);
    replace_content_attrs(&html, dictionary)
}

/// Rewrites the `lang` attribute of the root `<html>` tag.
fn swap_root_lang(html: &str, lang: &str) -> String {
    let Some(open_tag) = html_open_tag_re().find(html) else {
        return html.to_string();
    };
    let swapped = lang_attr_re()
        .replace(open_tag.as_str(), format!(r#"lang="{lang}""#))
        .into_owned();

    let mut out = String::with_capacity(html.len());
    out.push_str(&html[..open_tag.start()]);
    out.push_str(&swapped);
    out.push_str(&html[open_tag.end()..]);
    out
}

/// Replaces the text content of every element carrying `data-i18n`.
///
/// The close tag is located by scanning forward for the first matching
/// `</tag>`; nested same-name elements do not occur in the marked spots.
fn replace_text_content(html: &str, dictionary: &Value) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;

    for caps in i18n_tag_re().captures_iter(html) {
        let Some(open) = caps.get(0) else {
            continue;
        };
        if open.start() < cursor {
            // Inside a region an earlier replacement already consumed.
            continue;
        }
        let tag_name = &caps[1];
        let key = &caps[2];

        let Some(translation) = lookup(dictionary, key) else {
            continue;
        };
        let close_pattern = format!("</{tag_name}>");
        let Some(close_offset) = html[open.end()..].find(&close_pattern) else {
            continue;
        };

        out.push_str(&html[cursor..open.end()]);
        out.push_str(translation);
        cursor = open.end() + close_offset;
    }

    out.push_str(&html[cursor..]);
    out
}

/// Rewrites the `content` attribute of every tag carrying
/// `data-i18n-content`, in either attribute order.
fn replace_content_attrs(html: &str, dictionary: &Value) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;

    for caps in i18n_content_tag_re().captures_iter(html) {
        let Some(tag) = caps.get(0) else {
            continue;
        };
        let key = &caps[1];

        let Some(translation) = lookup(dictionary, key) else {
            continue;
        };

        let rewritten = content_attr_re()
            .replace(tag.as_str(), format!(r#"${{1}}content="{translation}""#))
            .into_owned();

        out.push_str(&html[cursor..tag.start()]);
        out.push_str(&rewritten);
        cursor = tag.end();
    }

    out.push_str(&html[cursor..]);
    out
}
