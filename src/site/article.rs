// SPDX-License-Identifier: MPL-2.0
//! Markdown article loading: frontmatter parsing, markdown rendering, and
//! read-time estimation.

use crate::error::{Error, Result};
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const WORDS_PER_MINUTE: usize = 220;
const FRONTMATTER_FENCE: &str = "---";

/// YAML frontmatter of an article source file. Every field is optional; the
/// file stem stands in for a missing title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
}

/// One article, loaded and rendered, ready for template injection.
#[derive(Debug, Clone)]
pub struct Article {
    /// URL slug, taken from the source file stem.
    pub slug: String,
    pub frontmatter: Frontmatter,
    /// Rendered HTML of the markdown body.
    pub body_html: String,
    /// Estimated read time in minutes.
    pub read_time_minutes: usize,
}

impl Article {
    /// Loads and renders one markdown source file.
    pub fn load(path: &Path) -> Result<Self> {
        let slug = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| Error::Article(format!("invalid article file name: {}", path.display())))?
            .to_string();

        let source = fs::read_to_string(path)?;
        let (frontmatter, body) = split_frontmatter(&source)?;

        Ok(Self {
            slug,
            frontmatter,
            body_html: render_markdown(body),
            read_time_minutes: read_time_minutes(body),
        })
    }

    /// The display title: frontmatter title, or the slug when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.frontmatter.title.as_deref().unwrap_or(&self.slug)
    }

    /// Read-time string as rendered in the article meta line and the index,
    /// e.g. `3 min read`.
    #[must_use]
    pub fn read_time(&self, label: &str) -> String {
        format!("{} {}", self.read_time_minutes, label)
    }

    /// The header block plus content region injected into the page template.
    #[must_use]
    pub fn to_html(&self, read_time_label: &str) -> String {
        let date = self.frontmatter.date.as_deref().unwrap_or_default();
        format!(
            "<div class=\"article-header\">\n  \
             <h1 class=\"article-title\">{}</h1>\n  \
             <div class=\"article-meta\">{} · {}</div>\n\
             </div>\n\
             <article class=\"article-content\">\n{}</article>",
            self.title(),
            date,
            self.read_time(read_time_label),
            self.body_html,
        )
    }
}

/// Splits optional `---`-fenced YAML frontmatter from the markdown body.
/// A file without a leading fence is all body.
fn split_frontmatter(source: &str) -> Result<(Frontmatter, &str)> {
    let Some(rest) = source.strip_prefix(FRONTMATTER_FENCE) else {
        return Ok((Frontmatter::default(), source));
    };
    let rest = rest.strip_prefix('\n').unwrap_or(rest);

    let Some(end) = rest.find("\n---") else {
        return Err(Error::Article("unterminated frontmatter fence".to_string()));
    };
    let yaml = &rest[..end];
    let body = rest[end + "\n---".len()..].trim_start_matches('\n');

    let frontmatter = serde_yaml_ng::from_str(yaml)?;
    Ok((frontmatter, body))
}

/// Renders markdown to HTML with tables and strikethrough enabled.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Estimates read time from the markdown body: markup stripped, whitespace
/// word count, 220 words per minute, rounded up.
#[must_use]
pub fn read_time_minutes(text: &str) -> usize {
    let plain = tag_re().replace_all(text, "");
    let words = plain.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE)
}
