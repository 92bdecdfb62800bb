// SPDX-License-Identifier: MPL-2.0
//! Article page assembly: injecting rendered articles into the shared page
//! template and rewriting its head metadata.

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::site::article::Article;
use regex::Regex;
use std::sync::OnceLock;

/// Marker the page template carries where article content is spliced in.
pub const CONTENT_MARKER: &str = "<!-- ARTICLE_CONTENT -->";

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<title[^>]*>.*?</title>").unwrap())
}

fn description_meta_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)(<meta\s[^>]*name="description"[^>]*\scontent=")[^"]*(")"#).unwrap()
    })
}

fn og_description_meta_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)(<meta\s[^>]*property="og:description"[^>]*\scontent=")[^"]*(")"#)
            .unwrap()
    })
}

/// Renders one article into the page template.
///
/// The template must carry the content marker. The `<title>` becomes
/// `{article title} - {site name}`; the description and `og:description`
/// metas are rewritten only when the frontmatter provides a description.
pub fn render_page(template: &str, article: &Article, config: &SiteConfig) -> Result<String> {
    if !template.contains(CONTENT_MARKER) {
        return Err(Error::Template(format!(
            "template is missing the {CONTENT_MARKER} marker"
        )));
    }

    let mut page = template.replace(CONTENT_MARKER, &article.to_html(&config.read_time_label));

    let page_title = format!("{} - {}", article.title(), config.site_name);
    page = title_re()
        .replace(&page, format!("<title>{page_title}</title>"))
        .into_owned();

    if let Some(description) = &article.frontmatter.description {
        let rewrite = format!("${{1}}{description}${{2}}");
        page = description_meta_re().replace(&page, &rewrite).into_owned();
        page = og_description_meta_re().replace(&page, &rewrite).into_owned();
    }

    Ok(page)
}
