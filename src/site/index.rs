// SPDX-License-Identifier: MPL-2.0
//! The article index: `articles/index.json`, consumed by the home page to
//! list articles newest-first.

use crate::error::Result;
use crate::site::article::Article;
use chrono::NaiveDate;
use serde::Serialize;

/// One entry of `articles/index.json`. Field names are part of the contract
/// with the home page script, hence the camelCase rename.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleIndexEntry {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
    pub url: String,
    pub tags: Vec<String>,
}

impl ArticleIndexEntry {
    #[must_use]
    pub fn from_article(article: &Article, read_time_label: &str) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title().to_string(),
            description: article
                .frontmatter
                .description
                .clone()
                .unwrap_or_default(),
            date: article.frontmatter.date.clone().unwrap_or_default(),
            read_time: article.read_time(read_time_label),
            url: format!("/articles/{}", article.slug),
            tags: article.frontmatter.tags.clone(),
        }
    }
}

/// Builds the serialized index, sorted newest-first. Entries whose date does
/// not parse sort after every dated entry.
pub fn render_index(articles: &[Article], read_time_label: &str) -> Result<String> {
    let mut entries: Vec<ArticleIndexEntry> = articles
        .iter()
        .map(|article| ArticleIndexEntry::from_article(article, read_time_label))
        .collect();

    entries.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));

    Ok(serde_json::to_string_pretty(&entries)?)
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn article(slug: &str, source: &str) -> Article {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(format!("{slug}.md"));
        fs::write(&path, source).expect("failed to write article");
        Article::load(&path).expect("failed to load article")
    }

    #[test]
    fn entries_carry_the_contract_fields() {
        let articles = vec![article(
            "my-post",
            "---\ntitle: My Post\ndescription: About things\ndate: \"2024-03-01\"\ntags: [rust]\n---\nBody.\n",
        )];

        let json = render_index(&articles, "min read").expect("failed to render index");
        let parsed: Value = serde_json::from_str(&json).expect("index should be valid json");
        let entry = &parsed[0];

        assert_eq!(entry["slug"], "my-post");
        assert_eq!(entry["title"], "My Post");
        assert_eq!(entry["description"], "About things");
        assert_eq!(entry["date"], "2024-03-01");
        assert_eq!(entry["readTime"], "1 min read");
        assert_eq!(entry["url"], "/articles/my-post");
        assert_eq!(entry["tags"][0], "rust");
    }

    #[test]
    fn index_sorts_newest_first() {
        let articles = vec![
            article("old", "---\ndate: \"2023-01-15\"\n---\nBody.\n"),
            article("new", "---\ndate: \"2024-06-01\"\n---\nBody.\n"),
            article("mid", "---\ndate: \"2023-11-30\"\n---\nBody.\n"),
        ];

        let json = render_index(&articles, "min read").expect("failed to render index");
        let parsed: Value = serde_json::from_str(&json).expect("index should be valid json");
        let slugs: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["slug"].as_str().unwrap())
            .collect();

        assert_eq!(slugs, ["new", "mid", "old"]);
    }

    #[test]
    fn unparsable_dates_sort_last() {
        let articles = vec![
            article("undated", "Body only.\n"),
            article("dated", "---\ndate: \"2024-01-01\"\n---\nBody.\n"),
            article("garbled", "---\ndate: \"next tuesday\"\n---\nBody.\n"),
        ];

        let json = render_index(&articles, "min read").expect("failed to render index");
        let parsed: Value = serde_json::from_str(&json).expect("index should be valid json");
        let slugs: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["slug"].as_str().unwrap())
            .collect();

        assert_eq!(slugs[0], "dated");
        assert!(slugs[1..].contains(&"undated"));
        assert!(slugs[1..].contains(&"garbled"));
    }

    #[test]
    fn missing_optional_fields_serialize_as_empty() {
        let articles = vec![article("bare", "Body only.\n")];
        let json = render_index(&articles, "min read").expect("failed to render index");
        let parsed: Value = serde_json::from_str(&json).expect("index should be valid json");

        assert_eq!(parsed[0]["title"], "bare");
        assert_eq!(parsed[0]["description"], "");
        assert_eq!(parsed[0]["date"], "");
        assert_eq!(parsed[0]["tags"].as_array().unwrap().len(), 0);
    }
}
