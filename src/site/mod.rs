// SPDX-License-Identifier: MPL-2.0
//! Build-time site generation.
//!
//! Three stages, each independently skippable with a warning when its inputs
//! are absent: article pages rendered from markdown into the page template,
//! the article index, and per-language copies of the home page. Warnings
//! never abort a build; I/O, template, and article parse failures do.

pub mod article;
pub mod i18n_emit;
pub mod index;
pub mod template;
pub mod writer;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use article::Article;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Outcome of one site build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Article pages written under `articles/`.
    pub articles: usize,
    /// Localized home-page copies written under `{lang}/`.
    pub localized_pages: usize,
    /// Non-fatal conditions encountered along the way.
    pub warnings: Vec<String>,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} article page(s), {} localized home page(s)",
            self.articles, self.localized_pages
        )
    }
}

/// Runs the full build into `config.out_dir`.
pub fn generate(config: &SiteConfig) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    generate_articles(config, &mut report)?;
    generate_home_pages(config, &mut report)?;

    Ok(report)
}

fn generate_articles(config: &SiteConfig, report: &mut BuildReport) -> Result<()> {
    if !config.articles_dir.exists() {
        report.warnings.push(format!(
            "articles directory not found at {}, skipping article processing",
            config.articles_dir.display()
        ));
        return Ok(());
    }

    let sources = markdown_sources(&config.articles_dir)?;
    if sources.is_empty() {
        report
            .warnings
            .push("no markdown files found in articles directory".to_string());
        return Ok(());
    }

    let page_template = fs::read_to_string(&config.template)?;

    let mut articles = Vec::with_capacity(sources.len());
    for source in &sources {
        articles.push(Article::load(source)?);
    }

    for item in &articles {
        let page = template::render_page(&page_template, item, config)?;
        let out = config
            .out_dir
            .join("articles")
            .join(format!("{}.html", item.slug));
        writer::write_output(&out, &page)?;
        report.articles += 1;
    }

    let index_json = index::render_index(&articles, &config.read_time_label)?;
    writer::write_output(&config.out_dir.join("articles").join("index.json"), &index_json)?;

    Ok(())
}

fn generate_home_pages(config: &SiteConfig, report: &mut BuildReport) -> Result<()> {
    let home = match fs::read_to_string(&config.home_page) {
        Ok(home) => home,
        Err(_) => {
            report.warnings.push(format!(
                "home page not found at {}, skipping localization",
                config.home_page.display()
            ));
            return Ok(());
        }
    };

    // Default-language copy, verbatim.
    writer::write_output(&config.out_dir.join("index.html"), &home)?;

    if !config.localization_dir.exists() {
        report.warnings.push(format!(
            "localization directory not found at {}, skipping localized pages",
            config.localization_dir.display()
        ));
        return Ok(());
    }

    for dictionary_path in dictionary_sources(&config.localization_dir)? {
        let lang = match dictionary_path.file_stem().and_then(|stem| stem.to_str()) {
            Some(lang) => lang.to_string(),
            None => continue,
        };
        let content = fs::read_to_string(&dictionary_path)?;
        let dictionary: Value = serde_json::from_str(&content).map_err(|err| {
            Error::Config(format!(
                "invalid translation dictionary {}: {}",
                dictionary_path.display(),
                err
            ))
        })?;

        let localized = i18n_emit::localize_html(&home, &dictionary, &lang);
        writer::write_output(&config.out_dir.join(&lang).join("index.html"), &localized)?;
        report.localized_pages += 1;
    }

    Ok(())
}

/// Markdown files of the articles directory, sorted by name so output and
/// index ties are deterministic.
fn markdown_sources(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    sources_with_extension(dir, "md")
}

fn dictionary_sources(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    sources_with_extension(dir, "json")
}

fn sources_with_extension(dir: &Path, extension: &str) -> Result<Vec<std::path::PathBuf>> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_in(root: &Path) -> SiteConfig {
        SiteConfig {
            site_name: "Example".to_string(),
            ..SiteConfig::default()
        }
        .rooted_at(root)
    }

    #[test]
    fn empty_site_builds_with_warnings_only() {
        let dir = tempdir().expect("failed to create temp dir");
        let report = generate(&config_in(dir.path())).expect("build should not error");

        assert_eq!(report.articles, 0);
        assert_eq!(report.localized_pages, 0);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn articles_stage_warns_on_empty_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("articles")).expect("failed to create articles dir");

        let report = generate(&config_in(dir.path())).expect("build should not error");
        assert_eq!(report.articles, 0);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("no markdown files")));
    }

    #[test]
    fn missing_template_aborts_when_articles_exist() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("articles")).expect("failed to create articles dir");
        fs::write(dir.path().join("articles").join("a.md"), "Body.\n")
            .expect("failed to write article");

        let err = generate(&config_in(dir.path())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_dictionary_aborts_the_build() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("index.html"), "<html lang=\"fr\"></html>")
            .expect("failed to write home page");
        fs::create_dir(dir.path().join("localization")).expect("failed to create dir");
        fs::write(dir.path().join("localization").join("en.json"), "{ not json")
            .expect("failed to write dictionary");

        let err = generate(&config_in(dir.path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn full_build_emits_every_artifact() {
        let dir = tempdir().expect("failed to create temp dir");
        let root = dir.path();

        fs::create_dir(root.join("articles")).expect("failed to create articles dir");
        fs::write(
            root.join("articles").join("my-post.md"),
            "---\ntitle: My Post\ndate: \"2024-03-01\"\n---\nBody text.\n",
        )
        .expect("failed to write article");
        fs::write(
            root.join("template.html"),
            "<html lang=\"fr\"><head><title>Example</title></head>\
             <body><main><!-- ARTICLE_CONTENT --></main></body></html>",
        )
        .expect("failed to write template");
        fs::write(
            root.join("index.html"),
            "<html lang=\"fr\"><body><h1 data-i18n=\"home.title\">Accueil</h1></body></html>",
        )
        .expect("failed to write home page");
        fs::create_dir(root.join("localization")).expect("failed to create dir");
        fs::write(
            root.join("localization").join("en.json"),
            r#"{ "home": { "title": "Home" } }"#,
        )
        .expect("failed to write dictionary");

        let report = generate(&config_in(root)).expect("build should succeed");
        assert_eq!(report.articles, 1);
        assert_eq!(report.localized_pages, 1);
        assert!(report.warnings.is_empty());

        let out = root.join("dist");
        let page = fs::read_to_string(out.join("articles").join("my-post.html"))
            .expect("article page should exist");
        assert!(page.contains("<title>My Post - Example</title>"));

        let index = fs::read_to_string(out.join("articles").join("index.json"))
            .expect("index should exist");
        assert!(index.contains("\"slug\": \"my-post\""));

        assert!(out.join("index.html").exists());
        let localized = fs::read_to_string(out.join("en").join("index.html"))
            .expect("localized page should exist");
        assert!(localized.contains("lang=\"en\""));
        assert!(localized.contains(">Home</h1>"));
    }

    #[test]
    fn sources_are_listed_in_name_order() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["zeta.md", "alpha.md", "notes.txt"] {
            fs::write(dir.path().join(name), "x").expect("failed to write file");
        }

        let sources = markdown_sources(dir.path()).expect("listing should succeed");
        let names: Vec<PathBuf> = sources
            .iter()
            .map(|p| PathBuf::from(p.file_name().unwrap()))
            .collect();
        assert_eq!(names, [PathBuf::from("alpha.md"), PathBuf::from("zeta.md")]);
    }
}
