// SPDX-License-Identifier: MPL-2.0
//! `glissade` is the toolkit behind a small bilingual personal website.
//!
//! It has two halves. The build half (`site`) renders markdown articles into
//! a shared page template, emits the article index, and produces per-language
//! copies of the home page from translation dictionaries. The runtime half
//! (`transition`, `i18n`) is the headless core of the site's in-page
//! navigation: a transition controller that fades between the home and
//! article views without full page loads, and a language resolver that maps
//! visitor preference onto the site's path scheme. The runtime core talks to
//! its embedder only through the traits in `port`.

#![doc(html_root_url = "https://docs.rs/glissade/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod port;
pub mod site;
pub mod transition;
