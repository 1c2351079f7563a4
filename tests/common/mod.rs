//! In-memory page fetcher and HTML builders shared by the integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use job_ads_checker_lib::domain::{FetchedPage, JobSource, PageFetcher};
use job_ads_checker_lib::infrastructure::config::SourceConfig;

/// Serves canned responses; unknown URLs fail like a refused connection
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, FetchedPage>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, body: impl Into<String>) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("connection refused: {url}"))
    }
}

pub struct Listing<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub university: &'a str,
    pub description: &'a str,
}

pub fn listing_page(items: &[Listing<'_>], next: Option<&str>) -> String {
    let next_link = next
        .map(|href| format!(r#"<link rel="next" href="{href}">"#))
        .unwrap_or_default();

    let body: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<li class="lister__item" id="item-{id}">
                    <h3 class="lister__header"><a href="/job/{id}/">{title}</a></h3>
                    <ul><li class="lister__meta-item lister__meta-item--recruiter">{university}</li></ul>
                    <p class="lister__description">{description}</p>
                </li>"#,
                id = item.id,
                title = item.title,
                university = item.university,
                description = item.description,
            )
        })
        .collect();

    format!("<html><head>{next_link}</head><body><ul>{body}</ul></body></html>")
}

/// One qualifying posting per page, chained `/jobs/1/` → `/jobs/<pages>/`
pub fn paginated_board(base_url: &str, pages: u32) -> StubFetcher {
    (1..=pages).fold(StubFetcher::new(), |fetcher, n| {
        let id = n.to_string();
        let title = format!("Faculty Position {n}");
        let next = (n < pages).then(|| format!("/jobs/{}/", n + 1));
        let html = listing_page(
            &[Listing {
                id: &id,
                title: &title,
                university: "University of Example",
                description: "Neuroscience",
            }],
            next.as_deref(),
        );
        fetcher.with_page(&format!("{base_url}/jobs/{n}/"), html)
    })
}

pub fn detail_page(title: &str, date_posted: &str) -> String {
    include_str!("../fixtures/detail_page.html")
        .replace("{{TITLE}}", title)
        .replace("{{DATE_POSTED}}", date_posted)
}

pub fn source(id: JobSource, base_url: &str, require_domain_match: bool) -> SourceConfig {
    SourceConfig {
        id,
        start_url: format!("{base_url}/jobs/1/"),
        base_url: base_url.to_string(),
        require_domain_match,
    }
}
