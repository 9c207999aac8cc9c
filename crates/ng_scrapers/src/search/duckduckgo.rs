use std::time::Duration;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use ng_core::{Error, Result};
use crate::scrapers::{main_text::USER_AGENT, utils};
use super::SearchEngine;

pub const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com";

/// Result pages taken per search
pub const MAX_RESULTS: usize = 3;

lazy_static! {
    static ref UDDG: Regex = Regex::new(r"uddg=([^&]+)").expect("uddg pattern is valid");
}

/// Searches the DuckDuckGo HTML frontend
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearch {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl DuckDuckGoSearch {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: MAX_RESULTS,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/html/?q={}", self.base_url, urlencoding::encode(query))
    }
}

/// Destination URLs of the result links on a DuckDuckGo HTML results page, in page order.
///
/// Result anchors point at a DuckDuckGo redirect whose `uddg` parameter holds the
/// percent-encoded target.
pub fn parse_result_links(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = utils::selector("a.result__a")?;

    let mut links = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else { continue };
        let Some(captures) = UDDG.captures(href) else { continue };
        match urlencoding::decode(&captures[1]) {
            Ok(url) => links.push(url.into_owned()),
            Err(e) => debug!("Skipping undecodable result link {}: {}", href, e),
        }
    }
    Ok(links)
}

#[async_trait]
impl SearchEngine for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let url = self.search_url(query);
        debug!("Searching {}", url);
        let html = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Search(format!("Search request failed: {}", e)))?
            .text()
            .await?;

        let mut links = parse_result_links(&html)?;
        links.truncate(self.max_results);
        Ok(links)
    }
}
