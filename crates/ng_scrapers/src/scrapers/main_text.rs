use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use ng_core::Result;
use super::{utils, Scraper};

pub const USER_AGENT: &str = "Mozilla/5.0";

/// Upper bound on the text handed to the summarizer
pub const MAX_TEXT_CHARS: usize = 3000;

/// Containers tried in order until one yields text
const CONTENT_SELECTORS: &[&str] = &["article", "main", "body"];

/// Scrapes the readable text of arbitrary pages
#[derive(Debug, Clone)]
pub struct MainTextScraper {
    client: Client,
    max_chars: usize,
}

impl MainTextScraper {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            max_chars: MAX_TEXT_CHARS,
        })
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

/// Whitespace-collapsed text of the page's main content, cut to `max_chars`.
pub fn extract_main_text(html: &str, max_chars: usize) -> Result<String> {
    let document = Html::parse_document(html);

    let mut text = String::new();
    for selector in CONTENT_SELECTORS {
        text = utils::collapse_whitespace(&utils::extract_text(&document, selector)?);
        if !text.is_empty() {
            break;
        }
    }

    Ok(utils::truncate_chars(&text, max_chars))
}

#[async_trait]
impl Scraper for MainTextScraper {
    async fn scrape_text(&self, url: &str) -> Result<String> {
        let url = utils::parse_url(url)?;
        let html = self.client.get(url).send().await?.text().await?;
        extract_main_text(&html, self.max_chars)
    }
}
