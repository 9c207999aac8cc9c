use async_trait::async_trait;
use ng_core::Result;

pub mod main_text;

pub use main_text::{extract_main_text, MainTextScraper};

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Fetches `url` and returns its readable text
    async fn scrape_text(&self, url: &str) -> Result<String>;
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use lazy_static::lazy_static;
    use ng_core::{Error, Result};
    use regex::Regex;
    use scraper::{ElementRef, Html, Selector};
    use url::Url;

    lazy_static! {
        static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
    }

    const NON_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript"];

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
    }

    pub fn selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector {}: {:?}", selector, e)))
    }

    /// Text of an element and its descendants, skipping scripts and styles.
    pub fn element_text(element: ElementRef) -> String {
        let mut text = String::new();
        for node in element.descendants() {
            let Some(fragment) = node.value().as_text() else { continue };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |el| NON_TEXT_ELEMENTS.contains(&el.name()))
            });
            if !hidden {
                text.push_str(fragment);
            }
        }
        text
    }

    /// Concatenated text of every element matching `selector`.
    pub fn extract_text(document: &Html, selector: &str) -> Result<String> {
        let selector = self::selector(selector)?;
        Ok(document.select(&selector).map(element_text).collect())
    }

    pub fn collapse_whitespace(text: &str) -> String {
        WHITESPACE.replace_all(text, " ").trim().to_string()
    }

    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        text.chars().take(max_chars).collect()
    }
}
