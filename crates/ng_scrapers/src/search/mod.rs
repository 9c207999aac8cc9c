use async_trait::async_trait;
use ng_core::Result;

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoSearch;

#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Returns the name of the search engine
    fn name(&self) -> &str;

    /// Runs a text search and returns result URLs in ranking order
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// Search query for a topic: the topic followed by the keywords, commas turned into spaces.
pub fn build_query(topic: &str, keywords: &str) -> String {
    format!("{} {}", topic, keywords.replace(',', " "))
}
