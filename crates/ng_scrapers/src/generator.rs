use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;
use ng_core::{
    generated_summary, Article, ArticleStorage, Error, InferenceModel, NewArticle, Result,
    Sentiment, AI_SOURCE,
};
use crate::logging::Logger;
use crate::scrapers::Scraper;
use crate::search::{build_query, SearchEngine};

/// Pages with this much text or less are not worth summarizing
pub const MIN_TEXT_CHARS: usize = 200;

pub const TITLE_SUFFIX: &str = " - Latest Insights";
pub const GENERATED_CATEGORY: &str = "Technology";
pub const GENERATED_EXPLANATION: &str = "AI-generated content based on web research";

const LOG_PREVIEW_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub keywords: String,
    pub word_count: usize,
    pub author: String,
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("topic", self.topic.trim().is_empty()),
            ("keywords", self.keywords.trim().is_empty()),
            ("wordCount", self.word_count == 0),
            ("author", self.author.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(format!("Missing required fields: {}", missing.join(", "))))
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > LOG_PREVIEW_CHARS {
        format!("{}...", text.chars().take(LOG_PREVIEW_CHARS).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Search, scrape, summarize and store: one article per request.
pub struct ArticleGenerator {
    search: Arc<dyn SearchEngine>,
    scraper: Arc<dyn Scraper>,
    model: Arc<dyn InferenceModel>,
    storage: Arc<dyn ArticleStorage>,
}

impl ArticleGenerator {
    pub fn new(
        search: Arc<dyn SearchEngine>,
        scraper: Arc<dyn Scraper>,
        model: Arc<dyn InferenceModel>,
        storage: Arc<dyn ArticleStorage>,
    ) -> Self {
        Self {
            search,
            scraper,
            model,
            storage,
        }
    }

    pub fn storage(&self) -> &Arc<dyn ArticleStorage> {
        &self.storage
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Article> {
        request.validate()?;

        let query = build_query(&request.topic, &request.keywords);
        info!("🔎 Searching {} for \"{}\"", self.search.name(), query);
        let urls = self.search.search(&query).await?;
        info!("🔗 Found {} sources: {:?}", urls.len(), urls);

        let summaries = self.summarize_sources(&urls, request.word_count).await;
        info!("📑 Kept {} of {} summaries", summaries.len(), urls.len());

        let content = summaries.join("\n\n");
        let article = NewArticle {
            title: format!("{}{}", request.topic, TITLE_SUFFIX),
            summary: generated_summary(&content),
            content,
            author: request.author.clone(),
            source: AI_SOURCE.to_string(),
            category: GENERATED_CATEGORY.to_string(),
            sentiment: Sentiment::Neutral,
            sentiment_explanation: GENERATED_EXPLANATION.to_string(),
            image_url: None,
        };

        let article = self.storage.create_article(article).await?;
        info!("📰 Stored generated article {} ({})", article.id, article.title);
        Ok(article)
    }

    /// Pages are processed one at a time; a page that cannot be scraped or
    /// summarized is skipped rather than failing the request.
    async fn summarize_sources(&self, urls: &[String], word_count: usize) -> Vec<String> {
        if urls.is_empty() {
            return Vec::new();
        }
        let target_words = word_count / urls.len();

        let mut summaries = Vec::new();
        for url in urls {
            let logger = Logger::new().with_prefix(format!("[{}]", url));

            let text = match self.scraper.scrape_text(url).await {
                Ok(text) => text,
                Err(e) => {
                    logger.warn(&format!("⚠️ Scrape failed: {}", e));
                    String::new()
                }
            };
            logger.info(&format!("Scraped text: {}", preview(&text)));

            if text.chars().count() <= MIN_TEXT_CHARS {
                logger.info("⏭️ Not enough text to summarize");
                continue;
            }

            match self.model.summarize(&text, target_words).await {
                Ok(summary) if !summary.is_empty() => {
                    logger.info(&format!("✨ Summary: {}", preview(&summary)));
                    summaries.push(summary);
                }
                Ok(_) => logger.warn("⚠️ Model returned an empty summary"),
                Err(e) => logger.warn(&format!("⚠️ Summarization failed: {}", e)),
            }
        }
        summaries
    }
}
