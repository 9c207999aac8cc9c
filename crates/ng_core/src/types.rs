use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CATEGORIES: &[&str] = &[
    "Technology",
    "Finance",
    "Environment",
    "Healthcare",
    "Science",
    "Education",
    "Politics",
    "Sports",
    "Entertainment",
    "Business",
];

pub const SOURCES: &[&str] = &[
    "TechDaily",
    "Finance Weekly",
    "Green News",
    "Health Today",
    "Space News",
    "EduTech",
    "Global Times",
    "Sports Central",
];

/// Source recorded on every generated article
pub const AI_SOURCE: &str = "AI Generated";

const SUMMARY_LIMIT: usize = 150;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(crate::Error::Validation(format!("Unknown sentiment: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub source: String,
    pub category: String,
    pub sentiment: Sentiment,
    pub sentiment_explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An article as submitted for insertion, before it has an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub source: String,
    pub category: String,
    pub sentiment: Sentiment,
    pub sentiment_explanation: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewArticle {
    pub fn into_article(self, id: String, created_at: DateTime<Utc>) -> Article {
        Article {
            id,
            title: self.title,
            summary: self.summary,
            content: self.content,
            author: self.author,
            source: self.source,
            category: self.category,
            sentiment: self.sentiment,
            sentiment_explanation: self.sentiment_explanation,
            image_url: self.image_url,
            created_at,
        }
    }
}

/// Summary shown for hand-written articles: the first 150 characters plus an ellipsis.
pub fn authored_summary(content: &str) -> String {
    ellipsize(content, SUMMARY_LIMIT)
}

/// Summary shown for generated articles, capped at 150 characters including the ellipsis.
pub fn generated_summary(content: &str) -> String {
    ellipsize(content, SUMMARY_LIMIT - 3)
}

fn ellipsize(text: &str, keep: usize) -> String {
    if text.chars().count() > SUMMARY_LIMIT {
        let head: String = text.chars().take(keep).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
