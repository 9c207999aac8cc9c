use async_trait::async_trait;
use chrono::Utc;
use ng_core::{Article, ArticleStorage, NewArticle, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::StorageBackend;

#[derive(Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    pub fn insert(&mut self, article: NewArticle) -> Article {
        let article = article.into_article(Uuid::new_v4().to_string(), Utc::now());
        self.articles.push(article.clone());
        article
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.id == id).cloned()
    }

    pub fn list(&self, category: Option<&str>) -> Vec<Article> {
        // Later inserts first, so articles sharing a timestamp still come out newest first
        let mut articles: Vec<Article> = self.articles
            .iter()
            .rev()
            .filter(|a| category.map_or(true, |c| a.category == c))
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        articles
    }
}

/// Process-local storage, lost on exit
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    fn get_error_message() -> &'static str {
        "Memory storage should be available"
    }

    async fn new() -> Result<Self> where Self: Sized {
        Ok(Self::default())
    }
}

#[async_trait]
impl ArticleStorage for InMemoryStorage {
    async fn create_article(&self, article: NewArticle) -> Result<Article> {
        let mut store = self.store.write().await;
        Ok(store.insert(article))
    }

    async fn get_article(&self, id: &str) -> Result<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.get(id))
    }

    async fn list_articles(&self, category: Option<&str>) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.list(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_core::Sentiment;

    fn new_article(title: &str, category: &str) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            summary: "summary".to_string(),
            content: "This is a test article about politics.".to_string(),
            author: "tester@example.com".to_string(),
            source: "Global Times".to_string(),
            category: category.to_string(),
            sentiment: Sentiment::Neutral,
            sentiment_explanation: "User-generated content".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = InMemoryStorage::new();

        let created = storage.create_article(new_article("First", "Politics")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.title, "First");

        let fetched = storage.get_article(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        assert!(storage.get_article("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_filters() {
        let storage = InMemoryStorage::new();
        storage.create_article(new_article("First", "Politics")).await.unwrap();
        storage.create_article(new_article("Second", "Science")).await.unwrap();
        storage.create_article(new_article("Third", "Politics")).await.unwrap();

        let all = storage.list_articles(None).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        let politics = storage.list_articles(Some("Politics")).await.unwrap();
        assert_eq!(politics.len(), 2);
        assert!(politics.iter().all(|a| a.category == "Politics"));

        assert!(storage.list_articles(Some("Sports")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let storage = InMemoryStorage::new();
        let a = storage.create_article(new_article("A", "Science")).await.unwrap();
        let b = storage.create_article(new_article("A", "Science")).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
