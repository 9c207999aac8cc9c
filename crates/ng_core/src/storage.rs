use async_trait::async_trait;
use crate::types::{Article, NewArticle};
use crate::Result;

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Insert an article, assigning its id and creation time
    async fn create_article(&self, article: NewArticle) -> Result<Article>;

    /// Fetch a single article by id
    async fn get_article(&self, id: &str) -> Result<Option<Article>>;

    /// List articles newest first, optionally restricted to one category
    async fn list_articles(&self, category: Option<&str>) -> Result<Vec<Article>>;
}
