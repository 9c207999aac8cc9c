use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use ng_core::{Article, ArticleStorage, Error, NewArticle, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow};
use sqlx::Row;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;
use crate::StorageBackend;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS articles (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        summary TEXT NOT NULL,
        content TEXT NOT NULL,
        author TEXT NOT NULL,
        source TEXT NOT NULL,
        category TEXT NOT NULL,
        sentiment TEXT NOT NULL,
        sentiment_explanation TEXT NOT NULL,
        image_url TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS articles_category_idx ON articles (category, created_at)
    "#,
    // Add future migrations here
];

pub(crate) fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}

pub struct SQLiteStorage {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

#[async_trait]
impl StorageBackend for SQLiteStorage {
    fn get_error_message() -> &'static str {
        "SQLite database should be writable at ./articles.db"
    }

    async fn new() -> Result<Self> {
        let db_path = PathBuf::from("articles.db");
        Self::new_with_path(&db_path).await
    }
}

impl SQLiteStorage {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| Error::Storage(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Storage(format!("Failed to run migration {}: {}", i, e)))?;
        }

        tracing::debug!("Opened SQLite database at {}", db_path.display());

        Ok(Self {
            pool: Arc::new(pool),
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }

    fn row_to_article(row: &SqliteRow) -> Result<Article> {
        let sentiment: String = row.get("sentiment");
        let created_at: String = row.get("created_at");
        Ok(Article {
            id: row.get("id"),
            title: row.get("title"),
            summary: row.get("summary"),
            content: row.get("content"),
            author: row.get("author"),
            source: row.get("source"),
            category: row.get("category"),
            sentiment: sentiment.parse()?,
            sentiment_explanation: row.get("sentiment_explanation"),
            image_url: row.get::<Option<String>, _>("image_url"),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| Error::Storage(format!("Failed to parse date: {}", e)))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl ArticleStorage for SQLiteStorage {
    async fn create_article(&self, article: NewArticle) -> Result<Article> {
        let article = article.into_article(Uuid::new_v4().to_string(), Utc::now());

        sqlx::query(
            r#"
            INSERT INTO articles
            (id, title, summary, content, author, source, category, sentiment, sentiment_explanation, image_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&article.id)
        .bind(&article.title)
        .bind(&article.summary)
        .bind(&article.content)
        .bind(&article.author)
        .bind(&article.source)
        .bind(&article.category)
        .bind(article.sentiment.as_str())
        .bind(&article.sentiment_explanation)
        .bind(article.image_url.as_deref())
        // Fixed-width timestamps keep text ordering chronological
        .bind(article.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&*self.pool)
        .await
        .map_err(|e| Error::Storage(format!("Failed to store article: {}", e)))?;

        Ok(article)
    }

    async fn get_article(&self, id: &str) -> Result<Option<Article>> {
        let row = sqlx::query("SELECT * FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| Error::Storage(format!("Failed to get article {}: {}", id, e)))?;

        row.as_ref().map(Self::row_to_article).transpose()
    }

    async fn list_articles(&self, category: Option<&str>) -> Result<Vec<Article>> {
        let rows = match category {
            Some(category) => {
                sqlx::query(
                    r#"
                    SELECT * FROM articles
                    WHERE category = ?
                    ORDER BY created_at DESC, rowid DESC
                    "#,
                )
                .bind(category)
                .fetch_all(&*self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT * FROM articles ORDER BY created_at DESC, rowid DESC")
                    .fetch_all(&*self.pool)
                    .await
            }
        }
        .map_err(|e| Error::Storage(format!("Failed to list articles: {}", e)))?;

        rows.iter().map(Self::row_to_article).collect()
    }
}
