use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use ng_core::{authored_summary, Article, Error, NewArticle, Sentiment};
use ng_scrapers::GenerationRequest;
use crate::error::{ApiError, FORM_INCOMPLETE, GENERATION_FAILED, MISSING_FIELDS};
use crate::AppState;

pub const AUTHORED_EXPLANATION: &str = "User-generated content";
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayload {
    pub topic: Option<String>,
    pub keywords: Option<String>,
    pub word_count: Option<usize>,
    pub author: Option<String>,
}

impl GeneratePayload {
    fn into_request(self) -> Option<GenerationRequest> {
        let request = GenerationRequest {
            topic: self.topic?,
            keywords: self.keywords?,
            word_count: self.word_count?,
            author: self.author?,
        };
        request.validate().ok().map(|_| request)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub article_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticlePayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub author: Option<String>,
    #[serde(alias = "image_url")]
    pub image_url: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl CreateArticlePayload {
    fn into_new_article(self) -> Option<NewArticle> {
        let content = required(self.content)?;
        Some(NewArticle {
            title: required(self.title)?,
            summary: authored_summary(&content),
            content,
            author: required(self.author).unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
            source: required(self.source)?,
            category: required(self.category)?,
            sentiment: self.sentiment?,
            sentiment_explanation: AUTHORED_EXPLANATION.to_string(),
            image_url: required(self.image_url),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

pub async fn generate_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeneratePayload>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = payload
        .ok()
        .and_then(|Json(payload)| payload.into_request())
        .ok_or_else(|| ApiError::BadRequest(MISSING_FIELDS.to_string()))?;

    info!("🪄 Generating article on \"{}\" for {}", request.topic, request.author);
    match state.generator.generate(&request).await {
        Ok(article) => Ok(Json(GenerateResponse {
            status: "success",
            message: "Article generated successfully",
            article_id: article.id,
        })),
        Err(Error::Validation(_)) => Err(ApiError::BadRequest(MISSING_FIELDS.to_string())),
        Err(e) => {
            error!("Error generating article: {}", e);
            Err(ApiError::Internal(GENERATION_FAILED.to_string()))
        }
    }
}

pub async fn create_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateArticlePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let article = payload
        .ok()
        .and_then(|Json(payload)| payload.into_new_article())
        .ok_or_else(|| ApiError::BadRequest(FORM_INCOMPLETE.to_string()))?;

    let article = state.storage.create_article(article).await?;
    info!("📝 Created article {} ({})", article.id, article.title);
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    Ok(Json(state.storage.list_articles(category).await?))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    state
        .storage
        .get_article(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))
}
