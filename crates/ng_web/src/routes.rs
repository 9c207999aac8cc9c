use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::{handlers, AppState};

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/generate", post(handlers::generate_article))
        .route("/api/articles", get(handlers::list_articles).post(handlers::create_article))
        .route("/api/articles/:id", get(handlers::get_article))
}
