pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::InferenceModel;
pub use storage::ArticleStorage;
pub use types::{
    authored_summary, generated_summary, Article, NewArticle, Sentiment, AI_SOURCE, CATEGORIES,
    SOURCES,
};

pub mod prelude {
    pub use crate::{Article, ArticleStorage, Error, InferenceModel, NewArticle, Result, Sentiment};
}
