use std::sync::Arc;
use ng_core::ArticleStorage;
use ng_scrapers::ArticleGenerator;

pub struct AppState {
    pub generator: Arc<ArticleGenerator>,
    pub storage: Arc<dyn ArticleStorage>,
}

impl AppState {
    pub fn new(generator: ArticleGenerator) -> Self {
        let storage = generator.storage().clone();
        Self {
            generator: Arc::new(generator),
            storage,
        }
    }
}
