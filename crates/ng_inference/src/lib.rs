use std::fmt;

pub mod models;

pub use models::{create_model, DummyModel, HuggingFaceModel};
pub use ng_core::InferenceModel;

#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub model_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("model_url", &self.model_url)
            .finish()
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::Config;
    pub use ng_core::{Error, InferenceModel, Result};
}
