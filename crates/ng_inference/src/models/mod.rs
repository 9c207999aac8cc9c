use std::sync::Arc;
use ng_core::{Error, InferenceModel, Result};
use tracing::info;
use crate::Config;

pub mod dummy;
pub mod huggingface;

pub use dummy::DummyModel;
pub use huggingface::HuggingFaceModel;

pub const DEFAULT_MODEL: &str = "huggingface";

/// Build the summarization model named in `config`, defaulting to Hugging Face.
pub fn create_model(config: &Config) -> Result<Arc<dyn InferenceModel>> {
    let name = config.model_name.as_deref().unwrap_or(DEFAULT_MODEL);
    let model: Arc<dyn InferenceModel> = match name.to_lowercase().as_str() {
        "huggingface" | "hf" => {
            let mut model = HuggingFaceModel::new(config.api_key.clone())?;
            if let Some(url) = &config.model_url {
                model = model.with_model_url(url.clone());
            }
            Arc::new(model)
        }
        "dummy" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Inference(format!(
                "Unknown model: {} (available: huggingface, dummy)",
                other
            )))
        }
    };
    info!("🧠 Inference model ready ({})", model.name());
    Ok(model)
}
