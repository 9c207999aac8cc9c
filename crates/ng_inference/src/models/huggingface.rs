use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use ng_core::{Error, InferenceModel, Result};

pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

#[derive(Serialize)]
struct SummarizeRequest {
    inputs: String,
}

/// Client for the hosted Hugging Face summarization endpoint
pub struct HuggingFaceModel {
    client: Arc<Client>,
    api_key: String,
    model_url: String,
}

impl HuggingFaceModel {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Inference("Hugging Face token is required (set HF_TOKEN)".to_string()))?;
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            model_url: DEFAULT_MODEL_URL.to_string(),
        })
    }

    pub fn with_model_url(mut self, model_url: impl Into<String>) -> Self {
        self.model_url = model_url.into();
        self
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_url", &self.model_url)
            .finish()
    }
}

/// Pull `summary_text` out of either a list of generations or a single object.
fn extract_summary(data: &Value) -> String {
    let summary = match data {
        Value::Array(items) => items.first().and_then(|item| item.get("summary_text")),
        Value::Object(_) => data.get("summary_text"),
        _ => None,
    };
    summary
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl InferenceModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, target_words: usize) -> Result<String> {
        let request = SummarizeRequest {
            inputs: format!("summarize to approximately {} words: {}", target_words, text),
        };

        let response = self.client
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Hugging Face API error: {}", body);
            return Err(Error::Inference(format!("Hugging Face API error ({}): {}", status, body)));
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Hugging Face API response as JSON: {}", e);
            Error::Inference(format!("Invalid Hugging Face API response: {}", e))
        })?;

        Ok(extract_summary(&data))
    }
}
