use std::fmt;
use ng_core::{InferenceModel, Result};

/// Offline model that keeps the leading words of the text
#[derive(Default)]
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, target_words: usize) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(target_words).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::new();

        let text = "This is a test article. It has multiple sentences. This is the third sentence.";
        let summary = model.summarize(text, 5).await.unwrap();
        assert_eq!(summary, "This is a test article.");

        let summary = model.summarize(text, 100).await.unwrap();
        assert_eq!(summary, text);

        assert!(model.summarize(text, 0).await.unwrap().is_empty());
    }
}
