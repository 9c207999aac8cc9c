use async_trait::async_trait;
use std::fmt;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Human readable name of the backing model
    fn name(&self) -> &str;

    /// Summarize `text` to roughly `target_words` words.
    ///
    /// An empty string means the model answered but produced nothing usable.
    async fn summarize(&self, text: &str, target_words: usize) -> Result<String>;
}
