// Trait abstractions for the pipeline's collaborators.
//
// InferenceClient stands in for the LLM provider; FeedbackStore stands in
// for Postgres. Both enable deterministic tests with the mocks in
// `testing`: no network, no database.

use async_trait::async_trait;
use chrono::NaiveDate;

use pulsecheck_common::FeedbackItem;

use crate::error::{Result, TriageError};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Send one prompt to the model and return its raw text response.
    async fn invoke(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl InferenceClient for ai_client::Claude {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        self.complete(prompt)
            .await
            .map_err(|e| TriageError::Inference(e.to_string()))
    }
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Number of persisted feedback items.
    async fn count(&self) -> Result<i64>;

    /// Insert one enriched item. `id` is the primary key.
    async fn insert(&self, item: &FeedbackItem) -> Result<()>;

    /// All items whose timestamp falls on the given day, newest first.
    async fn for_day(&self, day: NaiveDate) -> Result<Vec<FeedbackItem>>;
}
