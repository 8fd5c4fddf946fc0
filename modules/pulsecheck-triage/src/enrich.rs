// Enrichment pipeline: fan each raw item out to the model, repair the
// response, attach identity and timestamp, persist.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use tracing::info;
use uuid::Uuid;

use ai_client::util::truncate_to_char_boundary;
use pulsecheck_common::{FeedbackItem, RawFeedback};

use crate::analysis::normalize;
use crate::error::{Result, TriageError};
use crate::traits::{FeedbackStore, InferenceClient};

/// Feedback text beyond this many bytes is cut before prompting.
const MAX_FEEDBACK_BYTES: usize = 8_000;

/// Instruction prompt sent per feedback item. The worked example pins the
/// exact output shape; the model still wraps it in prose often enough that
/// `analysis::normalize` has to repair the response.
fn analysis_prompt(text: &str) -> String {
    let text = truncate_to_char_boundary(text, MAX_FEEDBACK_BYTES);
    format!(
        r#"Analyze this feedback: "{text}".

Return ONLY a JSON object with these exact keys:
{{
  "urgency": "low|medium|high",
  "sentiment": "positive|negative|neutral",
  "theme": "one-word-theme",
  "summary": "brief summary"
}}

Example: {{"urgency": "high", "sentiment": "negative", "theme": "performance", "summary": "Slow loading issue"}}"#
    )
}

#[derive(Clone)]
pub struct Enricher {
    inference: Arc<dyn InferenceClient>,
    store: Arc<dyn FeedbackStore>,
}

impl Enricher {
    pub fn new(inference: Arc<dyn InferenceClient>, store: Arc<dyn FeedbackStore>) -> Self {
        Self { inference, store }
    }

    /// Analyze one item. A malformed response never surfaces — normalization
    /// resolves it to the fallback record. An inference transport fault does.
    async fn analyze_one(&self, raw: &RawFeedback) -> Result<FeedbackItem> {
        let response = self.inference.invoke(&analysis_prompt(&raw.text)).await?;
        let analysis = normalize(&response);
        Ok(FeedbackItem {
            id: Uuid::new_v4(),
            source: raw.source.clone(),
            text: raw.text.clone(),
            timestamp: Utc::now(),
            analysis,
        })
    }

    /// Analyze a batch concurrently without persisting anything.
    pub async fn analyze(&self, items: &[RawFeedback]) -> Result<Vec<FeedbackItem>> {
        try_join_all(items.iter().map(|raw| self.analyze_one(raw))).await
    }

    /// Analyze a batch concurrently, persisting each item inside its own
    /// unit of work. The first inference or store fault aborts the batch;
    /// siblings already written stay written (best effort, no rollback).
    pub async fn enrich(&self, items: &[RawFeedback]) -> Result<Vec<FeedbackItem>> {
        let enriched = try_join_all(items.iter().map(|raw| async move {
            let item = self.analyze_one(raw).await?;
            self.store.insert(&item).await?;
            Ok::<_, TriageError>(item)
        }))
        .await?;

        info!(count = enriched.len(), "Enriched feedback batch");
        Ok(enriched)
    }
}
