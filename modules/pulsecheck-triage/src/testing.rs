// Test mocks for the triage pipeline.
//
// Two mocks matching the two trait boundaries:
// - MockInference (InferenceClient) — substring-keyed canned responses
// - MemoryStore (FeedbackStore) — in-memory Vec with failure toggles

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use pulsecheck_common::FeedbackItem;

use crate::error::{Result, TriageError};
use crate::traits::{FeedbackStore, InferenceClient};

// ---------------------------------------------------------------------------
// MockInference
// ---------------------------------------------------------------------------

/// Canned inference responses, matched by substring of the prompt.
/// Builder pattern: `.on("dashboard", response)`. Prompts matching no
/// registration get the default; `failing()` turns every call into a
/// transport fault.
pub struct MockInference {
    responses: Vec<(String, String)>,
    default: String,
    fail: bool,
}

impl MockInference {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            responses: Vec::new(),
            default: default.into(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            responses: Vec::new(),
            default: String::new(),
            fail: true,
        }
    }

    pub fn on(mut self, needle: &str, response: &str) -> Self {
        self.responses.push((needle.to_string(), response.to_string()));
        self
    }
}

#[async_trait]
impl InferenceClient for MockInference {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        if self.fail {
            return Err(TriageError::Inference(
                "MockInference: transport fault".to_string(),
            ));
        }
        let matched = self
            .responses
            .iter()
            .find(|(needle, _)| prompt.contains(needle))
            .map(|(_, response)| response.clone());
        Ok(matched.unwrap_or_else(|| self.default.clone()))
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory FeedbackStore. `failing_reads()` / `failing_writes()` simulate
/// store faults on the respective paths.
pub struct MemoryStore {
    items: Mutex<Vec<FeedbackItem>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<FeedbackItem>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    /// Snapshot of everything inserted so far, in insertion order.
    pub fn items(&self) -> Vec<FeedbackItem> {
        self.items.lock().unwrap().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn count(&self) -> Result<i64> {
        if self.fail_reads {
            return Err(store_fault());
        }
        Ok(self.items.lock().unwrap().len() as i64)
    }

    async fn insert(&self, item: &FeedbackItem) -> Result<()> {
        if self.fail_writes {
            return Err(store_fault());
        }
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn for_day(&self, day: NaiveDate) -> Result<Vec<FeedbackItem>> {
        if self.fail_reads {
            return Err(store_fault());
        }
        let mut items: Vec<FeedbackItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.timestamp.date_naive() == day)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(items)
    }
}

fn store_fault() -> TriageError {
    TriageError::Other(anyhow::anyhow!("MemoryStore: simulated store fault"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::fixtures;

    #[tokio::test]
    async fn for_day_filters_and_sorts_newest_first() {
        let mut items = fixtures::fallback_items();
        // Push one item onto a different day.
        items[3].timestamp = items[3].timestamp - Duration::days(2);
        let day = items[0].timestamp.date_naive();
        let store = MemoryStore::with_items(items);

        let found = store.for_day(day).await.unwrap();

        assert_eq!(found.len(), 3);
        assert!(found.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let store = MemoryStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        let item = fixtures::fallback_items().remove(0);
        store.insert(&item).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn substring_routing_picks_first_match() {
        let mock = MockInference::new("default")
            .on("alpha", "A")
            .on("beta", "B");
        assert_eq!(mock.invoke("has alpha inside").await.unwrap(), "A");
        assert_eq!(mock.invoke("beta here").await.unwrap(), "B");
        assert_eq!(mock.invoke("neither").await.unwrap(), "default");
    }

    #[tokio::test]
    async fn failing_inference_errors() {
        let mock = MockInference::failing();
        assert!(mock.invoke("anything").await.is_err());
    }

    #[tokio::test]
    async fn unused_day_returns_empty() {
        let store = MemoryStore::with_items(fixtures::fallback_items());
        let other_day = Utc::now().date_naive() + Duration::days(365);
        assert!(store.for_day(other_day).await.unwrap().is_empty());
    }
}
