use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

// --- Records ---

/// A feedback item as it arrives from a channel. Never persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFeedback {
    pub source: String,
    pub text: String,
}

/// Structured analysis attached to one feedback item.
///
/// Urgency and sentiment are closed enums: a model response that parses
/// but carries a value outside them fails deserialization and never makes
/// it past normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub urgency: Urgency,
    pub sentiment: Sentiment,
    pub theme: String,
    pub summary: String,
}

impl AnalysisResult {
    /// The record used whenever a model response cannot be repaired into a
    /// valid analysis.
    pub fn fallback() -> Self {
        Self {
            urgency: Urgency::Medium,
            sentiment: Sentiment::Neutral,
            theme: "general".to_string(),
            summary: "Analysis failed - could not parse AI response".to_string(),
        }
    }
}

/// An enriched feedback record. Created once at enrichment time and never
/// mutated in place; corrections require a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: Uuid,
    pub source: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// Point-in-time summary over a collection of enriched records.
/// Recomputed on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigestView {
    pub generated_at: DateTime<Utc>,
    pub urgent: Vec<FeedbackItem>,
    pub top_themes: Vec<ThemeCount>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeCount {
    pub theme: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
    }

    #[test]
    fn out_of_enumeration_value_fails_to_parse() {
        assert!(serde_json::from_str::<Urgency>("\"urgent\"").is_err());
        assert!(serde_json::from_str::<Sentiment>("\"angry\"").is_err());
    }

    #[test]
    fn feedback_item_serializes_flat() {
        let item = FeedbackItem {
            id: Uuid::nil(),
            source: "Support Ticket".to_string(),
            text: "help".to_string(),
            timestamp: Utc::now(),
            analysis: AnalysisResult::fallback(),
        };
        let value = serde_json::to_value(&item).unwrap();
        // Analysis fields sit at the top level, matching the stored row shape.
        assert_eq!(value["urgency"], "medium");
        assert_eq!(value["theme"], "general");
        assert!(value.get("analysis").is_none());
    }
}
