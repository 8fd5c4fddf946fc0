// Canned data: the sample batch the seed endpoint enriches, and the
// pre-enriched fallback items substituted on the read path when the store
// is empty or unreachable.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use pulsecheck_common::{AnalysisResult, FeedbackItem, RawFeedback, Sentiment, Urgency};

/// The fixed batch enriched when a seed request supplies no body.
pub fn sample_feedback() -> Vec<RawFeedback> {
    vec![
        RawFeedback {
            source: "Support Ticket".to_string(),
            text: "The dashboard is failing to load when I try to view analytics data for the past hour.".to_string(),
        },
        RawFeedback {
            source: "Twitter/X".to_string(),
            text: "Just discovered your product and I'm loving it! The UI is so intuitive and clean.".to_string(),
        },
        RawFeedback {
            source: "GitHub Issue".to_string(),
            text: "Bug: The export functionality fails when trying to download CSV files with special characters.".to_string(),
        },
        RawFeedback {
            source: "Community Forum".to_string(),
            text: "Would be great to have dark mode support. My eyes get tired during late night coding sessions.".to_string(),
        },
    ]
}

/// Pre-enriched items served when there is nothing real to show. Fixed ids
/// and timestamps keep responses stable across requests.
pub fn fallback_items() -> Vec<FeedbackItem> {
    let samples = sample_feedback();
    let analyses = [
        (
            Urgency::High,
            Sentiment::Negative,
            "performance",
            "Dashboard performance issues with analytics loading",
        ),
        (
            Urgency::Low,
            Sentiment::Positive,
            "ui",
            "Positive feedback on UI design and intuitiveness",
        ),
        (
            Urgency::Medium,
            Sentiment::Negative,
            "bug",
            "CSV export fails with special characters",
        ),
        (
            Urgency::Low,
            Sentiment::Neutral,
            "feature",
            "Request for dark mode feature",
        ),
    ];

    samples
        .into_iter()
        .zip(analyses)
        .enumerate()
        .map(|(n, (raw, (urgency, sentiment, theme, summary)))| FeedbackItem {
            id: Uuid::from_u128(n as u128 + 1),
            source: raw.source,
            text: raw.text,
            timestamp: fixture_timestamp(n as u32),
            analysis: AnalysisResult {
                urgency,
                sentiment,
                theme: theme.to_string(),
                summary: summary.to_string(),
            },
        })
        .collect()
}

fn fixture_timestamp(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 23, 20, minute, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_and_fallback_line_up() {
        let samples = sample_feedback();
        let fallback = fallback_items();
        assert_eq!(samples.len(), 4);
        assert_eq!(fallback.len(), 4);
        for (raw, item) in samples.iter().zip(&fallback) {
            assert_eq!(raw.source, item.source);
            assert_eq!(raw.text, item.text);
        }
    }

    #[test]
    fn fallback_ids_are_distinct_and_stable() {
        let a = fallback_items();
        let b = fallback_items();
        assert_eq!(a, b);
        assert_eq!(a[0].id, Uuid::from_u128(1));
        assert!(a.iter().all(|i| !i.id.is_nil()));
    }

    #[test]
    fn fallback_contains_one_urgent_item() {
        let urgent: Vec<_> = fallback_items()
            .into_iter()
            .filter(|i| i.analysis.urgency == Urgency::High)
            .collect();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].analysis.theme, "performance");
    }
}
