// Digest aggregation: a pure projection of enriched items into the urgent
// list and the top recurring themes.

use chrono::Utc;

use pulsecheck_common::{DigestView, FeedbackItem, ThemeCount, Urgency};

/// At most this many themes appear in a digest.
pub const TOP_THEME_LIMIT: usize = 5;

/// Build a digest over `items`.
///
/// `items` is expected most-recent-first (the store's read order); the
/// urgent list preserves that order rather than re-sorting. Theme ties
/// break by first-encountered order, not by name.
pub fn aggregate(items: &[FeedbackItem]) -> DigestView {
    let urgent: Vec<FeedbackItem> = items
        .iter()
        .filter(|item| item.analysis.urgency == Urgency::High)
        .cloned()
        .collect();

    let mut counts: Vec<ThemeCount> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|c| c.theme == item.analysis.theme) {
            Some(entry) => entry.count += 1,
            None => counts.push(ThemeCount {
                theme: item.analysis.theme.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort: equal counts keep first-encounter order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_THEME_LIMIT);

    DigestView {
        generated_at: Utc::now(),
        urgent,
        top_themes: counts,
        total: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use pulsecheck_common::{AnalysisResult, Sentiment};

    fn item(theme: &str, urgency: Urgency, age_minutes: i64) -> FeedbackItem {
        FeedbackItem {
            id: Uuid::new_v4(),
            source: "Support Ticket".to_string(),
            text: "some feedback".to_string(),
            timestamp: Utc::now() - Duration::minutes(age_minutes),
            analysis: AnalysisResult {
                urgency,
                sentiment: Sentiment::Neutral,
                theme: theme.to_string(),
                summary: "s".to_string(),
            },
        }
    }

    #[test]
    fn empty_input_yields_empty_digest() {
        let view = aggregate(&[]);
        assert!(view.urgent.is_empty());
        assert!(view.top_themes.is_empty());
        assert_eq!(view.total, 0);
    }

    #[test]
    fn four_distinct_themes_one_urgent() {
        let items = vec![
            item("performance", Urgency::High, 0),
            item("ui", Urgency::Low, 1),
            item("bug", Urgency::Medium, 2),
            item("feature", Urgency::Low, 3),
        ];
        let view = aggregate(&items);

        assert_eq!(view.urgent.len(), 1);
        assert_eq!(view.urgent[0].analysis.theme, "performance");
        assert_eq!(view.top_themes.len(), 4);
        assert_eq!(view.total, 4);
    }

    #[test]
    fn dominant_theme_ranks_first_and_cap_holds() {
        let items = vec![
            item("bug", Urgency::Medium, 0),
            item("ui", Urgency::Low, 1),
            item("bug", Urgency::Medium, 2),
            item("performance", Urgency::High, 3),
            item("bug", Urgency::Medium, 4),
            item("feature", Urgency::Low, 5),
            item("billing", Urgency::Low, 6),
            item("docs", Urgency::Low, 7),
        ];
        let view = aggregate(&items);

        assert_eq!(
            view.top_themes[0],
            ThemeCount {
                theme: "bug".to_string(),
                count: 3
            }
        );
        // Six themes seen, five kept; the last-encountered single-count
        // theme falls off.
        assert_eq!(view.top_themes.len(), TOP_THEME_LIMIT);
        assert!(!view.top_themes.iter().any(|c| c.theme == "docs"));
        assert_eq!(view.total, 8);
    }

    #[test]
    fn ties_break_by_first_encountered_order() {
        let items = vec![
            item("zebra", Urgency::Low, 0),
            item("apple", Urgency::Low, 1),
            item("zebra", Urgency::Low, 2),
            item("apple", Urgency::Low, 3),
        ];
        let view = aggregate(&items);

        assert_eq!(view.top_themes[0].theme, "zebra");
        assert_eq!(view.top_themes[1].theme, "apple");
    }

    #[test]
    fn urgent_preserves_input_order() {
        let items = vec![
            item("a", Urgency::High, 0),
            item("b", Urgency::Low, 1),
            item("c", Urgency::High, 2),
        ];
        let view = aggregate(&items);

        assert_eq!(view.urgent.len(), 2);
        assert_eq!(view.urgent[0].analysis.theme, "a");
        assert_eq!(view.urgent[1].analysis.theme, "c");
    }
}
