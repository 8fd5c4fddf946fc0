// Postgres persistence for enriched feedback. One row per FeedbackItem,
// primary key `id`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use pulsecheck_common::{AnalysisResult, FeedbackItem, Sentiment, Urgency};

use crate::error::Result;
use crate::traits::FeedbackStore;

pub struct PgFeedbackStore {
    pool: PgPool,
}

/// A row from the feedback table. Enum columns are text; unknown stored
/// values decode to the enum defaults rather than failing the read.
#[derive(Debug, Clone, sqlx::FromRow)]
struct FeedbackRow {
    id: Uuid,
    source: String,
    text: String,
    timestamp: DateTime<Utc>,
    urgency: String,
    sentiment: String,
    theme: String,
    summary: String,
}

impl From<FeedbackRow> for FeedbackItem {
    fn from(row: FeedbackRow) -> Self {
        let urgency = match row.urgency.as_str() {
            "low" => Urgency::Low,
            "high" => Urgency::High,
            _ => Urgency::Medium,
        };
        let sentiment = match row.sentiment.as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };
        FeedbackItem {
            id: row.id,
            source: row.source,
            text: row.text,
            timestamp: row.timestamp,
            analysis: AnalysisResult {
                urgency,
                sentiment,
                theme: row.theme,
                summary: row.summary,
            },
        }
    }
}

impl PgFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the embedded SQL migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| crate::error::TriageError::Database(e.into()))?;
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feedback")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert(&self, item: &FeedbackItem) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (id, source, text, timestamp, urgency, sentiment, theme, summary)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id)
        .bind(&item.source)
        .bind(&item.text)
        .bind(item.timestamp)
        .bind(item.analysis.urgency.to_string())
        .bind(item.analysis.sentiment.to_string())
        .bind(&item.analysis.theme)
        .bind(&item.analysis.summary)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn for_day(&self, day: NaiveDate) -> Result<Vec<FeedbackItem>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT id, source, text, timestamp, urgency, sentiment, theme, summary
            FROM feedback
            WHERE timestamp::date = $1
            ORDER BY timestamp DESC
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedbackItem::from).collect())
    }
}
