//! Aggregate queries shared by the report and badge-count endpoints

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::report::DailyCount};

/// Half-open creation-time window; `None` bounds are open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatedRange {
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

/// Rows created per UTC day in `table`, ascending by day.
///
/// `table` is always a compile-time constant from this crate.
pub(crate) async fn daily_counts(
    pool: &Pool<Postgres>,
    table: &'static str,
    range: &CreatedRange,
) -> AppResult<Vec<DailyCount>> {
    let query = format!(
        r#"
        SELECT (created_at AT TIME ZONE 'UTC')::date AS date, COUNT(*) AS count
        FROM {}
        WHERE ($1::timestamptz IS NULL OR created_at >= $1)
          AND ($2::timestamptz IS NULL OR created_at < $2)
        GROUP BY 1
        ORDER BY 1
        "#,
        table
    );
    let rows = sqlx::query_as::<_, DailyCount>(&query)
        .bind(range.from)
        .bind(range.until)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
