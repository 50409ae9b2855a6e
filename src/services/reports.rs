//! Admin reports and dashboard badge counts

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment_booking::BookedItem,
        report::{DailyCount, EquipmentUsage, NotificationCounts, ReportQuery},
    },
    repository::{reports::CreatedRange, Repository},
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn bookings(&self, query: &ReportQuery) -> AppResult<Vec<DailyCount>> {
        let range = parse_range(query)?;
        self.repository.bookings.daily_counts(&range).await
    }

    pub async fn quotes(&self, query: &ReportQuery) -> AppResult<Vec<DailyCount>> {
        let range = parse_range(query)?;
        self.repository.quotes.daily_counts(&range).await
    }

    pub async fn equipment_usage(&self, query: &ReportQuery) -> AppResult<Vec<EquipmentUsage>> {
        let range = parse_range(query)?;
        let bookings = self
            .repository
            .equipment_bookings
            .items_created_between(&range)
            .await?;
        Ok(aggregate_usage(bookings.iter().flatten()))
    }

    pub async fn counts(&self) -> AppResult<NotificationCounts> {
        let repo = &self.repository;
        let (unread_quotes, messages, pending_equipment_bookings, pending_bookings) = tokio::try_join!(
            repo.quotes.count_unread(),
            repo.messages.count(),
            repo.equipment_bookings.count_pending(),
            repo.bookings.count_pending(),
        )?;
        Ok(NotificationCounts {
            unread_quotes,
            messages,
            pending_equipment_bookings,
            pending_bookings,
        })
    }
}

/// Turn `start`/`end` query values into a half-open creation-time window.
/// A bare end date includes that whole day.
pub fn parse_range(query: &ReportQuery) -> AppResult<CreatedRange> {
    let from = match non_blank(&query.start) {
        Some(raw) => Some(parse_bound(raw, "start", false)?),
        None => None,
    };
    let until = match non_blank(&query.end) {
        Some(raw) => Some(parse_bound(raw, "end", true)?),
        None => None,
    };
    if let (Some(from), Some(until)) = (from, until) {
        if from >= until {
            return Err(AppError::BadRequest("start must be before end".to_string()));
        }
    }
    Ok(CreatedRange { from, until })
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(raw: &str, field: &str, is_end: bool) -> AppResult<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let day = if is_end {
            date.succ_opt()
                .ok_or_else(|| AppError::BadRequest(format!("Invalid {} date", field)))?
        } else {
            date
        };
        return Ok(day.and_time(NaiveTime::MIN).and_utc());
    }
    let instant = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid {} date: expected YYYY-MM-DD or RFC 3339",
                field
            ))
        })?;
    // Timestamps are inclusive; the window end is exclusive
    Ok(if is_end { instant + Duration::microseconds(1) } else { instant })
}

/// Sum quantities per equipment name. Sorted by usage descending, then name.
pub fn aggregate_usage<'a>(items: impl IntoIterator<Item = &'a BookedItem>) -> Vec<EquipmentUsage> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for item in items {
        *totals.entry(item.name.as_str()).or_default() += i64::from(item.quantity);
    }
    let mut usage: Vec<EquipmentUsage> = totals
        .into_iter()
        .map(|(name, usage_count)| EquipmentUsage {
            equipment: name.to_string(),
            usage_count,
        })
        .collect();
    usage.sort_by(|a, b| {
        b.usage_count
            .cmp(&a.usage_count)
            .then_with(|| a.equipment.cmp(&b.equipment))
    });
    usage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i32) -> BookedItem {
        BookedItem {
            equipment_id: None,
            name: name.to_string(),
            quantity,
        }
    }

    fn query(start: Option<&str>, end: Option<&str>) -> ReportQuery {
        ReportQuery {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    #[test]
    fn test_aggregate_usage_sums_and_sorts() {
        let items = vec![
            item("Tent", 2),
            item("Chair", 50),
            item("Tent", 3),
            item("Table", 5),
            item("Arch", 5),
        ];
        let usage = aggregate_usage(&items);
        let flat: Vec<(&str, i64)> = usage
            .iter()
            .map(|u| (u.equipment.as_str(), u.usage_count))
            .collect();
        assert_eq!(
            flat,
            vec![("Chair", 50), ("Arch", 5), ("Table", 5), ("Tent", 5)]
        );
    }

    #[test]
    fn test_aggregate_usage_empty() {
        assert!(aggregate_usage(&Vec::<BookedItem>::new()).is_empty());
    }

    #[test]
    fn test_parse_range_dates() {
        let range = parse_range(&query(Some("2026-01-01"), Some("2026-01-31"))).unwrap();
        assert_eq!(range.from.unwrap().to_rfc3339(), "2026-01-01T00:00:00+00:00");
        assert_eq!(range.until.unwrap().to_rfc3339(), "2026-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_range_open_and_rfc3339() {
        assert_eq!(parse_range(&query(None, Some(" "))).unwrap(), CreatedRange::default());

        let range = parse_range(&query(Some("2026-01-01T08:30:00+03:00"), None)).unwrap();
        assert_eq!(range.from.unwrap().to_rfc3339(), "2026-01-01T05:30:00+00:00");
        assert!(range.until.is_none());
    }

    #[test]
    fn test_parse_range_invalid() {
        assert!(matches!(
            parse_range(&query(Some("01/02/2026"), None)),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_range(&query(Some("2026-02-01"), Some("2026-01-01"))),
            Err(AppError::BadRequest(_))
        ));
    }
}
