//! Conversion of persisted event rows into the view model rendered by the
//! Programs calendar.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::EventStatus;

/// Badge shown for events that carry no category.
pub const DEFAULT_BADGE: &str = "Event";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Event row exactly as the data service delivers it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEventRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub category: Option<String>,
    pub status: EventStatus,
}

/// UI-ready event. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEvent {
    pub title: String,
    pub subtitle: String,
    pub date: DateTime<Utc>,
    pub badge: String,
}

impl DisplayEvent {
    /// Calendar day of the event as seen from `tz`.
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.date.with_timezone(tz).date_naive()
    }

    /// Long date such as "November 10, 2025".
    pub fn date_label<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.date.with_timezone(tz).format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid event date '{value}'")]
pub struct InvalidDateError {
    pub value: String,
}

impl InvalidDateError {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// Parse an event timestamp.
///
/// RFC 3339 strings carry their own offset. Date-times without an offset are
/// read as wall-clock time in `tz`, which is what the admin form's
/// `datetime-local` input produces. A bare date is midnight UTC.
pub fn parse_start_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>, InvalidDateError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InvalidDateError::new(raw));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    // Postgres text output, e.g. "2025-11-10 10:00:00+00"
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc))
                .ok_or_else(|| InvalidDateError::new(raw));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(InvalidDateError::new(raw))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Convert one record, failing if its start date does not parse.
pub fn normalize_event<Tz: TimeZone>(
    record: &RawEventRecord,
    tz: &Tz,
) -> Result<DisplayEvent, InvalidDateError> {
    let date = parse_start_date(&record.start_date, tz)?;

    Ok(DisplayEvent {
        title: record.title.clone(),
        subtitle: non_empty(record.description.as_deref())
            .unwrap_or_default()
            .to_string(),
        date,
        badge: non_empty(record.category.as_deref())
            .unwrap_or(DEFAULT_BADGE)
            .to_string(),
    })
}

/// Convert a list of records, keeping their order.
///
/// Records with an unparsable start date are dropped so that one bad row
/// cannot blank the whole calendar.
pub fn normalize_events<Tz: TimeZone>(records: &[RawEventRecord], tz: &Tz) -> Vec<DisplayEvent> {
    records
        .iter()
        .filter_map(|record| match normalize_event(record, tz) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(event_id = %record.id, "Skipping event: {}", e);
                None
            }
        })
        .collect()
}
