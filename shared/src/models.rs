use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::RawEventRecord;

/// Publication state shared by events and blog posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
        }
    }

    /// The status an admin toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            EventStatus::Draft => EventStatus::Published,
            EventStatus::Published => EventStatus::Draft,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "published" => Ok(EventStatus::Published),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// How often a donor gives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationFrequency {
    #[default]
    OneTime,
    Monthly,
}

impl DonationFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationFrequency::OneTime => "one-time",
            DonationFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for DonationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-time" => Ok(DonationFrequency::OneTime),
            "monthly" => Ok(DonationFrequency::Monthly),
            other => Err(format!("unknown frequency '{}'", other)),
        }
    }
}

/// Event as managed from the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// The wire shape handed to the calendar on the public site.
    pub fn to_raw(&self) -> RawEventRecord {
        RawEventRecord {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            category: self.category.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub amount: f64,
    pub frequency: DonationFrequency,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Blog post shown on the News page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    pub read_time: String,
    pub published_at: DateTime<Utc>,
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [EventStatus::Draft, EventStatus::Published] {
            assert_eq!(status.as_str().parse::<EventStatus>(), Ok(status));
        }
        assert!("archived".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(EventStatus::Draft.toggled(), EventStatus::Published);
        assert_eq!(EventStatus::Published.toggled(), EventStatus::Draft);
    }

    #[test]
    fn test_frequency_serializes_kebab_case() {
        let json = serde_json::to_string(&DonationFrequency::OneTime).unwrap();
        assert_eq!(json, "\"one-time\"");
        let parsed: DonationFrequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, DonationFrequency::Monthly);
    }

    #[test]
    fn test_event_to_raw_uses_rfc3339() {
        let event = Event {
            id: Uuid::nil(),
            title: "Science Fair".to_string(),
            description: None,
            start_date: Utc.with_ymd_and_hms(2025, 11, 10, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 11, 10, 14, 0, 0).unwrap(),
            location: Some("Main Hall".to_string()),
            category: Some("Academic".to_string()),
            status: EventStatus::Published,
            created_at: Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap(),
        };

        let raw = event.to_raw();
        assert_eq!(raw.start_date, "2025-11-10T10:00:00Z");
        assert_eq!(raw.id, Uuid::nil().to_string());
        assert_eq!(raw.status, EventStatus::Published);
    }
}
