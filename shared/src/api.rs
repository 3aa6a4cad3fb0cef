use std::fmt::Display;

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::calendar::YearMonth;
use crate::events::DisplayEvent;
use crate::models::{Donation, DonationFrequency, Event, EventStatus};

// ============================================================================
// Calendar API Types
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// `YYYY-MM`, defaults to the current month
    pub month: Option<String>,
    /// `YYYY-MM-DD`, narrows the listing to one day
    pub day: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub month: YearMonth,
    pub selected_date: Option<NaiveDate>,
    pub heading: String,
    pub highlight_dates: Vec<NaiveDate>,
    pub events: Vec<DisplayEvent>,
    pub upcoming: Vec<DisplayEvent>,
}

// ============================================================================
// Donation API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateDonationRequest {
    #[validate(range(min = 0.01))]
    pub amount: f64,

    #[serde(default)]
    pub frequency: DonationFrequency,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListDonationsResponse {
    pub donations: Vec<Donation>,
    pub total: usize,
    pub total_amount: f64,
}

impl ListDonationsResponse {
    pub fn new(donations: Vec<Donation>) -> Self {
        let total_amount = donations.iter().map(|d| d.amount).sum();
        Self {
            total: donations.len(),
            total_amount,
            donations,
        }
    }
}

/// Preset amount offered on the Donate page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonationOption {
    pub amount: u32,
    pub label: &'static str,
}

pub const DONATION_OPTIONS: [DonationOption; 6] = [
    DonationOption { amount: 100, label: "School Supplies" },
    DonationOption { amount: 250, label: "Mental Health Workshops" },
    DonationOption { amount: 500, label: "Career Guidance" },
    DonationOption { amount: 250, label: "Tutoring Sessions" },
    DonationOption { amount: 500, label: "Year of Tutoring" },
    DonationOption { amount: 1000, label: "Field Trip" },
];

// ============================================================================
// Contact API Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

// ============================================================================
// Admin API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: Uuid,
}

/// Event form as submitted from the admin panel. Dates are the raw
/// `datetime-local` strings; empty optional fields mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EventInput {
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub start_date: String,
    pub end_date: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub status: EventStatus,
}

/// Value format of an HTML `datetime-local` input.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

impl EventInput {
    /// Pre-fill the edit form, showing times as wall-clock time in `tz`.
    pub fn from_event<Tz>(event: &Event, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let local = |instant: &chrono::DateTime<chrono::Utc>| {
            instant.with_timezone(tz).format(DATETIME_LOCAL_FORMAT).to_string()
        };

        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_date: local(&event.start_date),
            end_date: local(&event.end_date),
            location: event.location.clone().unwrap_or_default(),
            category: event.category.clone().unwrap_or_default(),
            status: event.status,
        }
    }
}

// ============================================================================
// Misc API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donation_amount_validation() {
        let ok = CreateDonationRequest {
            amount: 250.0,
            frequency: DonationFrequency::Monthly,
        };
        assert!(ok.validate().is_ok());

        for amount in [0.0, -5.0, 0.001] {
            let bad = CreateDonationRequest {
                amount,
                frequency: DonationFrequency::OneTime,
            };
            assert!(bad.validate().is_err(), "{} should be rejected", amount);
        }
    }

    #[test]
    fn test_donation_frequency_defaults_to_one_time() {
        let request: CreateDonationRequest = serde_json::from_str(r#"{"amount": 100}"#).unwrap();
        assert_eq!(request.frequency, DonationFrequency::OneTime);
    }

    #[test]
    fn test_contact_validation() {
        let valid = CreateContactRequest {
            name: "Thandi".to_string(),
            email: "thandi@example.org".to_string(),
            message: "How can I volunteer?".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = CreateContactRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_message = CreateContactRequest {
            message: String::new(),
            ..valid
        };
        assert!(empty_message.validate().is_err());
    }

    #[test]
    fn test_event_input_requires_title() {
        let input = EventInput {
            start_date: "2025-11-10T10:00".to_string(),
            end_date: "2025-11-10T12:00".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_event_input_from_event_uses_local_time() {
        use chrono::{FixedOffset, Utc};
        use uuid::Uuid;

        let event = Event {
            id: Uuid::nil(),
            title: "Science Fair".to_string(),
            description: None,
            start_date: Utc.with_ymd_and_hms(2025, 11, 10, 8, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 11, 10, 12, 30, 0).unwrap(),
            location: Some("Main Hall".to_string()),
            category: None,
            status: EventStatus::Published,
            created_at: Utc::now(),
        };

        let sast = FixedOffset::east_opt(2 * 3600).unwrap();
        let input = EventInput::from_event(&event, &sast);
        assert_eq!(input.start_date, "2025-11-10T10:00");
        assert_eq!(input.end_date, "2025-11-10T14:30");
        assert_eq!(input.description, "");
        assert_eq!(input.location, "Main Hall");
        assert_eq!(input.status, EventStatus::Published);
    }

    #[test]
    fn test_list_donations_totals() {
        use chrono::Utc;

        let donations = vec![
            Donation { id: 1, amount: 100.0, frequency: DonationFrequency::OneTime, created_at: Utc::now() },
            Donation { id: 2, amount: 250.5, frequency: DonationFrequency::Monthly, created_at: Utc::now() },
        ];
        let response = ListDonationsResponse::new(donations);
        assert_eq!(response.total, 2);
        assert!((response.total_amount - 350.5).abs() < f64::EPSILON);
    }
}
