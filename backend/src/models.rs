// Database models for Diesel
use chrono::{DateTime, TimeZone, Utc};
use diesel::prelude::*;
use shared::api::{CreateContactRequest, CreateDonationRequest, EventInput};
use shared::events::parse_start_date;
use shared::models::{BlogPost, ContactSubmission, Donation, DonationFrequency, Event};
use shared::EventStatus;
use uuid::Uuid;

use crate::error::ApiError;

/// Status and frequency are stored as text. Unknown values are read as the
/// type's default so one bad row cannot break a listing.
fn parse_or_default<T>(raw: &str, column: &str) -> T
where
    T: std::str::FromStr<Err = String> + Default,
{
    raw.parse().unwrap_or_else(|e: String| {
        tracing::warn!("Unexpected {} value in database: {}", column, e);
        T::default()
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            location: row.location,
            category: row.category,
            status: parse_or_default(&row.status, "event status"),
            created_at: row.created_at,
        }
    }
}

/// Insert and full-replace changeset for an event. `None` fields are written
/// as NULL so clearing a form field clears the column.
#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::events)]
#[diesel(treat_none_as_null = true)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: String,
}

impl NewEvent {
    /// Build from the admin form. Form times without an offset are read in `tz`.
    pub fn from_input<Tz: TimeZone>(input: &EventInput, tz: &Tz) -> Result<Self, ApiError> {
        let start_date = parse_start_date(&input.start_date, tz)
            .map_err(|e| ApiError::bad_request(format!("start_date: {}", e)))?;
        let end_date = parse_start_date(&input.end_date, tz)
            .map_err(|e| ApiError::bad_request(format!("end_date: {}", e)))?;

        if end_date < start_date {
            return Err(ApiError::bad_request("end_date must not be before start_date"));
        }

        Ok(NewEvent {
            title: input.title.trim().to_string(),
            description: non_empty(&input.description),
            start_date,
            end_date,
            location: non_empty(&input.location),
            category: non_empty(&input.category),
            status: input.status.as_str().to_string(),
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::donations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DonationRow {
    pub id: i64,
    pub amount: f64,
    pub frequency: String,
    pub created_at: DateTime<Utc>,
}

impl From<DonationRow> for Donation {
    fn from(row: DonationRow) -> Self {
        Donation {
            id: row.id,
            amount: row.amount,
            frequency: parse_or_default::<DonationFrequency>(&row.frequency, "donation frequency"),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::donations)]
pub struct NewDonation {
    pub amount: f64,
    pub frequency: String,
}

impl From<&CreateDonationRequest> for NewDonation {
    fn from(request: &CreateDonationRequest) -> Self {
        NewDonation {
            amount: request.amount,
            frequency: request.frequency.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contact_submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactSubmission {
    fn from(row: ContactRow) -> Self {
        ContactSubmission {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::contact_submissions)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&CreateContactRequest> for NewContact {
    fn from(request: &CreateContactRequest) -> Self {
        NewContact {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            message: request.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlogPostRow {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    pub read_time: String,
    pub published_at: DateTime<Utc>,
    pub status: String,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            image_url: row.image_url,
            category: row.category,
            read_time: row.read_time,
            published_at: row.published_at,
            status: parse_or_default::<EventStatus>(&row.status, "blog status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn input(start: &str, end: &str) -> EventInput {
        EventInput {
            title: "  Career Fair  ".to_string(),
            description: String::new(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            location: "Main Hall".to_string(),
            category: "   ".to_string(),
            status: EventStatus::Published,
        }
    }

    #[test]
    fn test_new_event_from_form_input() {
        let sast = FixedOffset::east_opt(2 * 3600).unwrap();
        let event = NewEvent::from_input(&input("2025-11-10T10:00", "2025-11-10T12:30"), &sast).unwrap();

        assert_eq!(event.title, "Career Fair");
        assert_eq!(event.description, None);
        assert_eq!(event.category, None);
        assert_eq!(event.location.as_deref(), Some("Main Hall"));
        assert_eq!(event.start_date, Utc.with_ymd_and_hms(2025, 11, 10, 8, 0, 0).unwrap());
        assert_eq!(event.end_date, Utc.with_ymd_and_hms(2025, 11, 10, 10, 30, 0).unwrap());
        assert_eq!(event.status, "published");
    }

    #[test]
    fn test_new_event_rejects_bad_dates() {
        let err = NewEvent::from_input(&input("next tuesday", "2025-11-10T12:00"), &Utc).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg.starts_with("start_date")));

        let err = NewEvent::from_input(&input("2025-11-10T12:00", "2025-11-10T09:00"), &Utc).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_unknown_status_reads_as_draft() {
        let row = EventRow {
            id: Uuid::new_v4(),
            title: "Legacy".to_string(),
            description: None,
            start_date: Utc::now(),
            end_date: Utc::now(),
            location: None,
            category: None,
            status: "archived".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(Event::from(row).status, EventStatus::Draft);
    }

    #[test]
    fn test_contact_fields_trimmed() {
        let request = CreateContactRequest {
            name: " Thandi ".to_string(),
            email: " thandi@example.org ".to_string(),
            message: "Hello".to_string(),
        };
        let contact = NewContact::from(&request);
        assert_eq!(contact.name, "Thandi");
        assert_eq!(contact.email, "thandi@example.org");
    }
}
