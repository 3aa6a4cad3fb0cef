//! Connection pool and the queries behind each resource.
//!
//! Queries are plain synchronous diesel calls. Handlers run them on a pooled
//! connection through [`crate::state::AppState::db`].

use anyhow::{Context, Result};
use deadpool_diesel::postgres::{Manager, Pool};
use deadpool_diesel::Runtime;

pub type DbPool = Pool;

/// Build the pool. Connections are opened lazily on first use.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = Manager::new(database_url, Runtime::Tokio1);
    let pool = Pool::builder(manager)
        .max_size(10)
        .build()
        .context("Failed to create database pool")?;

    Ok(pool)
}

pub mod events {
    use diesel::prelude::*;
    use shared::EventStatus;
    use uuid::Uuid;

    use crate::models::{EventRow, NewEvent};
    use crate::schema::events;

    pub fn list_published(conn: &mut PgConnection) -> QueryResult<Vec<EventRow>> {
        events::table
            .filter(events::status.eq(EventStatus::Published.as_str()))
            .order(events::start_date.asc())
            .select(EventRow::as_select())
            .load(conn)
    }

    pub fn list_all(conn: &mut PgConnection) -> QueryResult<Vec<EventRow>> {
        events::table
            .order(events::start_date.desc())
            .select(EventRow::as_select())
            .load(conn)
    }

    pub fn create(conn: &mut PgConnection, new_event: &NewEvent) -> QueryResult<EventRow> {
        diesel::insert_into(events::table)
            .values(new_event)
            .returning(EventRow::as_returning())
            .get_result(conn)
    }

    pub fn update(conn: &mut PgConnection, event_id: Uuid, changes: &NewEvent) -> QueryResult<EventRow> {
        diesel::update(events::table.find(event_id))
            .set(changes)
            .returning(EventRow::as_returning())
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, event_id: Uuid) -> QueryResult<usize> {
        diesel::delete(events::table.find(event_id)).execute(conn)
    }

    /// Flip draft/published in one transaction and return the updated row.
    pub fn toggle_status(conn: &mut PgConnection, event_id: Uuid) -> QueryResult<EventRow> {
        conn.transaction(|conn| {
            let current: String = events::table
                .find(event_id)
                .select(events::status)
                .first(conn)?;

            let next = current
                .parse::<EventStatus>()
                .unwrap_or_default()
                .toggled();

            diesel::update(events::table.find(event_id))
                .set(events::status.eq(next.as_str()))
                .returning(EventRow::as_returning())
                .get_result(conn)
        })
    }
}

pub mod donations {
    use diesel::prelude::*;

    use crate::models::{DonationRow, NewDonation};
    use crate::schema::donations;

    pub fn list_all(conn: &mut PgConnection) -> QueryResult<Vec<DonationRow>> {
        donations::table
            .order(donations::created_at.desc())
            .select(DonationRow::as_select())
            .load(conn)
    }

    pub fn create(conn: &mut PgConnection, new_donation: &NewDonation) -> QueryResult<DonationRow> {
        diesel::insert_into(donations::table)
            .values(new_donation)
            .returning(DonationRow::as_returning())
            .get_result(conn)
    }
}

pub mod contact_submissions {
    use diesel::prelude::*;

    use crate::models::{ContactRow, NewContact};
    use crate::schema::contact_submissions;

    pub fn create(conn: &mut PgConnection, new_contact: &NewContact) -> QueryResult<ContactRow> {
        diesel::insert_into(contact_submissions::table)
            .values(new_contact)
            .returning(ContactRow::as_returning())
            .get_result(conn)
    }
}

pub mod blog_posts {
    use diesel::prelude::*;
    use shared::EventStatus;

    use crate::models::BlogPostRow;
    use crate::schema::blog_posts;

    pub fn list_published(conn: &mut PgConnection) -> QueryResult<Vec<BlogPostRow>> {
        blog_posts::table
            .filter(blog_posts::status.eq(EventStatus::Published.as_str()))
            .order(blog_posts::published_at.desc())
            .select(BlogPostRow::as_select())
            .load(conn)
    }
}
