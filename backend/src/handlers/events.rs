use axum::{extract::State, Json};
use shared::models::Event;
use shared::RawEventRecord;

use crate::db;
use crate::error::ApiResult;
use crate::state::AppState;

/// Published events in the wire shape the calendar consumes, earliest first.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<RawEventRecord>>> {
    let rows = state.db(db::events::list_published).await?;

    let records: Vec<RawEventRecord> = rows
        .into_iter()
        .map(|row| Event::from(row).to_raw())
        .collect();

    tracing::debug!("Listing {} published events", records.len());
    Ok(Json(records))
}
