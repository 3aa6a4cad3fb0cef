use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, TimeZone, Utc};
use shared::api::{CalendarQuery, CalendarResponse};
use shared::models::Event;
use shared::{normalize_events, CalendarView, DisplayEvent, RawEventRecord, Selection, YearMonth};

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Resolve the query into a selection. A day outside the requested month
/// moves the visible month to the day's month.
pub fn selection_from_query(query: &CalendarQuery, today: NaiveDate) -> ApiResult<Selection> {
    let month = match query.month.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(raw) => raw
            .parse::<YearMonth>()
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => YearMonth::of(today),
    };

    let mut selection = Selection::new(month);

    if let Some(raw) = query.day.as_deref().filter(|d| !d.trim().is_empty()) {
        let day = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::bad_request(format!("invalid day '{}', expected YYYY-MM-DD", raw)))?;

        if !selection.visible_month.contains(day) {
            selection.select_month(YearMonth::of(day));
        }
        selection.select_day(day);
    }

    Ok(selection)
}

/// Assemble the three calendar projections for `selection`.
pub fn build_calendar<Tz: TimeZone>(
    events: &[DisplayEvent],
    tz: Tz,
    selection: &Selection,
    today: NaiveDate,
) -> CalendarResponse {
    let view = CalendarView::new(events, tz);

    CalendarResponse {
        month: selection.visible_month,
        selected_date: selection.selected_date,
        heading: selection.heading(),
        highlight_dates: view.highlight_dates().into_iter().collect(),
        events: view.selected_events(selection).into_iter().cloned().collect(),
        upcoming: view.future_events(today).into_iter().cloned().collect(),
    }
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<CalendarResponse>> {
    let tz = state.timezone();
    let today = Utc::now().with_timezone(&tz).date_naive();
    let selection = selection_from_query(&query, today)?;

    let rows = state.db(db::events::list_published).await?;
    let records: Vec<RawEventRecord> = rows
        .into_iter()
        .map(|row| Event::from(row).to_raw())
        .collect();
    let events = normalize_events(&records, &tz);

    Ok(Json(build_calendar(&events, tz, &selection, today)))
}
