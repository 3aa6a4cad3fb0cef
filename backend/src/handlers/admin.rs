use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::api::{AdminLoginRequest, AdminLoginResponse, EventInput};
use shared::models::Event;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{password_matches, AdminSession};
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::NewEvent;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> ApiResult<Json<AdminLoginResponse>> {
    if !password_matches(&payload.password, &state.config.admin_password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    let token = state.sessions.issue().await;
    tracing::info!("Admin session started");
    Ok(Json(AdminLoginResponse { token }))
}

pub async fn logout(session: AdminSession, State(state): State<AppState>) -> StatusCode {
    state.sessions.revoke(&session.token).await;
    StatusCode::NO_CONTENT
}

pub async fn list_events(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Event>>> {
    let rows = state.db(db::events::list_all).await?;
    Ok(Json(rows.into_iter().map(Event::from).collect()))
}

pub async fn create_event(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<EventInput>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    payload.validate()?;
    let new_event = NewEvent::from_input(&payload, &state.timezone())?;

    let row = state
        .db(move |conn| db::events::create(conn, &new_event))
        .await?;

    tracing::info!(event_id = %row.id, "Event created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update_event(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<EventInput>,
) -> ApiResult<Json<Event>> {
    payload.validate()?;
    let changes = NewEvent::from_input(&payload, &state.timezone())?;

    let row = state
        .db(move |conn| db::events::update(conn, event_id, &changes))
        .await
        .map_err(|e| match e {
            ApiError::Database(diesel::result::Error::NotFound) => ApiError::not_found("Event"),
            other => other,
        })?;

    tracing::info!(event_id = %row.id, "Event updated");
    Ok(Json(row.into()))
}

pub async fn delete_event(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = state
        .db(move |conn| db::events::delete(conn, event_id))
        .await?;

    if deleted == 0 {
        return Err(ApiError::not_found("Event"));
    }

    tracing::info!(event_id = %event_id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_event(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<Event>> {
    let row = state
        .db(move |conn| db::events::toggle_status(conn, event_id))
        .await
        .map_err(|e| match e {
            ApiError::Database(diesel::result::Error::NotFound) => ApiError::not_found("Event"),
            other => other,
        })?;

    tracing::info!(event_id = %row.id, status = %row.status, "Event status toggled");
    Ok(Json(row.into()))
}
