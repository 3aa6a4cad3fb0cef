use axum::{extract::State, http::StatusCode, Json};
use shared::api::CreateContactRequest;
use shared::models::ContactSubmission;
use validator::Validate;

use crate::db;
use crate::error::ApiResult;
use crate::models::NewContact;
use crate::state::AppState;

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactSubmission>)> {
    payload.validate()?;

    let new_contact = NewContact::from(&payload);
    let row = state
        .db(move |conn| db::contact_submissions::create(conn, &new_contact))
        .await?;

    tracing::info!(submission_id = %row.id, "Contact form submitted");
    Ok((StatusCode::CREATED, Json(row.into())))
}
