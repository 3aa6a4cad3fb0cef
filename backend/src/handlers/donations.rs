use axum::{extract::State, http::StatusCode, Json};
use shared::api::{CreateDonationRequest, ListDonationsResponse};
use shared::models::Donation;
use validator::Validate;

use crate::auth::AdminSession;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::NewDonation;
use crate::state::AppState;

pub async fn create_donation(
    State(state): State<AppState>,
    Json(payload): Json<CreateDonationRequest>,
) -> ApiResult<(StatusCode, Json<Donation>)> {
    if !payload.amount.is_finite() {
        return Err(ApiError::bad_request("amount must be a number"));
    }
    payload.validate()?;

    let new_donation = NewDonation::from(&payload);
    let row = state
        .db(move |conn| db::donations::create(conn, &new_donation))
        .await?;

    tracing::info!(donation_id = row.id, frequency = %row.frequency, "Donation recorded");
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn list_donations(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<ListDonationsResponse>> {
    let rows = state.db(db::donations::list_all).await?;
    let donations = rows.into_iter().map(Donation::from).collect();
    Ok(Json(ListDonationsResponse::new(donations)))
}
