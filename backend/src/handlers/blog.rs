use axum::{extract::State, Json};
use shared::models::BlogPost;

use crate::db;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogPost>>> {
    let rows = state.db(db::blog_posts::list_published).await?;
    Ok(Json(rows.into_iter().map(BlogPost::from).collect()))
}
