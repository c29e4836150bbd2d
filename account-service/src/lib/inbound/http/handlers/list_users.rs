use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::UserBody;
use crate::inbound::http::router::AppState;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserBody>>, ApiError> {
    let users = state.account_service.list_users().await?;

    Ok(Json(users.iter().map(UserBody::from).collect()))
}
