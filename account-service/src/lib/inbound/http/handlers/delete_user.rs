use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::MessageBody;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.account_service.delete_user(&user_id).await?;

    Ok(Json(MessageBody::new("User deleted successfully")))
}
