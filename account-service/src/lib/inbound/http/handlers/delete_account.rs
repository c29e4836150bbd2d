use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::MessageBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .account_service
        .delete_user(&auth_user.user_id)
        .await?;

    Ok(Json(MessageBody::new("User account deleted successfully")))
}
