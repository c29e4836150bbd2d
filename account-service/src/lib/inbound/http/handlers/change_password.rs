use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::MessageBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<ChangePasswordRequestBody>,
) -> Result<Json<MessageBody>, ApiError> {
    let current_password = body.current_password.unwrap_or_default();
    let new_password = body.new_password.unwrap_or_default();

    if current_password.is_empty() || new_password.is_empty() {
        return Err(ApiError::BadRequest(
            "Current and new password are required".to_string(),
        ));
    }

    state
        .account_service
        .change_password(&auth_user.user_id, &current_password, &new_password)
        .await?;

    Ok(Json(MessageBody::new("Password changed successfully")))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequestBody {
    current_password: Option<String>,
    new_password: Option<String>,
}
