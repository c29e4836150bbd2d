use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::UserBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<UserBody>, ApiError> {
    let user = state.account_service.get_user(&auth_user.user_id).await?;

    Ok(Json(UserBody::from(&user)))
}
