use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::UserBody;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for a profile update (raw JSON).
///
/// Only name and email are updatable; there is deliberately no role field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequestBody {
    name: Option<String>,
    email: Option<String>,
}

impl UpdateProfileRequestBody {
    fn try_into_command(self) -> Result<UpdateProfileCommand, UserError> {
        let name = self.name.map(DisplayName::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateProfileCommand { name, email })
    }
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequestBody>,
) -> Result<Json<UserBody>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .account_service
        .update_profile(&auth_user.user_id, command)
        .await?;

    Ok(Json(UserBody::from(&user)))
}
