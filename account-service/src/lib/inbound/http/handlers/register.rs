use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AuthResponseBody;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(StatusCode, Json<AuthResponseBody>), ApiError> {
    let command = body.try_into_command()?;

    let (user, issued) = state.account_service.register(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseBody::new(&user, issued)),
    ))
}

/// HTTP request body for registration (raw JSON).
///
/// Fields are optional so that absence maps to a validation error rather
/// than a deserialization rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        let name = DisplayName::new(self.name.unwrap_or_default())?;
        let email = EmailAddress::new(self.email.unwrap_or_default())?;

        let password = self.password.unwrap_or_default();
        if password.is_empty() {
            return Err(UserError::MissingPassword);
        }

        Ok(RegisterUserCommand::new(name, email, password))
    }
}
