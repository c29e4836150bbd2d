use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod change_password;
pub mod delete_account;
pub mod delete_user;
pub mod get_profile;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_profile;

/// Classified API error: a closed set of kinds, each carrying its HTTP
/// status and machine-readable code. The boundary dispatches by matching on
/// the kind, never by downcasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

/// The classified pieces of an error response.
///
/// Stored in response extensions so the outermost envelope layer can stamp
/// the request path and timestamp onto the serialized body.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<&'static str>,
}

impl ApiError {
    fn into_details(self) -> ErrorDetails {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Some("VALIDATION_ERROR"), msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, Some("UNAUTHORIZED"), msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, Some("FORBIDDEN"), msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Some("NOT_FOUND"), msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, Some("CONFLICT"), msg),
            ApiError::Internal(original) => {
                // Log the fault, return a generic message; internals never
                // reach a response body.
                tracing::error!(error = %original, "Unclassified fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Internal server error".to_string(),
                )
            }
        };

        ErrorDetails {
            status,
            message,
            code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = self.into_details();

        // Fallback body; the envelope layer rewrites it with timestamp and
        // request path.
        let body = json!({
            "error": {
                "message": details.message,
                "statusCode": details.status.as_u16(),
            }
        });

        let mut response = (details.status, Json(body)).into_response();
        response.extensions_mut().insert(details);
        response
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::MissingPassword => ApiError::BadRequest(err.to_string()),
            UserError::NotFound => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials | UserError::IncorrectPassword => {
                ApiError::Unauthorized(err.to_string())
            }
            UserError::InvalidRole(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

/// Sanitized user view shared by every success response.
///
/// The password hash never appears here by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response body for register and login: the sanitized user, the bearer
/// token, and its lifetime in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseBody {
    pub user: UserBody,
    pub token: String,
    pub expires_in: u64,
}

impl AuthResponseBody {
    pub fn new(user: &User, issued: IssuedToken) -> Self {
        Self {
            user: user.into(),
            token: issued.token,
            expires_in: issued.expires_in,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
