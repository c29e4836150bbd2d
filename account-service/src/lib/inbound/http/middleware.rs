use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ErrorDetails;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved claim of an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Middleware that resolves a bearer token into an identity.
///
/// The request proceeds only with a present, well-formed, validly signed and
/// unexpired token; every failure short-circuits with 401 before the handler
/// runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user ID");
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::warn!(error = %e, "Token carries an unknown role");
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, role });

    Ok(next.run(req).await)
}

/// Middleware gating admin-only routes.
///
/// Runs after `authenticate`; a direct equality test on the resolved role,
/// nothing else is consulted.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let Some(user) = req.extensions().get::<AuthenticatedUser>() else {
        return Err(ApiError::Unauthorized("No token provided".to_string()).into_response());
    };

    if user.role != Role::Admin {
        return Err(
            ApiError::Forbidden("Access denied. Admin role required.".to_string()).into_response(),
        );
    }

    Ok(next.run(req).await)
}

/// Outermost layer rendering the uniform error envelope.
///
/// Handlers and middleware attach [`ErrorDetails`] to their responses; this
/// layer owns the request path and the timestamp, so the final body is built
/// here:
/// `{"error": {"message", "statusCode", "code"?, "timestamp", "path"}}`.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    let Some(details) = response.extensions_mut().remove::<ErrorDetails>() else {
        return response;
    };

    let mut error = json!({
        "message": details.message,
        "statusCode": details.status.as_u16(),
        "timestamp": Utc::now().to_rfc3339(),
        "path": path,
    });
    if let Some(code) = details.code {
        error["code"] = json!(code);
    }

    (details.status, Json(json!({ "error": error }))).into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()).into_response())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()).into_response())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()).into_response())
}
