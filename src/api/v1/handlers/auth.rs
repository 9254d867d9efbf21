/*
 * Responsibility
 * - GET /auth/check (公開; 常に 200 で valid/message を返す)
 * - POST /auth/validate (公開; 欠落/形式不正 400, 不一致 401, 有効 200)
 */
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};

use crate::{
    api::v1::dto::auth::TokenValidationResponse,
    error::AuthError,
    services::token::TokenValidator,
    state::AppState,
};

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Reports whether the presented credentials are valid. Never rejects; the
/// endpoint exists so clients can probe a token without triggering 401s.
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<TokenValidationResponse> {
    tracing::debug!("authentication check requested");

    let Some(auth_header) = authorization_header(&headers).filter(|h| !h.trim().is_empty()) else {
        return Json(TokenValidationResponse::invalid(
            "No authentication token provided",
        ));
    };

    match TokenValidator::extract_token(auth_header) {
        Some(token) if state.tokens.validate(token) => Json(TokenValidationResponse::valid(
            "Authentication token is valid",
        )),
        _ => Json(TokenValidationResponse::invalid(
            "Authentication header is invalid or token is expired",
        )),
    }
}

/// Validates a token without touching the request's auth marker.
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenValidationResponse>, AuthError> {
    tracing::debug!("token validation requested");

    let auth_header = authorization_header(&headers)
        .filter(|h| !h.trim().is_empty())
        .ok_or(AuthError::MissingHeader)?;

    let token = TokenValidator::extract_token(auth_header).ok_or(AuthError::MalformedHeader)?;

    if state.tokens.validate(token) {
        Ok(Json(TokenValidationResponse::valid("Token is valid")))
    } else {
        Err(AuthError::InvalidToken)
    }
}
