/*
 * Responsibility
 * - アプリ共通の AppError / AuthError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - auth 検証エラーを 400/401 の構造化レスポンスへ変換
 */
use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::api::v1::dto::auth::TokenValidationResponse;

/// Error body shared by 401/403/500 responses.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
    pub path: String,
    pub timestamp: DateTime<Utc>,
    pub errors: HashMap<String, String>,
}

impl ApiErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            path: path.into(),
            timestamp: Utc::now(),
            errors: HashMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized { path: String },
    #[error("forbidden")]
    Forbidden { path: String },
    #[error("internal server error")]
    Internal { path: String },
}

impl AppError {
    pub fn unauthorized(path: impl Into<String>) -> Self {
        Self::Unauthorized { path: path.into() }
    }

    pub fn forbidden(path: impl Into<String>) -> Self {
        Self::Forbidden { path: path.into() }
    }

    pub fn internal(path: impl Into<String>) -> Self {
        Self::Internal { path: path.into() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, path) = match self {
            AppError::Unauthorized { path } => {
                (StatusCode::UNAUTHORIZED, "Authentication required", path)
            }
            AppError::Forbidden { path } => (StatusCode::FORBIDDEN, "Access denied", path),
            // 予期しない失敗は詳細を返さない
            AppError::Internal { path } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred",
                path,
            ),
        };

        let body = ApiErrorBody::new(status, message, path);
        (status, Json(body)).into_response()
    }
}

/// Validation failures of the `/auth/validate` endpoint. Always answered with
/// a `{valid, message}` body, never with `ApiErrorBody`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is missing")]
    MissingHeader,
    #[error("authorization header is malformed")]
    MalformedHeader,
    #[error("token is invalid")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingHeader => {
                (StatusCode::BAD_REQUEST, "Authorization header is missing")
            }
            AuthError::MalformedHeader => (
                StatusCode::BAD_REQUEST,
                "Invalid Authorization header format. Use: Bearer <token>",
            ),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Token is invalid or expired"),
        };

        let body = TokenValidationResponse::invalid(message);
        (status, Json(body)).into_response()
    }
}
