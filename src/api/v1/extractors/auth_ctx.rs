/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークンは identity を持たないため principal は固定の擬似 ID
 * - 権限 (roles/scopes) は存在しない。マーカーがあるか無いかだけ
 */
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;

/// Marker attached by the token gate to requests that presented a valid
/// bearer token. Carries no permissions.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub principal: &'static str,
}

impl AuthCtx {
    /// The fixed pseudo-identity for API token auth.
    pub fn api_client() -> Self {
        Self {
            principal: "api-client",
        }
    }
}

/// Handler で AuthCtx を受け取るための extractor。
/// middleware が extensions に insert 済みである前提、無ければ 401。
impl FromRequestParts<AppState> for AuthCtx {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(parts.uri.path()))
    }
}
