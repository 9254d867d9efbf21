/*
 * Responsibility
 * - Bearer トークンの gate (ヘッダ抽出 → 検証 → AuthCtx を extensions に載せる)
 * - gate は拒否しない。拒否は policy 層と handler 側 extractor の責務
 * - route+method → Access の明示的な認可表 (AuthPolicy) とその enforcement
 */
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Method, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::token::TokenValidator;
use crate::state::AppState;

/// Access requirement for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Denied,
}

/// Explicit authorization table: route + method → requirement.
/// Everything not listed is denied.
const POLICY: &[(&str, &str, Access)] = &[
    ("GET", "/status", Access::Authenticated),
    ("GET", "/status/uptime", Access::Authenticated),
    ("GET", "/hello", Access::Authenticated),
    ("GET", "/version", Access::Authenticated),
    ("GET", "/auth/check", Access::Public),
    ("POST", "/auth/validate", Access::Public),
];

pub fn decide(method: &Method, path: &str) -> Access {
    POLICY
        .iter()
        .find(|(m, p, _)| method.as_str() == *m && path == *p)
        .map(|(_, _, access)| *access)
        .unwrap_or(Access::Denied)
}

/// 認証 middleware を適用する。gate が先 (外側)、enforcement が後。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router
        .layer(middleware::from_fn(enforce_policy))
        .layer(middleware::from_fn_with_state(state, token_gate))
}

/// Runs once per request before dispatch. Marks the request with `AuthCtx`
/// when a valid bearer token is presented; never rejects on its own.
async fn token_gate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(TokenValidator::extract_token);

    if let Some(token) = bearer {
        if state.tokens.validate(token) {
            tracing::debug!(
                method = %req.method(),
                path = %req.uri().path(),
                "authentication successful"
            );
            req.extensions_mut().insert(AuthCtx::api_client());
        } else {
            tracing::debug!(
                method = %req.method(),
                path = %req.uri().path(),
                "authentication failed"
            );
        }
    }

    next.run(req).await
}

/// Evaluates the policy table for every request: public routes pass through,
/// protected routes require the gate's marker (401 without it), unlisted
/// routes are denied outright (403).
async fn enforce_policy(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    match decide(req.method(), req.uri().path()) {
        Access::Public => Ok(next.run(req).await),
        Access::Authenticated => {
            if req.extensions().get::<AuthCtx>().is_some() {
                Ok(next.run(req).await)
            } else {
                Err(AppError::unauthorized(req.uri().path()))
            }
        }
        Access::Denied => Err(AppError::forbidden(req.uri().path())),
    }
}
