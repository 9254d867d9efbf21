/*
 * Responsibility
 * - URL 構造を定義
 * - /status, /auth, /hello, /version を route
 * - 認可の要否は middleware::auth::AuthPolicy 側の表で決める
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::{check_auth, validate_token},
    status::{get_status, get_uptime, hello, version},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(get_status))
        .route("/status/uptime", get(get_uptime))
        .route("/hello", get(hello))
        .route("/version", get(version))
        .route("/auth/check", get(check_auth))
        .route("/auth/validate", post(validate_token))
}
