/*
 * Responsibility
 * - GET /status, /status/uptime (要 Bearer)
 * - GET /hello, /version (要 Bearer, 疎通確認用)
 * - AuthCtx extractor が enforcement の二層目 (gate はマークするだけ)
 */
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    api::v1::dto::status::{ServerStatusResponse, UptimeResponse},
    api::v1::extractors::AuthCtx,
    state::AppState,
};

pub async fn get_status(_auth: AuthCtx, State(state): State<AppState>) -> Json<ServerStatusResponse> {
    tracing::debug!("server status requested");
    Json(state.status.snapshot())
}

pub async fn get_uptime(_auth: AuthCtx, State(state): State<AppState>) -> Json<UptimeResponse> {
    tracing::debug!("server uptime requested");
    Json(UptimeResponse {
        uptime: state.status.uptime_millis(),
    })
}

pub async fn hello(_auth: AuthCtx) -> Json<Value> {
    Json(json!({"message": "Hello from server-status-api!"}))
}

pub async fn version(_auth: AuthCtx, State(state): State<AppState>) -> Json<Value> {
    Json(json!({"version": state.app_version}))
}
