/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (token gate / policy / HTTP 層)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, middleware, state::AppState};

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);

    let app = build_router(state);

    tracing::info!(addr = %config.addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Router 組み立ては tests からも使うため分離しておく。
pub fn build_router(state: AppState) -> Router {
    let routes = api::v1::routes();
    let routes = middleware::auth::apply(routes, state.clone());

    let app = routes.with_state(state);
    middleware::http::apply(app)
}
