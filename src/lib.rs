/*
 * Responsibility
 * - crate 公開ポイント (module tree の re-export)
 * - main.rs と tests/ の両方から app/router を使えるようにする
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
