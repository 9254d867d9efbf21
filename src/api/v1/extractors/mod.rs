/*
 * Responsibility
 * - extractors の公開インターフェース (re-export)
 */
mod auth_ctx;

pub use auth_ctx::AuthCtx;
