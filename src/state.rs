/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: tokens: TokenValidator, status: ServerStatus など
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::status::ServerStatus;
use crate::services::token::TokenValidator;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenValidator>,
    pub status: Arc<ServerStatus>,
    pub app_version: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            tokens: Arc::new(TokenValidator::from_config(
                &config.api_secret_key,
                &config.api_allowed_tokens,
            )),
            status: Arc::new(ServerStatus::new(&config.app_version)),
            app_version: config.app_version.clone(),
        }
    }
}
