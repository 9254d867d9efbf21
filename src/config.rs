/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_VERSION, Auth 設定など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    /// Reported by `/version` and in every status snapshot.
    pub app_version: String,

    /// Single shared secret. Empty means "no secret configured".
    pub api_secret_key: String,

    /// Raw comma-separated allow-list, parsed by the token validator.
    pub api_allowed_tokens: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_version = std::env::var("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string());

        // どちらも未設定のまま起動できる (単にどのトークンも通らなくなるだけ)
        let api_secret_key = std::env::var("API_SECRET_KEY").unwrap_or_default();

        let api_allowed_tokens = std::env::var("API_ALLOWED_TOKENS").unwrap_or_default();

        Ok(Self {
            addr,
            app_version,
            api_secret_key,
            api_allowed_tokens,
        })
    }
}
