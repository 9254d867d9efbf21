/*
 * Responsibility
 * - Auth endpoints の response DTO
 */
use serde::Serialize;

/// Outcome of a token check, for `/auth/check` and `/auth/validate`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenValidationResponse {
    pub valid: bool,
    pub message: String,
}

impl TokenValidationResponse {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}
