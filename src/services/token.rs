//! Bearer token extraction and validation.
//!
//! Tokens are opaque strings. A token is accepted when it equals the
//! configured secret, or when it appears in the configured allow-list
//! (comma-separated, entries trimmed). There is no issuance, expiry or
//! revocation; the configuration is immutable for the process lifetime.

/// Validates presented tokens against a static secret and/or allow-list.
#[derive(Debug)]
pub struct TokenValidator {
    secret: String,
    allowed: Vec<String>,
}

impl TokenValidator {
    /// Build a validator from the raw configuration values.
    ///
    /// `allowed_raw` is split on commas with surrounding whitespace trimmed
    /// per entry. Empty secret / empty list never match anything; malformed
    /// configuration is not an error.
    pub fn from_config(secret: &str, allowed_raw: &str) -> Self {
        let allowed = allowed_raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            secret: secret.to_string(),
            allowed,
        }
    }

    /// Extract the token from an `Authorization` header value.
    ///
    /// Expected format: `Bearer <token>` (literal prefix, exactly one space).
    pub fn extract_token(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }

    /// Check a presented token against the secret and the allow-list.
    pub fn validate(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            tracing::debug!("token validation failed: token is blank");
            return false;
        }

        if !self.secret.trim().is_empty() && token == self.secret {
            tracing::debug!("token validated via secret key");
            return true;
        }

        if self.allowed.iter().any(|allowed| token == allowed) {
            tracing::debug!("token validated via allowed tokens list");
            return true;
        }

        tracing::debug!("token validation failed: not in secret key or allowed tokens");
        false
    }
}
