//! Bearer credential passed explicitly to authenticated clients

use std::fmt;

use crate::error::{AppError, AppResult};

/// Session token issued by the login endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. An empty token is treated as no session at all.
    pub fn new(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::Unauthenticated);
        }
        Ok(Self(token))
    }

    /// Build from an optional stored token, failing fast when absent
    pub fn from_stored(token: Option<String>) -> AppResult<Self> {
        token.map_or(Err(AppError::Unauthenticated), Self::new)
    }

    /// Raw token
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
