use std::env;

use thiserror::Error;

/// Bearer token attached to every backend call.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

#[derive(Error, Debug)]
pub enum InvalidTokenError {
    #[error("Missing token")]
    Missing,
    #[error("Empty token")]
    Empty,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidTokenError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidTokenError::Empty);
        }
        Ok(Self(token))
    }

    /// Reads the token from the environment variable `PROJEKTOR_API_TOKEN`.
    pub fn from_env() -> Result<Self, InvalidTokenError> {
        match env::var("PROJEKTOR_API_TOKEN") {
            Ok(token) => Self::new(token),
            Err(_) => Err(InvalidTokenError::Missing),
        }
    }

    /// Value for the `Authorization` header.
    pub fn as_authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_authorization_header() {
        let token = BearerToken::new("abc123").unwrap();
        assert_eq!(token.as_authorization_header(), "Bearer abc123");
    }

    #[test]
    fn rejects_blank_token() {
        assert!(matches!(BearerToken::new("   "), Err(InvalidTokenError::Empty)));
    }
}
