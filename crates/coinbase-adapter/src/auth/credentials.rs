/*
[INPUT]:  API key and secret strings supplied by the embedding application
[OUTPUT]: Immutable credential pair used by the request signer
[POS]:    Auth layer - credential holder
[UPDATE]: When adding new credential kinds
*/

use std::fmt;

/// API key credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCredentials {
    key: String,
    secret: String,
}

impl ApiKeyCredentials {
    /// Create credentials from an API key and secret.
    ///
    /// Empty values are accepted here and rejected when a request is signed.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// True when both key and secret are present
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
