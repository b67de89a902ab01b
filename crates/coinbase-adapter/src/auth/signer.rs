/*
[INPUT]:  Message bytes and API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{CoinbaseError, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed with the API secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl HmacSigner {
    /// Create a signer from the API secret.
    ///
    /// Fails with a configuration error when the secret is empty.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(CoinbaseError::Configuration(
                "API secret is empty".to_string(),
            ));
        }
        Ok(Self {
            secret: secret.as_bytes().to_vec(),
        })
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| CoinbaseError::Configuration(format!("invalid HMAC key: {e}")))
    }

    /// Sign a message, returning the lowercase hex digest
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(message);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Verify a hex-encoded signature against a message
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        match self.mac() {
            Ok(mut mac) => {
                mac.update(message);
                mac.verify_slice(&expected).is_ok()
            }
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}
