/*
[INPUT]:  API key credentials and nonce configuration
[OUTPUT]: Credential holder, nonce sources, HMAC signing primitive
[POS]:    Auth layer - handles Coinbase API key authentication
[UPDATE]: When auth scheme or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::ApiKeyCredentials;
pub use nonce::{MonotonicNonce, NonceSource};
pub use signer::HmacSigner;
