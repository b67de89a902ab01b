/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Coinbase adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ApiKeyCredentials, HmacSigner, MonotonicNonce, NonceSource};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinbaseClient,
    CoinbaseError,
    ReqwestTransport,
    RequestSigner,
    Result,
    SignedHeaders,
    Transport,
    TransportRequest,
    TransportResponse,
};

// Re-export all types
pub use types::*;
